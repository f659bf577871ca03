//! The fixed OWASP rule catalog.

use std::collections::HashSet;

use super::types::{CatalogEntry, DomainSummary};
use crate::error::{Result, RulesError};

/// Built-in catalog, in definition order. Prefixes and domain slugs are a
/// stable public vocabulary; do not rename.
pub const OWASP_CATALOG: [CatalogEntry; 22] = [
    CatalogEntry::new("INPUT", "input-validation.md", "input-validation", "XSS, injection, sanitization"),
    CatalogEntry::new("OUT", "output-encoding.md", "output-encoding", "XSS prevention, context-aware encoding"),
    CatalogEntry::new("AUTH", "authentication-password-mgmt.md", "authentication-password-mgmt", "Login, passwords, MFA"),
    CatalogEntry::new("SESS", "session-management.md", "session-management", "Cookies, session IDs, CSRF"),
    CatalogEntry::new("AC", "access-control.md", "access-control", "RBAC, IDOR, authorization"),
    CatalogEntry::new("API", "api-security.md", "api-security", "BOLA, BOPLA, BFLA, JWT, rate limiting"),
    CatalogEntry::new("DOCKER", "dockerfile-security.md", "dockerfile-security", "Image hardening, rootless, secrets"),
    CatalogEntry::new("K8S", "cloud-native-k8s.md", "cloud-native-k8s", "Pod security, network policies, RBAC"),
    CatalogEntry::new("CICD", "cicd-pipeline-security.md", "cicd-pipeline-security", "Pipeline integrity, runners"),
    CatalogEntry::new("CHAIN", "software-supply-chain.md", "software-supply-chain", "SCA, SBOM, SLSA, artifact signing"),
    CatalogEntry::new("SECRET", "secrets-management.md", "secrets-management", "Vaults, env vars, rotation"),
    CatalogEntry::new("IAC", "iac-security.md", "iac-security", "Terraform, CloudFormation, policy-as-code"),
    CatalogEntry::new("CLIENT", "client-side-security.md", "client-side-security", "CSP, headers, DOM safety, SRI"),
    CatalogEntry::new("CRYP", "cryptographic-practices.md", "cryptographic-practices", "Encryption, hashing, key management"),
    CatalogEntry::new("COM", "communication-security.md", "communication-security", "TLS/HTTPS, certificate validation"),
    CatalogEntry::new("DB", "database-security.md", "database-security", "Parameterized queries, SQL injection"),
    CatalogEntry::new("FILE", "file-management.md", "file-management", "Uploads, LFI/RFI, path traversal"),
    CatalogEntry::new("DATA", "data-protection.md", "data-protection", "Encryption at rest, PII handling"),
    CatalogEntry::new("ERR", "error-handling-logging.md", "error-handling-logging", "Logging, audit trails, debug info"),
    CatalogEntry::new("MEM", "memory-management.md", "memory-management", "Buffer overflows, resource leaks"),
    CatalogEntry::new("GEN", "general-coding-practices.md", "general-coding-practices", "Secure defaults, least privilege"),
    CatalogEntry::new("SYS", "system-configuration.md", "system-configuration", "Server hardening, patching"),
];

/// Read-only ordered list of catalog entries, addressable by prefix or domain.
///
/// Lookups are exact: prefixes are case-sensitive, domains are compared after
/// lowercasing the query. There is no partial or fuzzy matching.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    entries: Vec<CatalogEntry>,
}

impl RuleCatalog {
    /// Build a catalog from arbitrary entries, rejecting duplicate keys.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut prefixes = HashSet::new();
        let mut domains = HashSet::new();
        for entry in &entries {
            if !prefixes.insert(entry.prefix) {
                return Err(RulesError::Config(format!(
                    "duplicate catalog prefix: {}",
                    entry.prefix
                )));
            }
            if !domains.insert(entry.domain) {
                return Err(RulesError::Config(format!(
                    "duplicate catalog domain: {}",
                    entry.domain
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in 22-domain OWASP catalog.
    pub fn owasp() -> Self {
        Self {
            entries: OWASP_CATALOG.to_vec(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn by_prefix(&self, prefix: &str) -> Result<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.prefix == prefix)
            .ok_or_else(|| RulesError::UnknownPrefix(prefix.to_string()))
    }

    /// Resolve a domain slug. The query is lowercased; the error carries the
    /// slug as it was compared.
    pub fn by_domain(&self, domain: &str) -> Result<&CatalogEntry> {
        let domain = domain.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.domain == domain)
            .ok_or(RulesError::UnknownDomain(domain))
    }

    pub fn summaries(&self) -> Vec<DomainSummary> {
        self.entries.iter().map(DomainSummary::from).collect()
    }

}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::owasp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owasp_catalog_keys_are_unique() {
        let catalog = RuleCatalog::owasp();
        assert_eq!(catalog.entries().len(), 22);

        let prefixes: HashSet<_> = catalog.entries().iter().map(|e| e.prefix).collect();
        let domains: HashSet<_> = catalog.entries().iter().map(|e| e.domain).collect();
        assert_eq!(prefixes.len(), 22);
        assert_eq!(domains.len(), 22);

        assert!(RuleCatalog::new(OWASP_CATALOG.to_vec()).is_ok());
    }

    #[test]
    fn test_domains_are_lowercase_and_match_filenames() {
        for entry in RuleCatalog::owasp().entries() {
            assert_eq!(entry.domain, entry.domain.to_lowercase());
            assert_eq!(entry.filename, format!("{}.md", entry.domain));
        }
    }

    #[test]
    fn test_by_prefix_is_exact() {
        let catalog = RuleCatalog::owasp();
        assert_eq!(catalog.by_prefix("K8S").unwrap().domain, "cloud-native-k8s");
        assert!(matches!(
            catalog.by_prefix("k8s"),
            Err(RulesError::UnknownPrefix(p)) if p == "k8s"
        ));
        assert!(catalog.by_prefix("INP").is_err());
    }

    #[test]
    fn test_by_domain_lowercases_query() {
        let catalog = RuleCatalog::owasp();
        assert_eq!(catalog.by_domain("API-Security").unwrap().prefix, "API");
        assert!(matches!(
            catalog.by_domain("Nope"),
            Err(RulesError::UnknownDomain(d)) if d == "nope"
        ));
        assert!(catalog.by_domain("api").is_err());
    }

    #[test]
    fn test_summaries_keep_definition_order() {
        let summaries = RuleCatalog::owasp().summaries();
        assert_eq!(summaries.first().unwrap().prefix, "INPUT");
        assert_eq!(summaries.last().unwrap().prefix, "SYS");
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let dup = vec![
            CatalogEntry::new("A", "a.md", "a", ""),
            CatalogEntry::new("A", "b.md", "b", ""),
        ];
        assert!(matches!(RuleCatalog::new(dup), Err(RulesError::Config(_))));

        let dup = vec![
            CatalogEntry::new("A", "a.md", "a", ""),
            CatalogEntry::new("B", "b.md", "a", ""),
        ];
        assert!(RuleCatalog::new(dup).is_err());
    }
}
