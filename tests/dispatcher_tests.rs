//! Query dispatcher against the on-disk fixture corpus.

mod fixtures;

use secure_coding_mcp::RulesError;
use secure_coding_mcp::markdown::{extract_rule_section, heading_lines, parse_checklist};

use fixtures::{count_rule_headings, fixture_dispatcher, read_fixture};

mod get_rule {
    use super::*;

    #[tokio::test]
    async fn test_single_rule_section() {
        let section = fixture_dispatcher().get_rule("INPUT-01").await.unwrap();

        let first_line = section.lines().next().unwrap();
        assert_eq!(first_line, "### [INPUT-01] Validate all input on a trusted system");
        assert!(
            !section.lines().skip(1).any(|l| l.starts_with("### [")),
            "section must stop before the next rule heading"
        );
        assert!(section.ends_with("the server must reject it."));
    }

    #[tokio::test]
    async fn test_last_rule_runs_to_end_of_file() {
        let section = fixture_dispatcher().get_rule("INPUT-04").await.unwrap();
        assert!(section.starts_with("### [INPUT-04] Reject on validation failure"));
        assert!(section.ends_with("rejected with a 400."));
    }

    #[tokio::test]
    async fn test_domain_is_byte_identical() {
        let d = fixture_dispatcher();
        assert_eq!(
            d.get_rule("input-validation").await.unwrap(),
            read_fixture("input-validation.md")
        );
        assert_eq!(
            d.get_rule("API-SECURITY").await.unwrap(),
            read_fixture("api-security.md")
        );
    }

    #[tokio::test]
    async fn test_unknown_prefix() {
        let err = fixture_dispatcher().get_rule("BOGUS-99").await.unwrap_err();
        assert!(err.is_caller_error());
        assert_eq!(
            err.to_string(),
            "Unknown rule prefix: BOGUS. Use list_rules to see available domains."
        );
    }

    #[tokio::test]
    async fn test_rule_missing_from_file() {
        let err = fixture_dispatcher().get_rule("API-42").await.unwrap_err();
        assert_eq!(err.to_string(), "Rule API-42 not found in api-security.md.");
    }

    #[tokio::test]
    async fn test_regex_characters_do_not_match() {
        // Not rule-id shaped, so it is treated as a domain slug.
        let err = fixture_dispatcher().get_rule("INPUT-0(1").await.unwrap_err();
        assert!(matches!(err, RulesError::UnknownDomain(ref d) if d == "input-0(1"));

        let text = read_fixture("input-validation.md");
        assert!(extract_rule_section(&text, "INPUT-0(1").is_none());
        assert!(extract_rule_section(&text, "INPUT-0.").is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_a_request_error() {
        let err = fixture_dispatcher().get_rule("GONE-01").await.unwrap_err();
        assert!(matches!(err, RulesError::RuleFileRead { ref filename, .. } if filename == "missing.md"));
        assert!(err.is_caller_error());
    }
}

mod checklist {
    use super::*;

    #[tokio::test]
    async fn test_api_security_table() {
        let table = fixture_dispatcher()
            .audit_checklist("api-security")
            .await
            .unwrap();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines[0], "| Rule ID | Rule | Verification |");
        assert_eq!(lines[1], "| :--- | :--- | :--- |");
        assert_eq!(
            lines.len() - 2,
            count_rule_headings(&read_fixture("api-security.md"), "API")
        );
    }

    #[tokio::test]
    async fn test_api_security_records() {
        let records = fixture_dispatcher()
            .checklist_records("api-security")
            .await
            .unwrap();

        assert_eq!(records[0].rule_id, "API-01");
        assert_eq!(
            records[0].verification,
            "Request another tenant's object ID and expect 403 or 404."
        );

        // Rule present, verification absent.
        assert_eq!(records[2].rule, "Deny administrative endpoints by default and grant them per role.");
        assert_eq!(records[2].verification, "See rule file for details");

        // Bulleted labels.
        assert_eq!(
            records[3].rule,
            "Verify signature, `alg`, `iss`, `aud` and `exp` on every token."
        );
        assert_eq!(
            records[3].verification,
            "Replay a token signed with `alg: none`; it must be rejected."
        );

        // No labels at all: title fallback.
        assert_eq!(records[4].rule, "Rate limit every endpoint");
        assert_eq!(records[4].verification, "See rule file for details");
    }

    #[tokio::test]
    async fn test_domain_is_case_insensitive() {
        let d = fixture_dispatcher();
        assert_eq!(
            d.audit_checklist("Input-Validation").await.unwrap(),
            d.audit_checklist("input-validation").await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_empty_checklist() {
        let err = fixture_dispatcher()
            .audit_checklist("notes")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No checklist rules found in no-checklist.md.");
    }

    #[tokio::test]
    async fn test_unknown_domain_keeps_caller_spelling() {
        let err = fixture_dispatcher()
            .audit_checklist("Web-Stuff")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown domain: Web-Stuff. Use list_rules to see available domains."
        );
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_every_heading_is_extractable() {
        for file in ["input-validation.md", "api-security.md"] {
            let text = read_fixture(file);
            for heading in heading_lines(&text) {
                let id = heading.after_marker().split(']').next().unwrap();
                let section = extract_rule_section(&text, id).unwrap();
                assert!(section.starts_with(heading.line.trim_end()));
            }
        }
    }

    #[test]
    fn test_checklist_never_fabricates_ids() {
        let text = read_fixture("input-validation.md");
        for record in parse_checklist(&text) {
            assert!(text.contains(&format!("### [{}]", record.rule_id)));
        }
    }

    #[test]
    fn test_list_rules_is_idempotent() {
        let d = fixture_dispatcher();
        assert_eq!(d.list_rules_json().unwrap(), d.list_rules_json().unwrap());
        assert_eq!(d.list_rules().len(), 24);
    }
}
