use console::style;

use crate::catalog::DomainSummary;
use crate::server::ResourceDescriptor;

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("═".repeat(60)).dim());
        println!();
    }

    pub fn print_domains_table(&self, domains: &[DomainSummary]) {
        if domains.is_empty() {
            println!("{}", style("No rule domains found.").dim());
            return;
        }

        println!(
            "{:<8} {:<30} {}",
            style("Prefix").bold(),
            style("Domain").bold(),
            style("Description").bold()
        );
        println!("{}", style("─".repeat(80)).dim());

        for domain in domains {
            println!(
                "{:<8} {:<30} {}",
                style(&domain.prefix).cyan(),
                domain.domain,
                style(&domain.description).dim()
            );
        }

        println!();
        println!("{}", style(format!("{} domains", domains.len())).dim());
    }

    pub fn print_resources(&self, resources: &[ResourceDescriptor]) {
        for resource in resources {
            println!(
                "{}  {}",
                style(&resource.uri).cyan(),
                style(&resource.description).dim()
            );
        }
    }

    /// Rule text and tables go to stdout unstyled so they can be piped.
    pub fn print_text(&self, text: &str) {
        println!("{}", text);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
