use std::io::{self, Write};

use serde::Serialize;

use crate::catalog::DomainSummary;
use crate::cli::{Display, OutputFormat};
use crate::dispatch::ToolResponse;
use crate::markdown::{ChecklistRecord, render_checklist_table};
use crate::server::ResourceDescriptor;

/// Writes command results in the selected format.
///
/// - Text: styled tables for listings, raw markdown for rule content
/// - Json: one pretty-printed JSON document on stdout
pub struct OutputWriter {
    format: OutputFormat,
    display: Display,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            display: Display::new(),
        }
    }

    pub fn emit_domains(&self, domains: &[DomainSummary]) {
        match self.format {
            OutputFormat::Text => {
                self.display.print_header("Secure Coding Rule Domains");
                self.display.print_domains_table(domains);
            }
            OutputFormat::Json => self.write_json(&domains),
        }
    }

    /// Emit a rule/domain lookup. Returns whether it succeeded.
    pub fn emit_response(&self, response: &ToolResponse) -> bool {
        match self.format {
            OutputFormat::Text if response.is_error => self.display.print_error(&response.text),
            OutputFormat::Text => self.display.print_text(&response.text),
            OutputFormat::Json => self.write_json(response),
        }
        !response.is_error
    }

    pub fn emit_checklist(&self, records: &[ChecklistRecord]) {
        match self.format {
            OutputFormat::Text => self.display.print_text(&render_checklist_table(records)),
            OutputFormat::Json => self.write_json(&records),
        }
    }

    pub fn emit_resources(&self, resources: &[ResourceDescriptor]) {
        match self.format {
            OutputFormat::Text => self.display.print_resources(resources),
            OutputFormat::Json => self.write_json(&resources),
        }
    }

    pub fn emit_error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => self.display.print_error(message),
            OutputFormat::Json => self.write_json(&ToolResponse::error(message)),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            let mut stdout = io::stdout().lock();
            let _ = writeln!(stdout, "{}", json);
            let _ = stdout.flush();
        }
    }
}
