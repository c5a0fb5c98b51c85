//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{IntegrationStatus, Recipient, SubjectCategory, TriggerCategory};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Message metadata computed for one build result
#[derive(Debug, Serialize)]
pub struct NotifyResult {
    /// Status of the run
    pub status: IntegrationStatus,
    /// Status of the previous run
    pub previous_status: IntegrationStatus,
    /// Whether the status changed since the previous run
    pub state_changed: bool,
    /// Subject category the template was picked by
    pub category: SubjectCategory,
    /// Recipients sorted by address
    pub recipients: Vec<Recipient>,
    /// Recipients as a `", "`-joined address list
    pub to: String,
    /// Rendered subject line
    pub subject: String,
}

/// Summary of a validated rules file
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Rules file that was validated
    pub path: String,
    /// Number of users in the directory
    pub users: usize,
    /// Number of groups in the directory
    pub groups: usize,
    /// Converter names in application order
    pub converters: Vec<String>,
    /// Modifier notification categories in order
    pub modifier_categories: Vec<TriggerCategory>,
    /// Effective subject template per category
    pub subjects: Vec<SubjectInfo>,
    /// Subject prefix, if configured
    pub subject_prefix: Option<String>,
}

/// Effective subject template for one category
#[derive(Debug, Serialize)]
pub struct SubjectInfo {
    /// Outcome category
    pub category: SubjectCategory,
    /// Template text
    pub template: String,
}

impl NotifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "Build: {} (previous: {}, {})",
            self.status,
            self.previous_status,
            if self.state_changed { "changed" } else { "unchanged" }
        );
        println!("Category: {}", self.category);

        if self.recipients.is_empty() {
            println!("To: {}", "(no recipients)".dimmed());
        } else {
            println!("To: {}", self.to);
        }
        println!("Subject: {}", self.subject.bold());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{} {}", "Valid:".green(), self.path);
        println!("  users:      {}", self.users);
        println!("  groups:     {}", self.groups);
        if self.converters.is_empty() {
            println!("  converters: none");
        } else {
            println!("  converters: {}", self.converters.join(" -> "));
        }
        if self.modifier_categories.is_empty() {
            println!("  modifiers:  none");
        } else {
            let names: Vec<&str> = self.modifier_categories.iter().map(|c| c.as_str()).collect();
            println!("  modifiers:  {}", names.join(", "));
        }
        if let Some(prefix) = &self.subject_prefix {
            println!("  prefix:     {prefix}");
        }
        println!("\nSubjects:");
        for s in &self.subjects {
            println!("  [{}] {}", s.category, s.template);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
