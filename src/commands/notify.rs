//! Compute recipients and subject for one build result

use std::path::Path;

use anyhow::Context;
use buildmail::adapters::toml::{load_build, load_rules};
use buildmail::core::services::{NotificationMessage, join_addresses};
use buildmail::output::{NotifyResult, OutputMode};

/// Load the rules and the build result, then print the message metadata
pub fn notify(rules: &Path, build: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_rules(rules)
        .with_context(|| format!("failed to load rules from {}", rules.display()))?;
    let result = load_build(build)
        .with_context(|| format!("failed to load build result from {}", build.display()))?;

    let message = NotificationMessage::new(&result, &config);
    let recipients = message.recipients();
    if recipients.is_empty() {
        log::info!("no recipients for {} build", result.status);
    }

    let output = NotifyResult {
        status: result.status,
        previous_status: result.previous_status,
        state_changed: message.state_changed(),
        category: message.category()?,
        to: join_addresses(&recipients),
        recipients,
        subject: message.subject()?,
    };
    output.render(mode);
    Ok(())
}
