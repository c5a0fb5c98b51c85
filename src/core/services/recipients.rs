//! Recipient resolver
//!
//! Computes the deduplicated, address-ordered set of people to notify for
//! one build result:
//!
//! 1. Direct subscribers: users whose group's trigger holds for the run.
//! 2. Contributors and failure contributors, once for every modifier
//!    category whose trigger holds.
//!
//! Identities without a directory entry go through the converter chain;
//! identities that resolve to nothing are dropped silently.

use std::collections::BTreeMap;

use super::outcome::trigger_applies;
use crate::core::models::{BuildResult, Recipient, RuleConfig};
use crate::core::ports::convert_chain;

/// Resolve the recipients for `result`, sorted by address
#[must_use]
pub fn resolve_recipients(result: &BuildResult, config: &RuleConfig) -> Vec<Recipient> {
    let mut recipients: BTreeMap<String, Recipient> = BTreeMap::new();

    add_subscribers(&mut recipients, result, config);

    for category in config.modifier_categories() {
        if !trigger_applies(*category, result) {
            continue;
        }
        let contributors = result.contributors.iter().map(|c| c.username.as_str());
        let failure_contributors = result.failure_contributors.iter().map(String::as_str);
        for username in contributors.chain(failure_contributors) {
            if let Some(recipient) = resolve_identity(username, config) {
                insert(&mut recipients, recipient);
            }
        }
    }

    recipients.into_values().collect()
}

/// Resolve the recipients for `result` as a `", "`-joined address list
#[must_use]
pub fn recipients_string(result: &BuildResult, config: &RuleConfig) -> String {
    join_addresses(&resolve_recipients(result, config))
}

/// Join already-resolved recipients into a `", "`-separated address list
#[must_use]
pub fn join_addresses(recipients: &[Recipient]) -> String {
    recipients
        .iter()
        .map(|r| r.address.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve one source control identity to a recipient
///
/// An explicit directory entry wins. Otherwise the converter chain is
/// applied; with no converters configured the identity yields nothing.
#[must_use]
pub fn resolve_identity(username: &str, config: &RuleConfig) -> Option<Recipient> {
    if username.is_empty() {
        return None;
    }

    if let Some(user) = config.user(username) {
        return user.recipient();
    }

    let resolved = convert_chain(config.converters(), username).map(|address| Recipient::new(username, address));
    if resolved.is_none() {
        log::debug!("no address for contributor {username}");
    }
    resolved
}

fn add_subscribers(
    recipients: &mut BTreeMap<String, Recipient>,
    result: &BuildResult,
    config: &RuleConfig,
) {
    for user in config.users().values() {
        let Some(group_name) = user.group.as_deref() else {
            continue;
        };
        let Some(group) = config.group(group_name) else {
            log::debug!("user {} references unknown group {group_name}, skipping", user.username);
            continue;
        };
        if !trigger_applies(group.trigger, result) {
            continue;
        }
        match user.recipient() {
            Some(recipient) => insert(recipients, recipient),
            None => log::debug!("user {} has no address, skipping", user.username),
        }
    }
}

fn insert(recipients: &mut BTreeMap<String, Recipient>, recipient: Recipient) {
    recipients.insert(recipient.address.clone(), recipient);
}
