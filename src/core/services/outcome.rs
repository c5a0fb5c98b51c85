//! Outcome classification shared by recipient routing and subject selection

use crate::core::models::{BuildResult, IntegrationStatus, SubjectCategory, TriggerCategory};
use crate::error::NotifyError;

/// Whether this run's status differs from the previous run's
///
/// A first-ever run has a previous status of `Unknown`, so it always counts
/// as changed.
#[must_use]
pub fn state_changed(result: &BuildResult) -> bool {
    result.status != result.previous_status
}

/// Whether `category`'s guard holds for `result`
///
/// The table is total, so the same guards serve group triggers and modifier
/// categories. `Exception` is accepted as a modifier category and adds
/// contributors only when the run ended in an exception.
#[must_use]
pub fn trigger_applies(category: TriggerCategory, result: &BuildResult) -> bool {
    let applies = match category {
        TriggerCategory::Always => true,
        TriggerCategory::Change => state_changed(result),
        TriggerCategory::Failed => result.status.is_failed(),
        TriggerCategory::Success => result.status == IntegrationStatus::Success,
        TriggerCategory::Fixed => result.fixed,
        TriggerCategory::Exception => result.status == IntegrationStatus::Exception,
    };
    log::trace!("trigger {category} for status {}: {applies}", result.status);
    applies
}

/// Subject category for `result`
///
/// # Errors
///
/// Returns [`NotifyError::UnknownBuildStatus`] for statuses other than
/// success, failure and exception.
pub fn classify(result: &BuildResult) -> Result<SubjectCategory, NotifyError> {
    let changed = state_changed(result);
    match result.status {
        IntegrationStatus::Exception => Ok(SubjectCategory::Exception),
        IntegrationStatus::Success if changed => Ok(SubjectCategory::Fixed),
        IntegrationStatus::Success => Ok(SubjectCategory::Success),
        IntegrationStatus::Failure if changed => Ok(SubjectCategory::Broken),
        IntegrationStatus::Failure => Ok(SubjectCategory::StillBroken),
        status @ (IntegrationStatus::Cancelled | IntegrationStatus::Unknown) => {
            Err(NotifyError::UnknownBuildStatus(status))
        },
    }
}
