//! Notification users, groups and resolved recipients

use serde::Serialize;

use super::TriggerCategory;

/// An entry in the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationUser {
    /// Source control identity, unique within the directory
    pub username: String,

    /// Name of the group this user belongs to, if any
    pub group: Option<String>,

    /// Deliverable address, absent if unresolved
    pub address: Option<String>,
}

impl NotificationUser {
    /// Create a user entry
    pub fn new(
        username: impl Into<String>,
        group: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            username: username.into(),
            group,
            address,
        }
    }

    /// The recipient record for this user, if it has an address
    #[must_use]
    pub fn recipient(&self) -> Option<Recipient> {
        self.address
            .as_ref()
            .filter(|a| !a.is_empty())
            .map(|address| Recipient::new(self.username.clone(), address.clone()))
    }
}

/// A named group of users sharing one trigger category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationGroup {
    /// Group name, unique within the directory
    pub name: String,

    /// The one condition under which members are notified directly
    pub trigger: TriggerCategory,
}

impl NotificationGroup {
    /// Create a group
    pub fn new(name: impl Into<String>, trigger: TriggerCategory) -> Self {
        Self {
            name: name.into(),
            trigger,
        }
    }
}

/// A resolved, deliverable recipient
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Recipient {
    /// Identity the address was resolved from
    pub username: String,

    /// Deliverable address; the key of the recipient set
    pub address: String,
}

impl Recipient {
    /// Create a recipient record
    pub fn new(username: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            address: address.into(),
        }
    }
}
