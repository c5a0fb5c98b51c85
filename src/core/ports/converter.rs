//! Address converter port
//!
//! Defines how a raw source control identity is turned into a deliverable
//! address when the user directory has no explicit entry for it.

/// One step of the address conversion chain
///
/// Converters are applied left to right, each receiving the output of the
/// previous one. Returning `None` (or an empty string) ends the chain and
/// the identity yields no recipient.
pub trait AddressConverter: Send + Sync {
    /// Short name used in logs and validation output
    fn name(&self) -> &str {
        "custom"
    }

    /// Convert one identity string
    fn convert(&self, input: &str) -> Option<String>;
}

impl<F> AddressConverter for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn convert(&self, input: &str) -> Option<String> {
        self(input)
    }
}

/// Run `username` through `chain` in order
///
/// Returns `None` if the chain is empty or any step yields nothing usable.
#[must_use]
pub fn convert_chain(chain: &[Box<dyn AddressConverter>], username: &str) -> Option<String> {
    if chain.is_empty() {
        return None;
    }

    let mut current = username.to_string();
    for converter in chain {
        match converter.convert(&current) {
            Some(next) if !next.is_empty() => current = next,
            _ => {
                log::debug!(
                    "converter {} produced no address for {username}, dropping",
                    converter.name()
                );
                return None;
            },
        }
    }
    Some(current)
}
