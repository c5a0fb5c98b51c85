//! Subject templates keyed by outcome category

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::SubjectCategory;
use crate::error::ConfigError;

/// Matches one `${name}` placeholder, capturing the name
pub(crate) static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^{}]*)\}").expect("placeholder pattern is valid"));

/// Complete set of subject templates, one per [`SubjectCategory`]
///
/// Built once from a (possibly partial) configured map merged over the
/// built-in defaults, so lookups never miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTemplates {
    templates: BTreeMap<SubjectCategory, String>,
}

impl SubjectTemplates {
    /// Merge `configured` over the built-in defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedTemplate`] if any configured template
    /// has an empty or unterminated placeholder.
    pub fn from_partial(configured: BTreeMap<SubjectCategory, String>) -> Result<Self, ConfigError> {
        for (category, template) in &configured {
            validate(template).map_err(|reason| ConfigError::MalformedTemplate {
                category: *category,
                reason,
            })?;
        }

        let mut templates: BTreeMap<SubjectCategory, String> = SubjectCategory::ALL
            .iter()
            .map(|c| (*c, c.default_template().to_string()))
            .collect();
        templates.extend(configured);

        Ok(Self { templates })
    }

    /// Template for `category`
    #[must_use]
    pub fn get(&self, category: SubjectCategory) -> &str {
        // Both constructors start from the full default set.
        &self.templates[&category]
    }

    /// Iterate `(category, template)` pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (SubjectCategory, &str)> {
        self.templates.iter().map(|(c, t)| (*c, t.as_str()))
    }
}

impl Default for SubjectTemplates {
    fn default() -> Self {
        Self {
            templates: SubjectCategory::ALL
                .iter()
                .map(|c| (*c, c.default_template().to_string()))
                .collect(),
        }
    }
}

fn validate(template: &str) -> Result<(), String> {
    for caps in PLACEHOLDER.captures_iter(template) {
        if caps[1].trim().is_empty() {
            return Err("empty placeholder name".to_string());
        }
    }

    let stripped = PLACEHOLDER.replace_all(template, "");
    if stripped.contains("${") {
        return Err("unterminated placeholder".to_string());
    }
    Ok(())
}
