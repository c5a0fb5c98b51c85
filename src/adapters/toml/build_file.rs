//! Build result files
//!
//! A build result can be described in TOML or JSON. The format is picked by
//! file extension (`.json` for JSON, anything else is TOML).
//!
//! Properties are read as the format's own value type first and mapped into
//! [`PropertyValue`] afterwards, so TOML date-times and JSON nulls survive.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, anyhow, bail};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::core::models::{BuildResult, Contributor, IntegrationStatus, PropertyValue};

/// Accepted layout of a TOML local date-time (no offset)
const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A build result file structure, generic over the format's value type
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "P: Deserialize<'de>"))]
pub struct BuildFile<P> {
    /// Status of this run
    pub status: String,

    /// Status of the previous run
    #[serde(default = "default_previous_status")]
    pub previous_status: String,

    /// Whether this run fixes a broken build
    #[serde(default)]
    pub fixed: bool,

    /// Usernames whose changes are in this run
    #[serde(default)]
    pub contributors: Vec<String>,

    /// Usernames implicated in the ongoing failure
    #[serde(default)]
    pub failure_users: Vec<String>,

    /// Named properties for subject templates
    #[serde(default)]
    pub properties: BTreeMap<String, P>,
}

fn default_previous_status() -> String {
    "unknown".to_string()
}

impl<P> BuildFile<P> {
    /// Convert into a [`BuildResult`], mapping each property with `convert`
    ///
    /// # Errors
    ///
    /// Returns an error if either status string is not a known status, or if
    /// a property cannot be converted.
    pub fn into_result(
        self,
        convert: impl Fn(P) -> anyhow::Result<PropertyValue>,
    ) -> anyhow::Result<BuildResult> {
        let status: IntegrationStatus = self.status.parse().map_err(|e: String| anyhow!(e))?;
        let previous_status: IntegrationStatus =
            self.previous_status.parse().map_err(|e: String| anyhow!(e))?;

        let mut properties = BTreeMap::new();
        for (name, value) in self.properties {
            let value = convert(value).with_context(|| format!("invalid property {name}"))?;
            properties.insert(name, value);
        }

        Ok(BuildResult {
            status,
            previous_status,
            fixed: self.fixed,
            contributors: self.contributors.into_iter().map(Contributor::new).collect(),
            failure_contributors: self.failure_users,
            properties,
        })
    }
}

/// Parse a build result from TOML text
///
/// # Errors
///
/// Returns an error if the text is not a valid build result.
pub fn parse_build_toml(content: &str) -> anyhow::Result<BuildResult> {
    let file: BuildFile<toml::Value> = toml::from_str(content)?;
    file.into_result(toml_property)
}

/// Parse a build result from JSON text
///
/// # Errors
///
/// Returns an error if the text is not a valid build result.
pub fn parse_build_json(content: &str) -> anyhow::Result<BuildResult> {
    let file: BuildFile<serde_json::Value> = serde_json::from_str(content)?;
    file.into_result(json_property)
}

/// Load a build result file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_build(path: &Path) -> anyhow::Result<BuildResult> {
    let content = fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_build_json(&content)
    } else {
        parse_build_toml(&content)
    }
}

fn toml_property(value: toml::Value) -> anyhow::Result<PropertyValue> {
    Ok(match value {
        toml::Value::String(s) => PropertyValue::Text(s),
        toml::Value::Integer(i) => PropertyValue::Integer(i),
        toml::Value::Float(x) => PropertyValue::Float(x),
        toml::Value::Boolean(b) => PropertyValue::Bool(b),
        toml::Value::Datetime(dt) => toml_datetime(&dt),
        toml::Value::Array(items) => {
            PropertyValue::List(items.into_iter().map(toml_property).collect::<anyhow::Result<_>>()?)
        },
        toml::Value::Table(_) => bail!("tables are not supported as property values"),
    })
}

/// Offset and local date-times become UTC instants; a bare date or time
/// keeps its TOML spelling as text.
fn toml_datetime(dt: &toml::value::Datetime) -> PropertyValue {
    let text = dt.to_string();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&text) {
        return PropertyValue::DateTime(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(&text, LOCAL_DATETIME_FORMAT) {
        return PropertyValue::DateTime(naive.and_utc());
    }
    PropertyValue::Text(text)
}

fn json_property(value: serde_json::Value) -> anyhow::Result<PropertyValue> {
    Ok(match value {
        serde_json::Value::Null => PropertyValue::Null,
        serde_json::Value::Bool(b) => PropertyValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                PropertyValue::Integer(i)
            } else if let Some(x) = n.as_f64() {
                PropertyValue::Float(x)
            } else {
                PropertyValue::Text(n.to_string())
            }
        },
        serde_json::Value::String(s) => PropertyValue::Text(s),
        serde_json::Value::Array(items) => {
            PropertyValue::List(items.into_iter().map(json_property).collect::<anyhow::Result<_>>()?)
        },
        serde_json::Value::Object(_) => bail!("objects are not supported as property values"),
    })
}
