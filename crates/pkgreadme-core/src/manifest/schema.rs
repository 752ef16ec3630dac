use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Root structure deserialized from a package's composer.json.
///
/// Only the fields the README pipeline reads are modelled; everything else in
/// the manifest is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub extra: ExtraConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExtraConfig {
    #[serde(default)]
    pub readme: ReadmeConfig,

    /// Dotted command paths (e.g. `"site create"`) documented in the README.
    #[serde(default)]
    pub commands: Vec<String>,

    /// Package ships as part of a larger bundle. Any truthy JSON value counts.
    #[serde(default, deserialize_with = "truthy")]
    pub bundled: bool,
}

/// The `extra.readme` block.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReadmeConfig {
    /// Section headings in display order. `None` means use the defaults.
    #[serde(default)]
    pub sections: Option<Vec<String>>,

    /// Explicit badge markup, used verbatim instead of CI detection.
    #[serde(default)]
    pub shields: Option<Vec<String>>,

    /// `null` counts as unset; any other value is read for truthiness.
    #[serde(default, deserialize_with = "optional_truthy")]
    pub show_powered_by: Option<bool>,

    /// Every other key. Entries that are objects act as per-section
    /// `pre`/`body`/`post` overrides; anything else is ignored.
    #[serde(flatten)]
    pub overrides: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionOverride {
    pub pre: Option<String>,
    pub body: Option<String>,
    pub post: Option<String>,
}

impl SectionOverride {
    /// Read the slots out of a raw `extra.readme.<key>` value.
    ///
    /// Returns `None` for non-objects. Slots that are missing, `null`, arrays
    /// or objects stay unset; scalars are taken as their text.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let slot = |name: &str| object.get(name).and_then(scalar_text);
        Some(Self {
            pre: slot("pre"),
            body: slot("body"),
            post: slot("post"),
        })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Loose truthiness: `null`, `false`, `0`, `""`, `"0"` and empty
/// arrays or objects are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Value::deserialize(deserializer).map(|v| is_truthy(&v))
}

fn optional_truthy<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| is_truthy(&value)))
}

impl PackageManifest {
    /// The last `/`-separated segment of the package name.
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn has_commands(&self) -> bool {
        !self.extra.commands.is_empty()
    }

    pub fn show_powered_by(&self) -> bool {
        self.extra.readme.show_powered_by.unwrap_or(true)
    }

    pub fn section_override(&self, key: &str) -> Option<SectionOverride> {
        self.extra
            .readme
            .overrides
            .get(key)
            .and_then(SectionOverride::from_value)
    }
}
