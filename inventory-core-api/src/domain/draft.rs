use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw, unvalidated attribute input for one asset record.
///
/// Form fields and CSV cells arrive as strings keyed by attribute name;
/// `RecordSchema::validate_draft` turns a draft into typed field values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDraft {
    values: BTreeMap<String, String>,
}

impl AssetDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one attribute, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for AssetDraft {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
