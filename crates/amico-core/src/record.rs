//! Dataset records as returned by a catalog query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field holding the logical dataset name.
pub const LDN_FIELD: &str = "ldn";
/// Field holding the short physics description.
pub const PHYSICS_SHORT_FIELD: &str = "physics_short";

/// A single dataset entry.
///
/// `ldn` identifies the dataset and `physics_short` is the label the matcher
/// scores. Any other catalog fields ride along untouched in `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub ldn: String,
    pub physics_short: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(ldn: impl Into<String>, physics_short: impl Into<String>) -> Self {
        Self {
            ldn: ldn.into(),
            physics_short: physics_short.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Attach an additional catalog field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up any field by name, including `ldn` and `physics_short`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            LDN_FIELD => Some(&self.ldn),
            PHYSICS_SHORT_FIELD => Some(&self.physics_short),
            other => self.fields.get(other).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_covers_named_and_extra_fields() {
        let record = Record::new("DS1", "mc14_13TeV_ttbar").with_field("type", "AOD");
        assert_eq!(record.field("ldn"), Some("DS1"));
        assert_eq!(record.field("physics_short"), Some("mc14_13TeV_ttbar"));
        assert_eq!(record.field("type"), Some("AOD"));
        assert_eq!(record.field("events"), None);
    }

    #[test]
    fn extra_fields_flatten_into_json() {
        let record = Record::new("DS1", "ttbar").with_field("type", "AOD");
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["ldn"], "DS1");
        assert_eq!(json["type"], "AOD");

        let round: Record = serde_json::from_value(json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
