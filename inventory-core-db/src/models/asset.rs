use std::collections::BTreeMap;

use inventory_core_api::{ApiResult, AssetDraft, FieldValue, RecordSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// # Documentation
/// - One document in the "assets" collection.
/// - `id` is assigned on creation and immutable thereafter.
/// - `natural_key` is the trimmed value of the schema's unique field,
///   denormalized at construction; it backs duplicate detection and the
///   store-level uniqueness constraint.
/// - `fields` holds the schema-described attributes; optional attributes
///   left blank are absent rather than empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: Uuid,
    pub natural_key: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl AssetRecord {
    /// Validate a draft against the schema and build a new record with a
    /// fresh identifier.
    pub fn from_draft(schema: &RecordSchema, draft: &AssetDraft) -> ApiResult<Self> {
        let fields = schema.validate_draft(draft)?;
        Ok(Self::from_fields(schema, Uuid::new_v4(), fields))
    }

    /// Build a record from already-validated field values, keeping `id`.
    pub fn from_fields(
        schema: &RecordSchema,
        id: Uuid,
        fields: BTreeMap<String, FieldValue>,
    ) -> Self {
        let key_name = &schema.natural_key_field().name;
        let natural_key = fields
            .get(key_name)
            .map(|value| value.string_form().trim().to_string())
            .unwrap_or_default();
        Self {
            id,
            natural_key,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// String form of an attribute; missing attributes read as empty.
    pub fn field_str(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(FieldValue::string_form)
            .unwrap_or_default()
    }
}

impl Identifiable for AssetRecord {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
