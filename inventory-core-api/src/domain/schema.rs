use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::draft::AssetDraft;
use crate::domain::value::FieldValue;
use crate::error::{ApiError, ApiResult};

/// # Documentation
/// - One deployment of the application tracks one kind of record, described
///   entirely by a `RecordSchema` (an ordered field-descriptor list).
/// - Exactly one descriptor is marked `unique`; that field is the natural
///   key used for duplicate detection, distinct from the store-assigned id.
/// - Table columns, form fields, filter rules and CSV headers are all
///   derived from the same descriptor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Attribute key on the record, e.g. `partNumber`.
    pub name: String,
    /// Display label and CSV header, e.g. `Part Number`.
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Natural-key marker; enforced unique across the collection.
    pub unique: bool,
    pub filter: FilterRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Number,
}

/// How a field filter matches a record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterRule {
    /// Case-insensitive equality; used for categorical fields such as status.
    Exact,
    /// Case-insensitive substring containment.
    Contains,
}

impl FieldDescriptor {
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            required: false,
            unique: false,
            filter: FilterRule::Contains,
        }
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(name, label)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark this field as the natural key. Implies `required`.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self.required = true;
        self
    }

    pub fn exact_filter(mut self) -> Self {
        self.filter = FilterRule::Exact;
        self
    }
}

impl RecordSchema {
    /// Build a schema from a descriptor list.
    ///
    /// # Returns
    /// * `Err(ApiError::ValidationError)` - unless exactly one descriptor is
    ///   marked unique and no two descriptors share a name or label
    pub fn new(fields: Vec<FieldDescriptor>) -> ApiResult<Self> {
        let unique_count = fields.iter().filter(|f| f.unique).count();
        if unique_count != 1 {
            return Err(ApiError::ValidationError(format!(
                "schema must declare exactly one unique field, found {unique_count}"
            )));
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ApiError::ValidationError(format!(
                    "duplicate field name: {}",
                    field.name
                )));
            }
            if fields[..i].iter().any(|f| f.label == field.label) {
                return Err(ApiError::ValidationError(format!(
                    "duplicate field label: {}",
                    field.label
                )));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_by_label(&self, label: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Display label for an attribute name; unknown names echo back.
    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.field(name).map(|f| f.label.as_str()).unwrap_or(name)
    }

    pub fn natural_key_field(&self) -> &FieldDescriptor {
        self.fields
            .iter()
            .find(|f| f.unique)
            .expect("schema invariant: exactly one unique field")
    }

    /// CSV header row, in field order.
    pub fn csv_headers(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.label.as_str()).collect()
    }

    /// Validate a raw draft into typed field values.
    ///
    /// Required fields must be non-empty after trimming; number fields must
    /// parse as decimals. Optional fields left blank are absent from the
    /// result. Draft keys with no descriptor are ignored.
    pub fn validate_draft(&self, draft: &AssetDraft) -> ApiResult<BTreeMap<String, FieldValue>> {
        let mut values = BTreeMap::new();
        for field in &self.fields {
            let raw = draft.get(&field.name).unwrap_or("").trim().to_string();
            if raw.is_empty() {
                if field.required {
                    return Err(ApiError::ValidationError(format!(
                        "{} is required",
                        field.label
                    )));
                }
                continue;
            }
            let value = match field.kind {
                FieldKind::Text => FieldValue::Text(raw),
                FieldKind::Number => Decimal::from_str(&raw)
                    .map(FieldValue::Number)
                    .map_err(|_| {
                        ApiError::ValidationError(format!("{} must be a number", field.label))
                    })?,
            };
            values.insert(field.name.clone(), value);
        }
        Ok(values)
    }

    /// IT asset deployment: service-tag keyed hardware records.
    pub fn it_assets() -> Self {
        Self::new(vec![
            FieldDescriptor::text("serviceTag", "Service Tag").unique(),
            FieldDescriptor::text("model", "Model").required(),
            FieldDescriptor::text("category", "Category"),
            FieldDescriptor::text("status", "Status").exact_filter(),
            FieldDescriptor::text("location", "Location"),
            FieldDescriptor::text("notes", "Notes"),
            FieldDescriptor::text("macAddress", "MAC Address"),
            FieldDescriptor::text("decal", "Decal"),
        ])
        .expect("it_assets preset is well formed")
    }

    /// Parts inventory deployment: part-number keyed stock records.
    pub fn parts_inventory() -> Self {
        Self::new(vec![
            FieldDescriptor::text("partNumber", "Part Number").unique(),
            FieldDescriptor::text("category", "Category").required().exact_filter(),
            FieldDescriptor::text("description", "Description").required(),
            FieldDescriptor::number("quantity", "Quantity").required(),
            FieldDescriptor::number("price", "Price").required(),
            FieldDescriptor::number("retail", "Retail").required(),
        ])
        .expect("parts_inventory preset is well formed")
    }
}
