//! Typed search result records.

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldType, FieldValue};

/// Value slot of one requested field within an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// The attribute held a single stored value.
    Single(FieldValue),
    /// The attribute held several stored values. Each element repeats
    /// the original field definition with one distinct value, preserving
    /// server order.
    Multiple(Vec<Field>),
}

impl ResponseValue {
    /// The scalar value, if the attribute was single-valued.
    pub fn as_single(&self) -> Option<&FieldValue> {
        match self {
            ResponseValue::Single(value) => Some(value),
            ResponseValue::Multiple(_) => None,
        }
    }

    /// The value-carrying fields, if the attribute was multi-valued.
    pub fn as_multiple(&self) -> Option<&[Field]> {
        match self {
            ResponseValue::Multiple(fields) => Some(fields),
            ResponseValue::Single(_) => None,
        }
    }
}

/// One converted directory entry, keyed by the semantic type of each
/// requested field.
///
/// Slots appear in requested-field order. Fields absent on the entry are
/// omitted entirely rather than stored as a null placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityResponse {
    dn: String,
    slots: Vec<(FieldType, ResponseValue)>,
}

impl EntityResponse {
    /// Create an empty response for the entry at `dn`.
    pub fn new(dn: impl Into<String>) -> Self {
        Self {
            dn: dn.into(),
            slots: Vec::new(),
        }
    }

    /// Distinguished name of the source entry.
    pub fn dn(&self) -> &str {
        &self.dn
    }

    /// Append a slot. Slot order is insertion order.
    pub fn insert(&mut self, field_type: FieldType, value: ResponseValue) {
        self.slots.push((field_type, value));
    }

    /// The slot for `field_type`, if the attribute was present.
    pub fn get(&self, field_type: FieldType) -> Option<&ResponseValue> {
        self.slots
            .iter()
            .find(|(slot_type, _)| *slot_type == field_type)
            .map(|(_, value)| value)
    }

    /// Convenience accessor for a single-valued textual slot.
    pub fn get_text(&self, field_type: FieldType) -> Option<&str> {
        self.get(field_type)
            .and_then(ResponseValue::as_single)
            .and_then(FieldValue::as_text)
    }

    /// Iterate over the slots in order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldType, &ResponseValue)> {
        self.slots.iter().map(|(t, v)| (*t, v))
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no requested field was present on the entry.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
