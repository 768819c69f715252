//! Attribute field definitions.
//!
//! A [`Field`] names a directory attribute and assigns it a semantic type.
//! The same small definition serves three roles: a projection item in a
//! search, the target of a modification, and a typed slot in a converted
//! search result. For a plain read only the name matters; the carried
//! value is populated when the field travels inside a modification or a
//! result record.

use serde::{Deserialize, Serialize};

/// Semantic type of a directory attribute.
///
/// The type drives value decoding during result conversion: most types
/// decode as text, while a few well-known binary attributes (objectGUID,
/// objectSid, photos) pass through as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FieldType {
    DistinguishedName,
    LogonName,
    FirstName,
    LastName,
    DisplayName,
    Email,
    PhoneNumber,
    Title,
    Department,
    Company,
    Country,
    City,
    StreetAddress,
    Group,
    CreationTime,
    ModificationTime,
    UserAccountControl,
    ObjectGuid,
    ObjectSid,
    Photo,
    /// An attribute this layer has no decode rule for. Usable for
    /// projection and modification, but rejected during result
    /// conversion.
    Unknown,
}

/// How raw attribute bytes become a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
    /// Decode as UTF-8 text.
    Text,
    /// Keep the raw bytes.
    Binary,
}

impl FieldType {
    /// The decode rule for this type, if one exists.
    pub fn decoding(self) -> Option<Decoding> {
        match self {
            FieldType::ObjectGuid | FieldType::ObjectSid | FieldType::Photo => {
                Some(Decoding::Binary)
            }
            FieldType::Unknown => None,
            _ => Some(Decoding::Text),
        }
    }
}

/// A single decoded attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A textual value.
    Text(String),
    /// A raw binary value.
    Binary(Vec<u8>),
}

impl FieldValue {
    /// Get the value as text, if textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Binary(_) => None,
        }
    }

    /// Get the value as raw bytes, if binary.
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Binary(b) => Some(b),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        FieldValue::Binary(bytes)
    }
}

/// A directory attribute to read or write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    value: Option<FieldValue>,
}

impl Field {
    /// Create a field with a semantic type and an attribute name.
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            value: None,
        }
    }

    /// Create a projection-only field from an attribute name. The
    /// semantic type defaults to [`FieldType::Unknown`]; set a real type
    /// before using the field in result conversion.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(FieldType::Unknown, name)
    }

    /// Attach a carried value.
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The directory attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The semantic type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The carried value, if any.
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Replace the attribute name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the semantic type.
    pub fn set_type(&mut self, field_type: FieldType) {
        self.field_type = field_type;
    }

    /// Replace the carried value.
    pub fn set_value(&mut self, value: impl Into<FieldValue>) {
        self.value = Some(value.into());
    }
}
