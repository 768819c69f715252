//! Modify-operation intent model.
//!
//! A [`ModificationDetails`] describes one attribute mutation on one
//! directory entry. The operation kind is fixed at construction, and the
//! variant fixes how many values it may carry: `Replace` holds exactly
//! one value by construction, so the cardinality rule cannot be violated
//! after the fact. Callers assembling modifications dynamically go
//! through [`ModificationDetails::from_parts`], which validates the
//! kind/cardinality contract.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::field::{Field, FieldValue};

/// The protocol modify-operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Replace,
    Remove,
}

/// One attribute mutation on one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum ModificationDetails {
    /// Attach one or more values to the attribute.
    Add {
        dn: String,
        field: Field,
        values: Vec<String>,
    },
    /// Supersede all existing values with a single value.
    Replace {
        dn: String,
        field: Field,
        value: String,
    },
    /// Remove the listed values, or the whole attribute when `values`
    /// is empty.
    Remove {
        dn: String,
        field: Field,
        values: Vec<String>,
    },
}

impl ModificationDetails {
    /// Attach `values` to the attribute described by `field`.
    pub fn add(dn: impl Into<String>, field: Field, values: Vec<String>) -> Self {
        ModificationDetails::Add {
            dn: dn.into(),
            field,
            values,
        }
    }

    /// Replace all existing values of the attribute with `value`.
    pub fn replace(dn: impl Into<String>, field: Field, value: impl Into<String>) -> Self {
        ModificationDetails::Replace {
            dn: dn.into(),
            field,
            value: value.into(),
        }
    }

    /// Remove the value carried by `field`, or the entire attribute when
    /// the field carries no textual value.
    pub fn remove(dn: impl Into<String>, field: Field) -> Self {
        let values = field
            .value()
            .and_then(FieldValue::as_text)
            .map(|value| vec![value.to_owned()])
            .unwrap_or_default();
        ModificationDetails::Remove {
            dn: dn.into(),
            field,
            values,
        }
    }

    /// Remove exactly the listed values from the attribute. An empty
    /// list removes the attribute entirely.
    pub fn remove_values(dn: impl Into<String>, field: Field, values: Vec<String>) -> Self {
        ModificationDetails::Remove {
            dn: dn.into(),
            field,
            values,
        }
    }

    /// Assemble a modification from loose parts, validating that the
    /// value count fits the operation kind.
    ///
    /// # Errors
    ///
    /// [`QueryError::InvalidModificationShape`] when `operation` is
    /// [`Operation::Replace`] and `values` holds anything other than
    /// exactly one value.
    pub fn from_parts(
        operation: Operation,
        dn: impl Into<String>,
        field: Field,
        mut values: Vec<String>,
    ) -> QueryResult<Self> {
        match operation {
            Operation::Add => Ok(Self::add(dn, field, values)),
            Operation::Replace => {
                if values.len() != 1 {
                    return Err(QueryError::invalid_modification_shape(format!(
                        "replace requires exactly one value, got {}",
                        values.len()
                    )));
                }
                let value = values.remove(0);
                Ok(Self::replace(dn, field, value))
            }
            Operation::Remove => Ok(Self::remove_values(dn, field, values)),
        }
    }

    /// The operation kind.
    pub fn operation(&self) -> Operation {
        match self {
            ModificationDetails::Add { .. } => Operation::Add,
            ModificationDetails::Replace { .. } => Operation::Replace,
            ModificationDetails::Remove { .. } => Operation::Remove,
        }
    }

    /// Distinguished name of the target entry.
    pub fn dn(&self) -> &str {
        match self {
            ModificationDetails::Add { dn, .. }
            | ModificationDetails::Replace { dn, .. }
            | ModificationDetails::Remove { dn, .. } => dn,
        }
    }

    /// The attribute being mutated.
    pub fn field(&self) -> &Field {
        match self {
            ModificationDetails::Add { field, .. }
            | ModificationDetails::Replace { field, .. }
            | ModificationDetails::Remove { field, .. } => field,
        }
    }

    /// The carried values: one or more for `Add`, exactly one for
    /// `Replace`, zero or more for `Remove`.
    pub fn values(&self) -> &[String] {
        match self {
            ModificationDetails::Add { values, .. }
            | ModificationDetails::Remove { values, .. } => values,
            ModificationDetails::Replace { value, .. } => std::slice::from_ref(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;

    const DN: &str = "CN=Gabi,CN=Users,OU=ITP";

    #[test]
    fn remove_takes_the_value_from_the_field() {
        let field = Field::new(FieldType::Group, "memberOf").with_value("some group");
        let details = ModificationDetails::remove(DN, field);
        assert_eq!(details.operation(), Operation::Remove);
        assert_eq!(details.dn(), DN);
        assert_eq!(details.values(), ["some group"]);
    }

    #[test]
    fn remove_without_a_value_targets_the_whole_attribute() {
        let field = Field::new(FieldType::Group, "memberOf");
        let details = ModificationDetails::remove(DN, field);
        assert_eq!(details.operation(), Operation::Remove);
        assert!(details.values().is_empty());
    }

    #[test]
    fn replace_holds_exactly_one_value() {
        let field = Field::new(FieldType::City, "l");
        let details = ModificationDetails::replace(DN, field, "Tel Aviv");
        assert_eq!(details.operation(), Operation::Replace);
        assert_eq!(details.values(), ["Tel Aviv"]);
    }

    #[test]
    fn from_parts_accepts_a_single_replace_value() {
        let field = Field::new(FieldType::City, "l");
        let details = ModificationDetails::from_parts(
            Operation::Replace,
            DN,
            field,
            vec!["Tel Aviv".to_owned()],
        )
        .unwrap();
        assert_eq!(details.values(), ["Tel Aviv"]);
    }

    #[test]
    fn from_parts_rejects_replace_with_zero_values() {
        let field = Field::new(FieldType::City, "l");
        let err =
            ModificationDetails::from_parts(Operation::Replace, DN, field, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::QueryError::InvalidModificationShape { .. }
        ));
    }

    #[test]
    fn from_parts_rejects_replace_with_two_values() {
        let field = Field::new(FieldType::City, "l");
        let err = ModificationDetails::from_parts(
            Operation::Replace,
            DN,
            field,
            vec!["a".to_owned(), "b".to_owned()],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::error::QueryError::InvalidModificationShape { .. }
        ));
    }

    #[test]
    fn from_parts_passes_add_and_remove_through() {
        let field = Field::new(FieldType::Group, "memberOf");
        let add = ModificationDetails::from_parts(
            Operation::Add,
            DN,
            field.clone(),
            vec!["g1".to_owned(), "g2".to_owned()],
        )
        .unwrap();
        assert_eq!(add.operation(), Operation::Add);
        assert_eq!(add.values(), ["g1", "g2"]);

        let remove =
            ModificationDetails::from_parts(Operation::Remove, DN, field, Vec::new()).unwrap();
        assert_eq!(remove.operation(), Operation::Remove);
        assert!(remove.values().is_empty());
    }
}
