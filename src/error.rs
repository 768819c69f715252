//! Error types for query translation.
//!
//! Every error returns to the immediate caller; this layer performs no
//! retries and no partial recovery. Conversion calls are all-or-nothing
//! for the records they are given.

use thiserror::Error;

use crate::field::FieldType;

/// Result alias for translation operations.
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Error that can occur while translating between the query model and
/// LDAP protocol constructs.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The search filter text was rejected by the LDAP filter grammar.
    ///
    /// Filter text is opaque to this layer; the transport wraps the
    /// grammar's rejection in this kind and surfaces it unchanged.
    #[error("invalid filter syntax: {filter}")]
    InvalidFilterSyntax {
        filter: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A modification was constructed with a value cardinality its
    /// operation kind does not allow.
    #[error("invalid modification shape: {message}")]
    InvalidModificationShape { message: String },

    /// The requested field type has no decode rule.
    #[error("no decode rule for field type {field_type:?} (attribute '{attribute}')")]
    UnsupportedFieldType {
        field_type: FieldType,
        attribute: String,
    },

    /// A raw directory entry could not be read or decoded.
    #[error("directory entry '{dn}' could not be read: {message}")]
    DirectoryEntry { dn: String, message: String },
}

impl QueryError {
    /// Create an `InvalidFilterSyntax` error.
    pub fn invalid_filter_syntax(filter: impl Into<String>) -> Self {
        QueryError::InvalidFilterSyntax {
            filter: filter.into(),
            source: None,
        }
    }

    /// Create an `InvalidFilterSyntax` error wrapping the grammar's own
    /// rejection.
    pub fn invalid_filter_syntax_with_source(
        filter: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        QueryError::InvalidFilterSyntax {
            filter: filter.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an `InvalidModificationShape` error.
    pub fn invalid_modification_shape(message: impl Into<String>) -> Self {
        QueryError::InvalidModificationShape {
            message: message.into(),
        }
    }

    /// Create a `DirectoryEntry` error for the entry at `dn`.
    pub fn directory_entry(dn: impl Into<String>, message: impl Into<String>) -> Self {
        QueryError::DirectoryEntry {
            dn: dn.into(),
            message: message.into(),
        }
    }
}
