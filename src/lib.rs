//! # dirwire
//!
//! Translation layer between a directory-agnostic query/modification
//! model and the wire-level semantics of the LDAP protocol.
//!
//! Callers describe intent with protocol-neutral value objects — search
//! with this filter and these limits, optionally paged; add, replace or
//! remove this attribute on this entry — and this crate turns them into
//! protocol-correct [`ldap3`] constructs, then turns raw directory
//! entries back into typed, field-addressable result records.
//!
//! The crate is purely transformational: no connections, no binds, no
//! I/O. A transport built on `ldap3` submits what it builds and feeds
//! the server's answers back through it. The paging continuation cookie
//! is caller-owned and passed by value between round trips.
//!
//! ## Example
//!
//! ```ignore
//! use dirwire::{
//!     build_search_request, next_page_cookie, to_entity_responses,
//!     Field, FieldType, QueryRequest,
//! };
//!
//! let fields = vec![
//!     Field::new(FieldType::FirstName, "givenName"),
//!     Field::new(FieldType::Group, "memberOf"),
//! ];
//! let mut query = QueryRequest::new("(objectClass=inetOrgPerson)")
//!     .with_fields(fields.clone())
//!     .with_paging(500);
//!
//! loop {
//!     let request = build_search_request(&query, "dc=example,dc=com", None);
//!     // Transport: submit `request`, collect entries and response controls.
//!     let (entries, controls) = transport.search(request).await?;
//!     let people = to_entity_responses(entries, &fields)?;
//!
//!     match next_page_cookie(&controls) {
//!         Some(cookie) => query.cookie = Some(cookie),
//!         None => break,
//!     }
//! }
//! ```
//!
//! ## Crate organization
//!
//! - [`field`] - attribute definitions and type-driven decode rules
//! - [`modification`] - Add/Replace/Remove intent variants
//! - [`query`] - protocol-neutral search specification
//! - [`response`] - typed, field-addressable result records
//! - [`search`] - the wire-level search request value
//! - [`convert`] - the pure translation functions
//! - [`error`] - error taxonomy

pub mod convert;
pub mod error;
pub mod field;
pub mod modification;
pub mod query;
pub mod response;
pub mod search;

pub use convert::{
    attribute_names, build_modification, build_search_request, next_page_cookie,
    to_entity_responses,
};
pub use error::{QueryError, QueryResult};
pub use field::{Decoding, Field, FieldType, FieldValue};
pub use modification::{ModificationDetails, Operation};
pub use query::{QueryRequest, ReferralsHandling, DEFAULT_PAGE_SIZE};
pub use response::{EntityResponse, ResponseValue};
pub use search::SearchRequest;

// Re-export the protocol crate so transports can match versions.
pub use ldap3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_reexports_are_usable() {
        let _field = Field::new(FieldType::FirstName, "givenName");
        let _query = QueryRequest::new("(objectClass=*)");
        let _policy = ReferralsHandling::Follow;
        let _op = Operation::Replace;
        let names = attribute_names(None);
        assert_eq!(names, vec!["*".to_owned()]);
    }
}
