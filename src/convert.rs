//! Translation between the protocol-neutral model and `ldap3` constructs.
//!
//! Every function here is a pure transformation over immutable inputs:
//! no I/O, no shared state, no retries. The transport submits what these
//! functions build and feeds what the server returns back through them.

use std::collections::HashSet;

use ldap3::controls::{Control, ControlType, PagedResults, RawControl};
use ldap3::{Mod, Scope, SearchEntry};
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::field::{Decoding, Field, FieldValue};
use crate::modification::ModificationDetails;
use crate::query::QueryRequest;
use crate::response::{EntityResponse, ResponseValue};
use crate::search::SearchRequest;

/// Attribute names to request for a field projection.
///
/// An absent projection means "all attributes" and maps to the LDAP
/// wildcard marker. Otherwise names come back in field order, duplicates
/// preserved; deduplication is the caller's business.
pub fn attribute_names(fields: Option<&[Field]>) -> Vec<String> {
    match fields {
        None => vec!["*".to_owned()],
        Some(fields) => fields.iter().map(|field| field.name().to_owned()).collect(),
    }
}

/// Build the wire-level search request for `query` under `base`.
///
/// The filter text is copied verbatim; the transport's filter grammar
/// rejects malformed text at submission time, surfaced as
/// [`QueryError::InvalidFilterSyntax`]. When `query.paged` is set,
/// exactly one paged results control is attached carrying
/// `page_chunk_size`; the `cookie` argument is the continuation token
/// from the previous page and takes precedence over the cookie stored on
/// the query itself, while no cookie at all requests a first page with
/// an empty token.
pub fn build_search_request(
    query: &QueryRequest,
    base: &str,
    cookie: Option<&[u8]>,
) -> SearchRequest {
    let mut controls = Vec::new();
    if query.paged {
        let cookie = cookie
            .map(<[u8]>::to_vec)
            .or_else(|| query.cookie.clone())
            .unwrap_or_default();
        controls.push(RawControl::from(PagedResults {
            size: clamp(query.page_chunk_size),
            cookie,
        }));
    }

    debug!(
        filter = %query.search_text,
        base = %base,
        paged = query.paged,
        "building search request"
    );

    SearchRequest {
        base: base.to_owned(),
        scope: Scope::Subtree,
        filter: query.search_text.clone(),
        attrs: attribute_names(query.requested_fields.as_deref()),
        size_limit: clamp(query.size_limit),
        time_limit: clamp(query.time_limit),
        follow_referrals: query.referrals_handling.follows(),
        controls,
    }
}

fn clamp(limit: u32) -> i32 {
    i32::try_from(limit).unwrap_or(i32::MAX)
}

/// Build the `ldap3` modify operation for `details`.
///
/// A `Remove` carrying no values yields a delete with an empty value
/// set, which the protocol reads as "remove the attribute entirely".
pub fn build_modification(details: &ModificationDetails) -> Mod<String> {
    let name = details.field().name().to_owned();
    match details {
        ModificationDetails::Add { values, .. } => {
            Mod::Add(name, values.iter().cloned().collect())
        }
        ModificationDetails::Replace { value, .. } => {
            Mod::Replace(name, HashSet::from([value.clone()]))
        }
        ModificationDetails::Remove { values, .. } => {
            Mod::Delete(name, values.iter().cloned().collect())
        }
    }
}

/// Convert raw entries into typed responses keyed by `fields`.
///
/// Produces exactly one response per entry, in order. Per field: a
/// single stored value yields a scalar slot, several stored values yield
/// one value-carrying [`Field`] per value in server order, and an absent
/// attribute leaves no slot at all.
///
/// # Errors
///
/// [`QueryError::UnsupportedFieldType`] when a requested field's type
/// has no decode rule, and [`QueryError::DirectoryEntry`] when an
/// entry's stored bytes cannot be decoded; either aborts the whole call.
pub fn to_entity_responses(
    entries: Vec<SearchEntry>,
    fields: &[Field],
) -> QueryResult<Vec<EntityResponse>> {
    debug!(entries = entries.len(), fields = fields.len(), "converting entries");
    entries
        .into_iter()
        .map(|entry| to_entity_response(entry, fields))
        .collect()
}

fn to_entity_response(entry: SearchEntry, fields: &[Field]) -> QueryResult<EntityResponse> {
    let mut response = EntityResponse::new(entry.dn.clone());

    for field in fields {
        let decoding =
            field
                .field_type()
                .decoding()
                .ok_or_else(|| QueryError::UnsupportedFieldType {
                    field_type: field.field_type(),
                    attribute: field.name().to_owned(),
                })?;

        let mut values = decode_attribute(&entry, field.name(), decoding)?;
        if values.is_empty() {
            continue;
        }

        let slot = if values.len() == 1 {
            ResponseValue::Single(values.remove(0))
        } else {
            ResponseValue::Multiple(
                values
                    .into_iter()
                    .map(|value| field.clone().with_value(value))
                    .collect(),
            )
        };
        response.insert(field.field_type(), slot);
    }

    Ok(response)
}

/// Decode the stored values of `attribute` according to the field's
/// decode rule. `ldap3` splits textual and binary storage, so each rule
/// checks its natural side first and falls back to the other.
fn decode_attribute(
    entry: &SearchEntry,
    attribute: &str,
    decoding: Decoding,
) -> QueryResult<Vec<FieldValue>> {
    match decoding {
        Decoding::Text => {
            if let Some(values) = entry.attrs.get(attribute) {
                Ok(values.iter().cloned().map(FieldValue::Text).collect())
            } else if let Some(raw_values) = entry.bin_attrs.get(attribute) {
                // Binary-stored text must still be valid UTF-8.
                raw_values
                    .iter()
                    .map(|bytes| {
                        String::from_utf8(bytes.clone()).map(FieldValue::Text).map_err(|e| {
                            QueryError::directory_entry(
                                &entry.dn,
                                format!("attribute '{attribute}' is not valid UTF-8: {e}"),
                            )
                        })
                    })
                    .collect()
            } else {
                Ok(Vec::new())
            }
        }
        Decoding::Binary => {
            if let Some(raw_values) = entry.bin_attrs.get(attribute) {
                Ok(raw_values.iter().cloned().map(FieldValue::Binary).collect())
            } else if let Some(values) = entry.attrs.get(attribute) {
                Ok(values
                    .iter()
                    .map(|value| FieldValue::Binary(value.clone().into_bytes()))
                    .collect())
            } else {
                Ok(Vec::new())
            }
        }
    }
}

/// Continuation cookie carried in a paged search response, if more pages
/// remain.
///
/// Returns `None` both when no paged results control is present and when
/// the server returned an empty cookie, which signals an exhausted
/// search.
pub fn next_page_cookie(controls: &[Control]) -> Option<Vec<u8>> {
    controls.iter().find_map(|Control(control_type, raw)| match control_type {
        Some(ControlType::PagedResults) => {
            let paged: PagedResults = raw.parse();
            (!paged.cookie.is_empty()).then_some(paged.cookie)
        }
        _ => None,
    })
}
