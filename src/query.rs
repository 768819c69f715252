//! Protocol-neutral search specification.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Page size requested per round trip when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Policy for handling referral responses during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferralsHandling {
    /// Chase referrals transparently.
    Follow,
    /// Surface referral responses to the caller without chasing them.
    #[default]
    Ignore,
    /// Fail the operation on a referral instead of returning partial
    /// results. Enforced by the transport; at this layer it only turns
    /// off chasing, same as `Ignore`.
    Throw,
}

impl ReferralsHandling {
    /// Whether the built search request should chase referrals.
    pub fn follows(self) -> bool {
        matches!(self, ReferralsHandling::Follow)
    }
}

/// A directory search specification.
///
/// Constructed once per logical search. Across paging round trips only
/// [`cookie`](QueryRequest::cookie) changes: fetch a page, read the
/// continuation cookie from the response, store it here and search again
/// until the server hands back an empty cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// LDAP filter text, passed through verbatim. Parsed by the
    /// transport's filter grammar, never by this layer.
    pub search_text: String,

    /// Maximum number of entries to return; zero means server default.
    pub size_limit: u32,

    /// Maximum server-side search time in seconds; zero means server
    /// default.
    pub time_limit: u32,

    /// Attributes to return, in order. `None` requests all attributes.
    pub requested_fields: Option<Vec<Field>>,

    /// Referral-handling policy.
    pub referrals_handling: ReferralsHandling,

    /// Request paged delivery of results.
    pub paged: bool,

    /// Entries per page; meaningful only when `paged` is set.
    pub page_chunk_size: u32,

    /// Continuation cookie from the previous page. Absent on the first
    /// page; an empty cookie means the search is exhausted.
    pub cookie: Option<Vec<u8>>,
}

impl QueryRequest {
    /// Create a search for the given filter text with server-default
    /// limits, all attributes, and no paging.
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            size_limit: 0,
            time_limit: 0,
            requested_fields: None,
            referrals_handling: ReferralsHandling::default(),
            paged: false,
            page_chunk_size: DEFAULT_PAGE_SIZE,
            cookie: None,
        }
    }

    /// Set the entry count limit.
    pub fn with_size_limit(mut self, limit: u32) -> Self {
        self.size_limit = limit;
        self
    }

    /// Set the server-side time limit in seconds.
    pub fn with_time_limit(mut self, limit: u32) -> Self {
        self.time_limit = limit;
        self
    }

    /// Restrict the returned attributes to the given fields.
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.requested_fields = Some(fields);
        self
    }

    /// Set the referral-handling policy.
    pub fn with_referrals_handling(mut self, handling: ReferralsHandling) -> Self {
        self.referrals_handling = handling;
        self
    }

    /// Request paged delivery with the given page size.
    pub fn with_paging(mut self, page_chunk_size: u32) -> Self {
        self.paged = true;
        self.page_chunk_size = page_chunk_size;
        self
    }

    /// Store the continuation cookie for the next round trip.
    pub fn with_cookie(mut self, cookie: Vec<u8>) -> Self {
        self.cookie = Some(cookie);
        self
    }

    /// Whether a prior page reported that no further pages remain (the
    /// server returned an empty continuation cookie).
    pub fn is_exhausted(&self) -> bool {
        matches!(&self.cookie, Some(cookie) if cookie.is_empty())
    }
}
