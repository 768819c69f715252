//! Wire-level search request handed to the transport.

use ldap3::controls::{PagedResults, RawControl};
use ldap3::{Scope, SearchOptions};

/// OID of the simple paged results control (RFC 2696).
pub(crate) const PAGED_RESULTS_OID: &str = "1.2.840.113556.1.4.319";

/// A fully populated LDAP search request.
///
/// Built by [`crate::convert::build_search_request`] and consumed by the
/// transport: `base`, `scope`, `filter` and `attrs` map directly onto
/// `ldap3::Ldap::search`, the limits onto [`SearchOptions`], and
/// `controls` onto `with_controls`. Construction has no side effects;
/// submitting the request is entirely the transport's business.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Base DN the search starts from.
    pub base: String,
    /// Search scope; always subtree for this layer.
    pub scope: Scope,
    /// Verbatim filter text.
    pub filter: String,
    /// Requested attribute names, `["*"]` for all attributes.
    pub attrs: Vec<String>,
    /// Maximum number of entries; zero means server default.
    pub size_limit: i32,
    /// Maximum server-side search time in seconds; zero means server
    /// default.
    pub time_limit: i32,
    /// Chase referrals transparently instead of surfacing them.
    pub follow_referrals: bool,
    /// Request controls; holds at most one paged results control.
    pub controls: Vec<RawControl>,
}

impl SearchRequest {
    /// Search options carrying the size and time limits, ready for
    /// `ldap3::Ldap::with_search_options`.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::new()
            .sizelimit(self.size_limit)
            .timelimit(self.time_limit)
    }

    /// The paged results control attached to this request, if any.
    pub fn paged_results(&self) -> Option<PagedResults> {
        self.controls
            .iter()
            .find(|control| control.ctype == PAGED_RESULTS_OID)
            .map(|control| control.parse::<PagedResults>())
    }
}
