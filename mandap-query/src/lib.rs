//! Vendor search parameters, as carried in URL query strings
//!
//! [`SearchParams`] holds the three search criteria shared by the Mandap
//! front-ends and converts them to and from the query-string form used
//! across the site. [`Navigator`] abstracts the browser location so the
//! logic built on top of it can be driven by a fake in tests.

use std::borrow::Cow;

/// Query-string key of the free-text search term
pub const QUERY_KEY: &str = "query";
/// Query-string key of the city filter
pub const CITY_KEY: &str = "city";
/// Query-string key of the wedding date filter
pub const DATE_KEY: &str = "date";

/// Vendor search criteria
///
/// All fields are plain strings; an empty field is unset. Unset fields are
/// skipped when serializing and reported as empty strings when parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text search term
    pub query: String,
    /// City name, free text
    pub city: String,
    /// Wedding date in the native date-input form, `YYYY-MM-DD`
    pub date: String,
}

impl SearchParams {
    /// Return `true` if no field is set
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.city.is_empty() && self.date.is_empty()
    }

    /// Iterate on `(key, value)` pairs of set fields, in serialization order
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (QUERY_KEY, self.query.as_str()),
            (CITY_KEY, self.city.as_str()),
            (DATE_KEY, self.date.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }

    /// Serialize set fields to a percent-encoded query string, without the `?`
    ///
    /// Keys always appear in the order `query`, `city`, `date`.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.pairs() {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }
}

/// Parse the query-string portion of a URL
///
/// A leading `?` is accepted and ignored, so `Location::search()` output can
/// be passed directly. Unknown keys are skipped; for a repeated key the
/// first occurrence wins, like `URLSearchParams.get()`.
pub fn parse_search_query(search: &str) -> SearchParams {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut query = None;
    let mut city = None;
    let mut date = None;
    for pair in search.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let field = match decode(key).as_ref() {
            QUERY_KEY => &mut query,
            CITY_KEY => &mut city,
            DATE_KEY => &mut date,
            _ => continue,
        };
        if field.is_none() {
            *field = Some(decode(value).into_owned());
        }
    }
    SearchParams {
        query: query.unwrap_or_default(),
        city: city.unwrap_or_default(),
        date: date.unwrap_or_default(),
    }
}

/// Build the URL of a search page from its path and parameters
///
/// The `?` is omitted entirely when no field is set.
/// ```
/// # use mandap_query::{SearchParams, build_search_url};
/// let params = SearchParams { query: "caterers".to_string(), ..Default::default() };
/// assert_eq!(build_search_url("/vendors", &params), "/vendors?query=caterers");
/// assert_eq!(build_search_url("/vendors", &SearchParams::default()), "/vendors");
/// ```
pub fn build_search_url(path: &str, params: &SearchParams) -> String {
    let query = params.to_query_string();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Percent-decode a component, keeping the raw text on malformed input
fn decode(s: &str) -> Cow<'_, str> {
    urlencoding::decode(s).unwrap_or(Cow::Borrowed(s))
}

/// Client-side navigation service
///
/// The web front end backs this with the browser History API; tests use a
/// recording fake. `navigate` replaces the visible URL and triggers a view
/// transition without reloading the page, and is fire-and-forget.
pub trait Navigator {
    /// Path of the current location, e.g. `/vendors`
    fn current_path(&self) -> String;
    /// Raw query string of the current location, leading `?` included
    fn current_query(&self) -> String;
    /// Navigate to `url`, a path with an optional query string
    fn navigate(&self, url: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_serialize_to_nothing() {
        let params = SearchParams::default();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(), "");
        assert_eq!(build_search_url("/vendors", &params), "/vendors");
    }

    #[test]
    fn single_field_keeps_its_own_key() {
        let params = SearchParams { query: "caterers".to_string(), ..Default::default() };
        assert_eq!(params.to_query_string(), "query=caterers");

        let params = SearchParams { city: "Jaipur".to_string(), ..Default::default() };
        assert_eq!(params.to_query_string(), "city=Jaipur");

        let params = SearchParams { date: "2024-05-01".to_string(), ..Default::default() };
        assert_eq!(params.to_query_string(), "date=2024-05-01");
    }

    #[test]
    fn full_params_keep_key_order() {
        let params = SearchParams {
            query: "A".to_string(),
            city: "B".to_string(),
            date: "2024-05-01".to_string(),
        };
        assert_eq!(params.to_query_string(), "query=A&city=B&date=2024-05-01");
        assert_eq!(build_search_url("/vendors", &params), "/vendors?query=A&city=B&date=2024-05-01");
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = SearchParams {
            query: "Photographers Mumbai".to_string(),
            city: "New Delhi".to_string(),
            ..Default::default()
        };
        assert_eq!(params.to_query_string(), "query=Photographers%20Mumbai&city=New%20Delhi");
    }

    #[test]
    fn parse_reads_known_keys() {
        let params = parse_search_query("?query=A&city=B&date=2024-05-01");
        assert_eq!(params.query, "A");
        assert_eq!(params.city, "B");
        assert_eq!(params.date, "2024-05-01");
    }

    #[test]
    fn parse_accepts_missing_prefix_and_skips_unknown_keys() {
        let params = parse_search_query("city=Jaipur&page=2");
        assert_eq!(params, SearchParams { city: "Jaipur".to_string(), ..Default::default() });
    }

    #[test]
    fn parse_decodes_percent_escapes() {
        let params = parse_search_query("?query=Banquet%20Halls%20Delhi");
        assert_eq!(params.query, "Banquet Halls Delhi");
    }

    #[test]
    fn parse_keeps_first_occurrence_of_a_repeated_key() {
        let params = parse_search_query("query=a&query=b");
        assert_eq!(params.query, "a");
    }

    #[test]
    fn parse_keeps_malformed_escapes_as_is() {
        let params = parse_search_query("query=100%");
        assert_eq!(params.query, "100%");
    }

    #[test]
    fn empty_valued_keys_parse_as_unset() {
        let params = parse_search_query("query=&city=Pune");
        assert_eq!(params.query, "");
        assert_eq!(params.city, "Pune");
        assert_eq!(params.to_query_string(), "city=Pune");
    }

    #[test]
    fn round_trip_preserves_fields() {
        let params = parse_search_query("?query=Mehendi%20Artists&city=Udaipur&date=2025-11-20");
        assert_eq!(params.to_query_string(), "query=Mehendi%20Artists&city=Udaipur&date=2025-11-20");
    }
}
