//! Property-based tests using proptest
//!
//! These tests verify the query-parameter filtering rules, URL encoding
//! round-trips, and the determinism of request signing using randomized
//! inputs.

use proptest::prelude::*;
use std::collections::BTreeMap;
use stratus_sdk::auth::{Credentials, Signer, SigningRequest};
use stratus_sdk::http::query::{page_limit, QueryValue};
use url::Url;

/// Generate a query parameter map with distinct names
fn arb_params() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9]{0,11}", ".{0,20}", 0..8)
}

fn signing_request<'a>(
    method: &'a str,
    path: &'a str,
    query: &'a BTreeMap<String, String>,
    timestamp: &'a str,
) -> SigningRequest<'a> {
    SigningRequest { method, path, query, timestamp }
}

proptest! {
    /// Empty strings are always filtered out of the query
    #[test]
    fn empty_string_always_filtered(_dummy in any::<bool>()) {
        prop_assert_eq!("".to_query(), None);
    }

    /// Non-empty strings pass through verbatim
    #[test]
    fn non_empty_string_passes_verbatim(value in ".+") {
        prop_assert_eq!(value.as_str().to_query(), Some(value.clone()));
    }

    /// Zero integers are filtered, non-zero pass through as decimal
    #[test]
    fn integer_filter_matches_zero_check(value in any::<u32>()) {
        let expected = if value == 0 { None } else { Some(value.to_string()) };
        prop_assert_eq!(value.to_query(), expected);
    }

    /// Option layers flatten: None and Some(empty) are both filtered
    #[test]
    fn option_flattens(value in proptest::option::of(".{0,20}")) {
        let expected = match value.as_deref() {
            None | Some("") => None,
            Some(v) => Some(v.to_string()),
        };
        prop_assert_eq!(value.to_query(), expected);
    }

    /// An unset page size becomes the fixed default, anything else passes
    #[test]
    fn page_limit_only_rewrites_zero(value in any::<u32>()) {
        if value == 0 {
            prop_assert_eq!(page_limit(value), 1000);
        } else {
            prop_assert_eq!(page_limit(value), value);
        }
    }

    /// Percent-encoding round-trips arbitrary parameter values through a URL
    #[test]
    fn query_pairs_round_trip_through_url(params in arb_params()) {
        let mut url = Url::parse("https://api.example.com/v2/instance").unwrap();
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &params {
                pairs.append_pair(name, value);
            }
        }

        let decoded: BTreeMap<String, String> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        prop_assert_eq!(decoded, params);
    }

    /// Signing the same request twice yields the same header
    #[test]
    fn signing_is_deterministic(params in arb_params(), path in "/[a-z0-9/]{0,20}") {
        let creds = Credentials::new("ak", "sk");
        let request = signing_request("GET", &path, &params, "2024-01-01T00:00:00Z");
        prop_assert_eq!(creds.authorization(&request), creds.authorization(&request));
    }

    /// Different timestamps produce different signatures
    #[test]
    fn signature_depends_on_timestamp(
        params in arb_params(),
        ts_a in "2024-[01][0-9]-[0-2][0-9]T00:00:00Z",
        ts_b in "2025-[01][0-9]-[0-2][0-9]T00:00:00Z",
    ) {
        prop_assume!(ts_a != ts_b);
        let creds = Credentials::new("ak", "sk");
        let a = creds.authorization(&signing_request("GET", "/v2/instance", &params, &ts_a));
        let b = creds.authorization(&signing_request("GET", "/v2/instance", &params, &ts_b));
        prop_assert_ne!(a, b);
    }

    /// The secret key never appears in the authorization header
    #[test]
    fn secret_never_leaks_into_header(params in arb_params(), secret in "[g-z]{8,16}") {
        let creds = Credentials::new("ak", &secret);
        let header = creds.authorization(
            &signing_request("GET", "/v2/instance", &params, "2024-01-01T00:00:00Z"),
        );
        prop_assert!(!header.contains(&secret));
    }
}
