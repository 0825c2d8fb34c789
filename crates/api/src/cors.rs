//! CORS layer construction.
//!
//! The allow-list combines exact origins with `https://*.<suffix>` wildcard
//! entries for the hosting provider's preview-deployment subdomains
//! (e.g. `https://*.vercel.app` matches `https://my-branch.vercel.app`).

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Uri};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServerConfig;

/// Build the CORS middleware layer from server configuration.
///
/// Panics if any configured origin is malformed, so a bad allow-list
/// aborts startup before the listener binds.
///
/// The API is read-only, so only safe methods are allowed.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    for entry in &config.cors_origins {
        validate_origin(entry);
    }
    let allowed = config.cors_origins.clone();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _request_parts| {
                origin
                    .to_str()
                    .is_ok_and(|origin| origin_allowed(&allowed, origin))
            },
        ))
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

/// Validate one configured allow-list entry, panicking on anything a
/// browser could never send as an `Origin` header.
///
/// Exact entries must parse as `http(s)://host[:port]`; wildcard entries
/// must carry a non-empty domain suffix after `https://*.`.
fn validate_origin(entry: &str) {
    if let Some(suffix) = entry.strip_prefix("https://*.") {
        if suffix.is_empty() {
            panic!("Invalid CORS origin '{entry}': wildcard entry has no domain suffix");
        }
        return;
    }

    let uri: Uri = entry
        .parse()
        .unwrap_or_else(|e| panic!("Invalid CORS origin '{entry}': {e}"));

    let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
    if !scheme_ok || uri.authority().is_none() || (uri.path() != "/" && !uri.path().is_empty()) {
        panic!("Invalid CORS origin '{entry}': expected http(s)://host[:port]");
    }
}

/// Check an `Origin` header value against the configured allow-list.
fn origin_allowed(allowed: &[String], origin: &str) -> bool {
    allowed.iter().any(|entry| {
        if let Some(suffix) = entry.strip_prefix("https://*.") {
            // Wildcard entry: the origin must be an https subdomain of the
            // suffix, never the bare suffix or a lookalike domain.
            origin
                .strip_prefix("https://")
                .and_then(|host| host.strip_suffix(suffix))
                .is_some_and(|subdomain| subdomain.len() > 1 && subdomain.ends_with('.'))
        } else {
            entry == origin
        }
    })
}
