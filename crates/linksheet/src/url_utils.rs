// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! URL normalization and validity checking.
//!
//! Validity is advisory: the sheet commits the edit either way and only
//! announces a warning for a questionable URL.

use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Inputs that already carry a scheme, or are fragment/query/relative
/// references, and must not get a protocol prefixed.
static SCHEME_OR_RELATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z][a-z\d+.-]*:|#|\?|\.|/)")
        .expect("scheme pattern is valid")
});

/// Captures the scheme of an absolute reference.
static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-z][a-z\d+.-]*):").expect("scheme pattern is valid")
});

/// Prefix `http://` unless the input already has a scheme or is a
/// fragment, query, or relative reference. The input is trimmed.
pub fn prepend_http(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || SCHEME_OR_RELATIVE.is_match(trimmed) {
        trimmed.to_owned()
    } else {
        format!("http://{trimmed}")
    }
}

/// Basic validity check for a href about to be stored in a link format.
///
/// - empty or whitespace-containing strings are invalid;
/// - `mailto:` must carry a well-formed address;
/// - `http:`/`https:` must parse and have a host;
/// - other schemes must parse as URLs;
/// - fragment, query, and relative references are accepted as-is.
pub fn is_valid_href(href: &str) -> bool {
    let trimmed = href.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return false;
    }

    let Some(captures) = SCHEME.captures(trimmed) else {
        // fragment, query, or relative reference
        return true;
    };
    let scheme = captures[1].to_lowercase();
    let rest = &trimmed[captures[0].len()..];

    match scheme.as_str() {
        "mailto" => {
            let address = rest.split('?').next().unwrap_or_default();
            address.parse::<EmailAddress>().is_ok()
        }
        "http" | "https" => Url::parse(trimmed)
            .map(|url| url.host().is_some())
            .unwrap_or(false),
        _ => Url::parse(trimmed).is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{is_valid_href, prepend_http};

    // ===================================================================
    // prepend_http
    // ===================================================================

    #[test]
    fn bare_domain_gets_http_prefixed() {
        assert_eq!(prepend_http("example.com"), "http://example.com");
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(prepend_http("https://example.com"), "https://example.com");
        assert_eq!(prepend_http("mailto:a@example.com"), "mailto:a@example.com");
        assert_eq!(prepend_http("tel:+441234567890"), "tel:+441234567890");
    }

    #[test]
    fn uppercase_scheme_is_kept() {
        assert_eq!(prepend_http("HTTP://example.com"), "HTTP://example.com");
    }

    #[test]
    fn fragment_query_and_relative_references_are_kept() {
        assert_eq!(prepend_http("#section"), "#section");
        assert_eq!(prepend_http("?page=2"), "?page=2");
        assert_eq!(prepend_http("/about"), "/about");
        assert_eq!(prepend_http("./about"), "./about");
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(prepend_http("  example.com  "), "http://example.com");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(prepend_http(""), "");
        assert_eq!(prepend_http("   "), "");
    }

    // ===================================================================
    // is_valid_href
    // ===================================================================

    #[test]
    fn http_url_with_host_is_valid() {
        assert!(is_valid_href("http://example.com"));
        assert!(is_valid_href("https://example.com/path?q=1#frag"));
    }

    #[test]
    fn http_url_without_host_is_invalid() {
        assert!(!is_valid_href("http://"));
        assert!(!is_valid_href("https://"));
    }

    #[test]
    fn empty_href_is_invalid() {
        assert!(!is_valid_href(""));
        assert!(!is_valid_href("   "));
    }

    #[test]
    fn href_with_spaces_is_invalid() {
        assert!(!is_valid_href("http://example.com/a b"));
    }

    #[test]
    fn mailto_with_valid_address_is_valid() {
        assert!(is_valid_href("mailto:someone@example.com"));
    }

    #[test]
    fn mailto_with_query_validates_only_the_address() {
        assert!(is_valid_href("mailto:someone@example.com?subject=hi"));
    }

    #[test]
    fn mailto_with_invalid_address_is_invalid() {
        assert!(!is_valid_href("mailto:not-an-address"));
        assert!(!is_valid_href("mailto:"));
    }

    #[test]
    fn other_schemes_must_parse() {
        assert!(is_valid_href("tel:+441234567890"));
        assert!(is_valid_href("ftp://example.com"));
    }

    #[test]
    fn fragment_and_relative_references_are_valid() {
        assert!(is_valid_href("#top"));
        assert!(is_valid_href("?page=2"));
        assert!(is_valid_href("/about"));
    }
}
