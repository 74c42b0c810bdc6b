//! Shape check for post links.
//!
//! Accepts an optional `http`/`https` scheme, a host made of DNS labels with an
//! alphabetic TLD (or a dotted-quad IPv4 address), then an optional port, path,
//! query string and fragment. Matching is case-insensitive.

use regex::Regex;
use std::sync::LazyLock;

/// Message returned when a link does not look like a URL.
pub const INVALID_URL_MESSAGE: &str = "URL inválida!";

static URL_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(https?://)?",
        r"((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|",
        r"(([0-9]{1,3}\.){3}[0-9]{1,3}))",
        r"(:[0-9]+)?(/[-a-z0-9%_.~+]*)*",
        r"(\?[;&a-z0-9%_.~+=-]*)?",
        r"(#[-a-z0-9_]*)?$",
    ))
    .expect("URL shape regex is valid")
});

/// Returns true if `link` has the shape of a web URL.
pub fn is_url_shaped(link: &str) -> bool {
    URL_SHAPE_REGEX.is_match(link)
}
