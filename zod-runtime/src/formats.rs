//! String format predicates used by `z::string()` checks.

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
static URL: OnceLock<Option<Regex>> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(pattern = %pattern, error = %e, "Invalid built-in format pattern");
            None
        }
    })
    .as_ref()
}

/// Email address check.
///
/// The local part may not start with a dot and the address may not contain
/// consecutive dots; the domain needs at least one dot and a 2+ letter TLD.
pub fn is_email(value: &str) -> bool {
    let Some(re) = compiled(
        &EMAIL,
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    ) else {
        return false;
    };
    !value.starts_with('.') && !value.contains("..") && re.is_match(value)
}

/// URL check: a scheme followed by `://` and a non-empty host.
pub fn is_url(value: &str) -> bool {
    compiled(&URL, r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Hyphenated UUID check (`8-4-4-4-12` hex digits, any version).
pub fn is_uuid(value: &str) -> bool {
    // uuid also accepts simple, braced and URN forms; only the hyphenated one is 36 chars long
    value.len() == 36 && uuid::Uuid::try_parse(value).is_ok()
}

/// RFC 3339 date-time check.
pub fn is_datetime(value: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(value).is_ok()
}
