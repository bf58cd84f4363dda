//! Display names and encyclopedia lookup terms.

use crate::consts::{NAME_PREFIX, UNKNOWN_OBJECT};

#[cfg(test)]
#[path = "naming_test.rs"]
mod naming_test;

/// Catalog prefixes dropped when building the fallback lookup term.
const CATALOG_PREFIXES: [&str; 6] = ["HD", "HR", "HIP", "NGC", "M", "IC"];

/// Remove a leading `NAME ` marker from a designation.
#[must_use]
pub fn strip_name_prefix(designation: &str) -> &str {
    designation.strip_prefix(NAME_PREFIX).unwrap_or(designation)
}

/// Pick the name shown for an object.
///
/// Order: first designation, English name, localized name, placeholder.
#[must_use]
pub fn display_name(designations: &[String], english: Option<&str>, i18n: Option<&str>) -> String {
    if let Some(first) = designations.first() {
        return strip_name_prefix(first).to_owned();
    }
    english
        .filter(|n| !n.is_empty())
        .or_else(|| i18n.filter(|n| !n.is_empty()))
        .unwrap_or(UNKNOWN_OBJECT)
        .to_owned()
}

/// Drop a leading catalog prefix and a trailing parenthetical.
///
/// `"NGC 224"` becomes `"224"`, `"Polaris (Alpha UMi)"` becomes `"Polaris"`.
#[must_use]
pub fn cleaned_name(name: &str) -> String {
    let mut rest = name;
    for prefix in CATALOG_PREFIXES {
        if let Some(after) = rest.strip_prefix(prefix) {
            if after.starts_with(char::is_whitespace) {
                rest = after.trim_start();
                break;
            }
        }
    }
    strip_trailing_parenthetical(rest).trim().to_owned()
}

fn strip_trailing_parenthetical(name: &str) -> &str {
    let Some(body) = name.strip_suffix(')') else {
        return name;
    };
    body.match_indices('(')
        .map(|(open, _)| (&body[..open], &body[open + 1..]))
        .find(|(head, inner)| !inner.is_empty() && !inner.contains(')') && head.ends_with(char::is_whitespace))
        .map_or(name, |(head, _)| head.trim_end())
}

/// Terms to try against the encyclopedia, in order.
///
/// Empty for the placeholder name. The cleaned variant is only added when it
/// differs from the name itself.
#[must_use]
pub fn lookup_terms(name: &str) -> Vec<String> {
    let name = name.trim();
    if name.is_empty() || name == UNKNOWN_OBJECT {
        return Vec::new();
    }
    let mut terms = vec![name.to_owned()];
    let cleaned = cleaned_name(name);
    if !cleaned.is_empty() && cleaned != name {
        terms.push(cleaned);
    }
    terms
}
