//! Matching normalizer — converts a building address to its canonical identifier
//!
//! Two registrations describing the same building (typed with different
//! casing, spacing or punctuation) converge on the same identifier, which the
//! persistence layer stores and later groups by exact string equality.
//!
//! # Pipeline
//!
//! `address + postcode → lowercase → strip . , - ' → strip whitespace → strip [^a-z0-9]`
//!
//! # Guarantees
//!
//! - **Total**: every pair of strings is accepted, nothing panics
//! - **Deterministic**: same input always produces same output
//! - **Idempotent**: `normalize_for_matching(&id, "") == id` for any output `id`
//! - **Closed**: output only ever contains `[a-z0-9]`, or is empty
//!
//! No semantic normalization happens here. "St" and "Street", or "Mansion"
//! and "Mansions", produce different identifiers; reconciling those is left
//! to human review. Non-ASCII letters are dropped rather than transliterated,
//! so "Café" becomes "caf".

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Punctuation that commonly appears inside building names.
static NAMED_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,'\-]+").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Anything left over that is not a lowercase ASCII letter or digit.
static NON_ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

// ── Public API ─────────────────────────────────────────────

/// Normalize a building's address and postcode into its matching identifier
///
/// The address and postcode are joined with no separator *before* any
/// canonicalization, then each pass runs on the previous pass's output:
///
/// 1. Concatenate `address` and `postcode`
/// 2. Lowercase
/// 3. Remove `.` `,` `-` `'`
/// 4. Remove all whitespace
/// 5. Remove every remaining character outside `[a-z0-9]`
///
/// Degenerate input (empty, whitespace-only, punctuation-only) yields the
/// empty string. Callers that must not persist an empty key should gate on
/// [`crate::validator::is_valid_building_identifier`].
///
/// # Example
/// ```
/// use buildingid_core::normalizer::normalize_for_matching;
///
/// assert_eq!(
///     normalize_for_matching("St. Mary's Court, Block-A", "E1 4AA"),
///     "stmaryscourtblockae14aa"
/// );
/// ```
#[must_use]
pub fn normalize_for_matching(address: &str, postcode: &str) -> String {
    let combined = combine(address, postcode);
    let lowered = lowercase(&combined);
    let unpunctuated = strip_named_punctuation(&lowered);
    let compact = strip_whitespace(&unpunctuated);
    strip_non_alphanumeric(&compact).into_owned()
}

// ── Passes ─────────────────────────────────────────────────

fn combine(address: &str, postcode: &str) -> String {
    let mut combined = String::with_capacity(address.len() + postcode.len());
    combined.push_str(address);
    combined.push_str(postcode);
    combined
}

fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

fn strip_named_punctuation(input: &str) -> Cow<'_, str> {
    NAMED_PUNCTUATION_RE.replace_all(input, "")
}

fn strip_whitespace(input: &str) -> Cow<'_, str> {
    WHITESPACE_RE.replace_all(input, "")
}

fn strip_non_alphanumeric(input: &str) -> Cow<'_, str> {
    NON_ALPHANUMERIC_RE.replace_all(input, "")
}
