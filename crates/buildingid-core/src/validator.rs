//! Identifier validator — checks that a string is a usable canonical identifier
//!
//! Identifiers arrive from storage, user input, or other systems. Before one is
//! trusted as a matching key it must be non-empty and consist only of
//! lowercase ASCII letters and digits.
//!
//! The empty string is rejected even though the normalizer returns it for
//! degenerate input: validation answers "can this be used as a key", not
//! "could the normalizer have produced this".
//!
//! [`is_valid_building_identifier`] is the fast predicate. [`check_identifier`]
//! accumulates a diagnostic for every offending character so callers can
//! report what is wrong.

use serde::Serialize;

// ── Validation Result Types ───────────────────────────────

/// Result of identifier validation — accumulates all diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no diagnostics were recorded
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The first diagnostic's message, used as a one-line rejection reason
    pub fn reason(&self) -> Option<&str> {
        self.diagnostics.first().map(|d| d.message.as_str())
    }

    fn add(&mut self, kind: DiagnosticKind, character: Option<char>, position: Option<usize>) {
        let message = match (character, position) {
            (Some(c), Some(pos)) => format!("{} {:?} at position {}", kind.describe(), c, pos),
            _ => kind.describe().to_string(),
        };
        self.diagnostics.push(Diagnostic {
            kind,
            character,
            position,
            message,
        });
    }
}

/// A single validation diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Offending character, absent for [`DiagnosticKind::Empty`]
    pub character: Option<char>,
    /// Character (not byte) offset of the offending character
    pub position: Option<usize>,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "error [{}]: {}", self.kind, self.message)
    }
}

/// Category of validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    Empty,
    Uppercase,
    Whitespace,
    Punctuation,
    Symbol,
    NonAscii,
}

impl DiagnosticKind {
    fn describe(self) -> &'static str {
        match self {
            DiagnosticKind::Empty => "identifier is empty",
            DiagnosticKind::Uppercase => "uppercase letter",
            DiagnosticKind::Whitespace => "whitespace",
            DiagnosticKind::Punctuation => "punctuation",
            DiagnosticKind::Symbol => "symbol",
            DiagnosticKind::NonAscii => "non-ASCII character",
        }
    }

    fn classify(c: char) -> Option<Self> {
        match c {
            'a'..='z' | '0'..='9' => None,
            'A'..='Z' => Some(DiagnosticKind::Uppercase),
            c if c.is_whitespace() => Some(DiagnosticKind::Whitespace),
            '.' | ',' | '-' | '\'' => Some(DiagnosticKind::Punctuation),
            c if c.is_ascii() => Some(DiagnosticKind::Symbol),
            _ => Some(DiagnosticKind::NonAscii),
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DiagnosticKind::Empty => write!(f, "empty"),
            DiagnosticKind::Uppercase => write!(f, "uppercase"),
            DiagnosticKind::Whitespace => write!(f, "whitespace"),
            DiagnosticKind::Punctuation => write!(f, "punctuation"),
            DiagnosticKind::Symbol => write!(f, "symbol"),
            DiagnosticKind::NonAscii => write!(f, "non_ascii"),
        }
    }
}

// ── Public API ────────────────────────────────────────────

/// Returns true iff `identifier` is non-empty and every character is in `[a-z0-9]`.
#[must_use]
pub fn is_valid_building_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Check an identifier and report every reason it is not canonical.
///
/// Agrees with [`is_valid_building_identifier`] on every input.
pub fn check_identifier(identifier: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if identifier.is_empty() {
        result.add(DiagnosticKind::Empty, None, None);
        return result;
    }

    for (pos, c) in identifier.chars().enumerate() {
        if let Some(kind) = DiagnosticKind::classify(c) {
            result.add(kind, Some(c), Some(pos));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_normalized_identifier() {
        assert!(is_valid_building_identifier("wymeringmansionsnw66he"));
    }

    #[test]
    fn test_accepts_letters_only_digits_only_and_mixed() {
        assert!(is_valid_building_identifier("abc"));
        assert!(is_valid_building_identifier("123"));
        assert!(is_valid_building_identifier("a1b2c3"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(!is_valid_building_identifier(""));
    }

    #[test]
    fn test_rejects_uppercase() {
        assert!(!is_valid_building_identifier("St.James"));
        assert!(!is_valid_building_identifier("stJames"));
        assert!(!is_valid_building_identifier("ABC"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_building_identifier("st james"));
        assert!(!is_valid_building_identifier(" stjames"));
        assert!(!is_valid_building_identifier("stjames\t"));
    }

    #[test]
    fn test_rejects_punctuation() {
        assert!(!is_valid_building_identifier("st.james"));
        assert!(!is_valid_building_identifier("block-a"));
        assert!(!is_valid_building_identifier("marys'"));
        assert!(!is_valid_building_identifier("a,b"));
    }

    #[test]
    fn test_rejects_symbols() {
        assert!(!is_valid_building_identifier("flat@1"));
        assert!(!is_valid_building_identifier("no#5"));
        assert!(!is_valid_building_identifier("a&b"));
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(!is_valid_building_identifier("café"));
        assert!(!is_valid_building_identifier("１２３"));
    }

    #[test]
    fn test_check_empty() {
        let result = check_identifier("");
        assert!(!result.is_valid());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::Empty);
        assert_eq!(result.reason(), Some("identifier is empty"));
    }

    #[test]
    fn test_check_reports_every_problem() {
        let result = check_identifier("St.James 1");
        let kinds: Vec<DiagnosticKind> = result.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::Uppercase,
                DiagnosticKind::Punctuation,
                DiagnosticKind::Uppercase,
                DiagnosticKind::Whitespace,
            ]
        );
        assert_eq!(result.diagnostics[1].character, Some('.'));
        assert_eq!(result.diagnostics[1].position, Some(2));
    }

    #[test]
    fn test_check_positions_count_characters() {
        let result = check_identifier("café&");
        assert_eq!(result.diagnostics.len(), 2);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::NonAscii);
        assert_eq!(result.diagnostics[0].position, Some(3));
        assert_eq!(result.diagnostics[1].kind, DiagnosticKind::Symbol);
        assert_eq!(result.diagnostics[1].position, Some(4));
    }

    #[test]
    fn test_check_valid_has_no_diagnostics() {
        let result = check_identifier("wymeringmansionsnw66he");
        assert!(result.is_valid());
        assert_eq!(result.reason(), None);
    }

    #[test]
    fn test_diagnostic_display() {
        let result = check_identifier("a@b");
        assert_eq!(
            result.diagnostics[0].to_string(),
            "error [symbol]: symbol '@' at position 1"
        );
    }

    #[test]
    fn test_check_agrees_with_predicate() {
        let samples = [
            "", "abc", "123", "a1", "St.James", "st james", "block-a", "a&b", "café", "\u{0}",
            "wymeringmansionsnw66he",
        ];
        for s in samples {
            assert_eq!(
                check_identifier(s).is_valid(),
                is_valid_building_identifier(s),
                "disagreement on {:?}",
                s
            );
        }
    }
}
