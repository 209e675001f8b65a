use crate::patterns::{ALPHABETIC_PATTERN, INTEGER_PATTERN};
use num_bigint::BigInt;
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output category a token (or one of its characters) lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    EvenNumber,
    OddNumber,
    Alphabetic,
    Special,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::EvenNumber => "even number",
            Category::OddNumber => "odd number",
            Category::Alphabetic => "alphabetic",
            Category::Special => "special",
        };
        write!(f, "{name}")
    }
}

/// How a single string token is routed through the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Integer token with its exact value
    Numeric(BigInt),
    Alphabetic,
    /// Neither numeric nor alphabetic; decomposed per character
    Fallback,
}

impl TokenKind {
    /// Whole-token category, if the token is kept as a unit
    pub fn category(&self) -> Option<Category> {
        match self {
            TokenKind::Numeric(value) if value.is_even() => Some(Category::EvenNumber),
            TokenKind::Numeric(_) => Some(Category::OddNumber),
            TokenKind::Alphabetic => Some(Category::Alphabetic),
            TokenKind::Fallback => None,
        }
    }
}

/// Decide how a string token is classified
pub fn categorize(token: &str) -> TokenKind {
    if INTEGER_PATTERN.is_match(token) {
        if let Ok(value) = token.parse::<BigInt>() {
            return TokenKind::Numeric(value);
        }
    }

    if ALPHABETIC_PATTERN.is_match(token) {
        return TokenKind::Alphabetic;
    }

    TokenKind::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_parity() {
        assert_eq!(categorize("0").category(), Some(Category::EvenNumber));
        assert_eq!(categorize("3").category(), Some(Category::OddNumber));
        assert_eq!(categorize("-2").category(), Some(Category::EvenNumber));
        assert_eq!(categorize("-99").category(), Some(Category::OddNumber));
    }

    #[test]
    fn test_large_numbers_keep_exact_value() {
        let big = "900719925474099999999999999999999999999999999999999999";
        match categorize(big) {
            TokenKind::Numeric(value) => assert_eq!(value.to_string(), big),
            other => panic!("expected numeric, got {other:?}"),
        }
        assert_eq!(categorize(big).category(), Some(Category::OddNumber));
    }

    #[test]
    fn test_non_numeric_routes() {
        assert_eq!(categorize("ABcD"), TokenKind::Alphabetic);
        assert_eq!(categorize(" 12 "), TokenKind::Fallback);
        assert_eq!(categorize("1.5"), TokenKind::Fallback);
        assert_eq!(categorize("abc123"), TokenKind::Fallback);
        assert_eq!(categorize(""), TokenKind::Fallback);
        assert_eq!(categorize("").category(), None);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::EvenNumber).unwrap();
        assert_eq!(json, "\"even_number\"");
        assert_eq!(Category::Special.to_string(), "special");
    }
}
