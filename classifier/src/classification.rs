use crate::category::{categorize, Category, TokenKind};
use crate::patterns::is_special_char;
use crate::token::Token;
use crate::transform::alternating_reverse;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome of classifying one token sequence.
///
/// Every sequence keeps the order in which its entries were encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub even_numbers: Vec<String>,
    pub odd_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    /// Exact sum of every numeric token, rendered as a decimal string
    #[serde(serialize_with = "sum_as_string", deserialize_with = "sum_from_string")]
    pub sum: BigInt,
    pub concat_string: String,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            even_numbers: Vec::new(),
            odd_numbers: Vec::new(),
            alphabets: Vec::new(),
            special_characters: Vec::new(),
            sum: BigInt::zero(),
            concat_string: String::new(),
        }
    }
}

impl Classification {
    /// Entries of a given category
    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::EvenNumber => self.even_numbers.as_slice(),
            Category::OddNumber => self.odd_numbers.as_slice(),
            Category::Alphabetic => self.alphabets.as_slice(),
            Category::Special => self.special_characters.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.even_numbers.is_empty()
            && self.odd_numbers.is_empty()
            && self.alphabets.is_empty()
            && self.special_characters.is_empty()
    }
}

fn sum_as_string<S: Serializer>(sum: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&sum.to_string())
}

fn sum_from_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse::<BigInt>().map_err(serde::de::Error::custom)
}

/// Single-pass accumulator behind [`crate::classify`]
#[derive(Debug, Default)]
pub struct Accumulator {
    result: Classification,
    letters: String,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: &Token) {
        let Some(text) = token.as_text() else {
            return;
        };

        match categorize(text) {
            TokenKind::Numeric(value) => {
                let target = if value.is_even() {
                    &mut self.result.even_numbers
                } else {
                    &mut self.result.odd_numbers
                };
                target.push(text.to_string());
                self.result.sum += value;
            }
            TokenKind::Alphabetic => {
                self.result.alphabets.push(text.to_ascii_uppercase());
                self.letters.push_str(text);
            }
            TokenKind::Fallback => {
                self.result.special_characters.extend(
                    text.chars()
                        .filter(|c| is_special_char(*c))
                        .map(String::from),
                );
            }
        }
    }

    pub fn finish(mut self) -> Classification {
        self.result.concat_string = alternating_reverse(&self.letters);
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let result = Classification::default();
        assert!(result.is_empty());
        assert_eq!(result.sum.to_string(), "0");
        assert_eq!(result.concat_string, "");
    }

    #[test]
    fn test_sum_serializes_as_string() {
        let mut acc = Accumulator::new();
        acc.push(&Token::from("9007199254740992"));
        acc.push(&Token::from("1"));
        let result = acc.finish();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["sum"], "9007199254740993");

        let back: Classification = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_ignored_tokens_are_skipped() {
        let mut acc = Accumulator::new();
        acc.push(&Token::Ignored);
        assert!(acc.finish().is_empty());
    }

    #[test]
    fn test_entries_by_category() {
        let mut acc = Accumulator::new();
        for t in ["2", "3", "x", "?"] {
            acc.push(&Token::from(t));
        }
        let result = acc.finish();

        assert_eq!(result.entries(Category::EvenNumber), ["2"]);
        assert_eq!(result.entries(Category::OddNumber), ["3"]);
        assert_eq!(result.entries(Category::Alphabetic), ["X"]);
        assert_eq!(result.entries(Category::Special), ["?"]);
    }
}
