//! Classifier - token classification and transformation
//!
//! Partitions an ordered sequence of tokens into even integers, odd integers,
//! alphabetic words and special characters, sums the integers exactly and
//! builds an alternating-case reversal of every alphabetic token.
//!
//! Rules:
//! - numeric tokens match `^-?[0-9]+$` and are summed as arbitrary-precision integers
//! - alphabetic tokens match `^[A-Za-z]+$` and are reported uppercased
//! - any other string is decomposed; each character that is neither an ASCII
//!   letter, an ASCII digit nor whitespace becomes its own special entry
//! - non-string tokens are ignored

pub mod category;
pub mod classification;
pub mod error;
pub mod patterns;
pub mod token;
pub mod transform;

pub use category::{categorize, Category, TokenKind};
pub use classification::{Accumulator, Classification};
pub use error::{ClassifierError, Result};
pub use token::{tokens_from_payload, tokens_from_value, Token, DATA_FIELD};
pub use transform::alternating_reverse;

use serde_json::Value;

/// Classify an ordered token sequence in a single pass
pub fn classify(tokens: &[Token]) -> Classification {
    let mut acc = Accumulator::new();
    for token in tokens {
        acc.push(token);
    }
    acc.finish()
}

/// Classify raw JSON values, ignoring every non-string value
pub fn classify_json(values: &[Value]) -> Classification {
    let tokens: Vec<Token> = values.iter().map(Token::from_json).collect();
    classify(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tokens(items: &[&str]) -> Vec<Token> {
        items.iter().map(|s| Token::from(*s)).collect()
    }

    #[test]
    fn test_empty_input() {
        let result = classify(&[]);
        assert_eq!(result, Classification::default());
        assert_eq!(result.sum.to_string(), "0");
    }

    #[test]
    fn test_classify_json_matches_classify() {
        let values = vec![json!("a"), json!(1), json!("2"), json!(null)];
        assert_eq!(classify_json(&values), classify(&tokens(&["a", "2"])));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let input = tokens(&["a", "1", "$", "BB", "-4"]);
        assert_eq!(classify(&input), classify(&input));
    }
}
