use crate::error::{Context, Result};
use classifier::{classify, tokens_from_payload, tokens_from_value, Classification};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};

pub fn execute(input: Option<String>, compact: bool) -> Result<()> {
    let text = match &input {
        Some(path) => fs::read_to_string(path).context(format!("Failed to read {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        }
    };

    let result = classify_text(&text)?;
    let output = if compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{output}");
    Ok(())
}

/// Accepts either a bare JSON array or a `{ "data": [...] }` request body
fn classify_text(text: &str) -> Result<Classification> {
    let value: Value = serde_json::from_str(text)?;
    let tokens = match &value {
        Value::Array(_) => tokens_from_value(&value)?,
        _ => tokens_from_payload(&value)?,
    };
    Ok(classify(&tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_bare_array() {
        let result = classify_text(r#"["a", "1", "2", "$"]"#).unwrap();
        assert_eq!(result.even_numbers, ["2"]);
        assert_eq!(result.odd_numbers, ["1"]);
        assert_eq!(result.alphabets, ["A"]);
        assert_eq!(result.special_characters, ["$"]);
        assert_eq!(result.sum.to_string(), "3");
    }

    #[test]
    fn test_request_body() {
        let result = classify_text(r#"{"data": ["xY", null, 5]}"#).unwrap();
        assert_eq!(result.alphabets, ["XY"]);
        assert_eq!(result.concat_string, "Yx");
        assert!(result.odd_numbers.is_empty());
    }

    #[test]
    fn test_rejects_non_array_data() {
        let err = classify_text(r#"{"data": "abc"}"#).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
        assert_eq!(err.user_message(), "Invalid input: data must be an array.");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = classify_text("[1, 2").unwrap_err();
        assert!(matches!(err, CliError::JsonParseError(_)));
    }
}
