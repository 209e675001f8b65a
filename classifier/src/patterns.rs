use once_cell::sync::Lazy;
use regex::Regex;

/// Optional leading minus followed by ASCII digits, nothing else
pub static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("Failed to compile integer regex"));

/// One or more ASCII letters, nothing else
pub static ALPHABETIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("Failed to compile alphabetic regex"));

/// Returns true when a single character should be reported as special
pub fn is_special_char(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !c.is_whitespace()
}
