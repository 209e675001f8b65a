/// Reverse the characters of `source` and alternate their case.
///
/// Position 0 of the reversed sequence is uppercased, position 1 lowercased,
/// and so on. An empty input yields an empty string.
pub fn alternating_reverse(source: &str) -> String {
    source
        .chars()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
