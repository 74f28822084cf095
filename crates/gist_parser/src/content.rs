// crates/gist_parser/src/content.rs

use crate::error::ParseError;

/// Returns the value of a single-line `key: value` field within the marker
/// span lines.
///
/// The search is a case-insensitive substring match that stops at the first
/// matching line; a match on the very first span line (the start-marker line
/// itself) does not count. The value never continues past the end of the
/// matched line.
///
/// The value is recovered positionally: every `"<key>:"` occurrence is
/// removed from a lowercased copy of the trimmed line, and that many
/// trailing bytes are sliced off the original line. This keeps the value's
/// original casing while inheriting the length-based behavior for lines
/// that repeat the key substring.
pub fn field_value(lines: &[String], key: &str) -> Result<String, ParseError> {
    let needle = key.to_lowercase();
    let location = lines
        .iter()
        .position(|line| line.to_lowercase().contains(&needle));

    match location {
        Some(i) if i > 0 => {
            let total = lines[i].trim();
            let stripped = total.to_lowercase().replace(&format!("{}:", needle), "");
            let value = tail_slice(total, stripped.len());
            Ok(value.trim_matches(' ').to_string())
        }
        _ => Err(ParseError::FieldNotFound {
            key: key.to_string(),
        }),
    }
}

/// Returns the last `keep` bytes of `s`. A cut that lands inside a
/// multi-byte character moves forward to the next boundary so the slice
/// stays valid UTF-8; `keep` values larger than the string yield the whole
/// string.
pub fn tail_slice(s: &str, keep: usize) -> &str {
    let mut cut = s.len().saturating_sub(keep);
    while cut < s.len() && !s.is_char_boundary(cut) {
        cut += 1;
    }
    &s[cut..]
}

/// Recognizes the boolean tokens accepted for the `public` field: `1`, `t`,
/// `T`, `true`, `TRUE`, `True` and their false counterparts. Anything else
/// is not a boolean.
pub fn parse_bool_token(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extracts_a_trimmed_value() {
        let lines = span(&["/* start gist", "Description:   demo snippet  ", "end gist */"]);
        assert_eq!(field_value(&lines, "description").unwrap(), "demo snippet");
    }

    #[test]
    fn value_keeps_original_casing() {
        let lines = span(&["/* start gist", "DESCRIPTION: Mixed Case Value", "end gist */"]);
        assert_eq!(field_value(&lines, "description").unwrap(), "Mixed Case Value");
    }

    #[test]
    fn first_matching_line_wins() {
        let lines = span(&[
            "/* start gist",
            "Author: First Author",
            "Author: Second Author",
            "end gist */",
        ]);
        assert_eq!(field_value(&lines, "author").unwrap(), "First Author");
    }

    #[test]
    fn match_on_the_marker_line_does_not_count() {
        let lines = span(&["start gist author: inline", "code", "end gist"]);
        let err = field_value(&lines, "author").unwrap_err();
        assert!(matches!(err, ParseError::FieldNotFound { .. }));
    }

    #[test]
    fn absent_key_is_field_not_found() {
        let lines = span(&["/* start gist", "Description: x", "end gist */"]);
        let err = field_value(&lines, "public").unwrap_err();
        assert!(matches!(err, ParseError::FieldNotFound { key } if key == "public"));
    }

    #[test]
    fn key_without_colon_yields_the_whole_line() {
        // The substring search needs no colon; stripping removes nothing.
        let lines = span(&["/* start gist", "authored by Martin", "end gist */"]);
        assert_eq!(field_value(&lines, "author").unwrap(), "authored by Martin");
    }

    #[test]
    fn repeated_key_substring_widens_the_cut() {
        // Both "description:" occurrences are removed from the lowercased
        // copy, so the tail slice starts 24 bytes in rather than 12.
        let lines = span(&[
            "/* start gist",
            "Description: see description: notes",
            "end gist */",
        ]);
        assert_eq!(field_value(&lines, "description").unwrap(), "tion: notes");
    }

    #[test]
    fn multi_byte_values_survive() {
        let lines = span(&["/* start gist", "Description: caffè latte ☕", "end gist */"]);
        assert_eq!(field_value(&lines, "description").unwrap(), "caffè latte ☕");
    }

    #[test]
    fn tail_slice_takes_trailing_bytes() {
        assert_eq!(tail_slice("abcdef", 2), "ef");
        assert_eq!(tail_slice("abcdef", 0), "");
        assert_eq!(tail_slice("abcdef", 10), "abcdef");
    }

    #[test]
    fn tail_slice_nudges_off_a_char_boundary() {
        // "héllo" is six bytes; keeping four would cut inside the 'é'.
        assert_eq!(tail_slice("héllo", 4), "llo");
    }

    #[test]
    fn bool_tokens_match_the_original_set() {
        for t in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(parse_bool_token(t), Some(true), "{t}");
        }
        for f in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_bool_token(f), Some(false), "{f}");
        }
        assert_eq!(parse_bool_token("tRuE"), None);
        assert_eq!(parse_bool_token("yes"), None);
        assert_eq!(parse_bool_token(""), None);
    }
}
