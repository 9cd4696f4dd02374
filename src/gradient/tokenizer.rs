//! Splits a `<gradient-stops>` declaration into colour and position terms.
//!
//! Grammar:
//!
//! ```text
//! stops    := stop ("," stop)*
//! stop     := colour (ws position)?
//! colour   := ident "(" ... ")" | "#" hex+ | ident
//! position := number "%" | number
//! ```
//!
//! Commas inside a functional colour belong to that colour.

use crate::colour::parse::parse_css_float;
use tracing::warn;

/// One comma separated entry of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopToken<'a> {
    pub colour: &'a str,
    pub position: Option<&'a str>,
}

/// Splits on commas that are not nested inside parentheses.
fn split_top_level(declaration: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in declaration.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&declaration[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&declaration[start..]);
    parts
}

/// Byte length of the colour term at the start of `entry`.
fn colour_len(entry: &str) -> Option<usize> {
    let ident = entry
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(entry.len());

    if entry[ident..].starts_with('(') {
        let mut depth = 0usize;
        for (i, c) in entry.char_indices().skip(ident) {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                _ => {}
            }
        }
        // unbalanced
        return None;
    }

    Some(entry.find(char::is_whitespace).unwrap_or(entry.len()))
}

/// Lexes one entry; `None` when no colour term can be delimited.
pub fn tokenize_stop(entry: &str) -> Option<StopToken<'_>> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    let end = colour_len(entry)?;
    let (colour, rest) = entry.split_at(end);
    let mut terms = rest.split_whitespace();
    let position = terms.next();
    if let Some(extra) = terms.next() {
        warn!(entry, extra, "ignoring trailing terms after colour stop position");
    }

    Some(StopToken { colour, position })
}

/// Lexes every entry of a declaration, skipping entries that cannot be delimited.
pub fn tokenize(declaration: &str) -> Vec<StopToken<'_>> {
    split_top_level(declaration)
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| {
            let token = tokenize_stop(entry);
            if token.is_none() {
                warn!(entry = entry.trim(), "skipping malformed colour stop");
            }
            token
        })
        .collect()
}

/// Converts a position term into a percentage in [0, 100].
///
/// `40%` and `0.4` both give 40. Values outside the range are clamped.
/// Returns `None` for terms that are not plain numbers (lengths, keywords).
pub fn parse_position(term: &str) -> Option<f64> {
    let number = term.strip_suffix('%').unwrap_or(term);
    let well_formed = !number.is_empty()
        && number
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
        && number.parse::<f64>().is_ok_and(f64::is_finite);
    if !well_formed {
        return None;
    }
    parse_css_float(term).map(|v| v * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token<'a>(colour: &'a str, position: Option<&'a str>) -> StopToken<'a> {
        StopToken { colour, position }
    }

    #[test]
    fn test_split_keeps_function_arguments_together() {
        assert_eq!(
            split_top_level("rgb(1, 2, 3) 10%, red"),
            vec!["rgb(1, 2, 3) 10%", " red"]
        );
    }

    #[test]
    fn test_tokenize_mixed_declaration() {
        let tokens = tokenize("red, #00ff00 25%, rgba(0, 0, 255, 0.5) .75, hsl(120, 100%, 50%)");
        assert_eq!(
            tokens,
            vec![
                token("red", None),
                token("#00ff00", Some("25%")),
                token("rgba(0, 0, 255, 0.5)", Some(".75")),
                token("hsl(120, 100%, 50%)", None),
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_and_blank_entries() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert_eq!(tokenize("red,, blue"), vec![token("red", None), token("blue", None)]);
    }

    #[test]
    fn test_tokenize_skips_unbalanced_function() {
        assert_eq!(tokenize("rgb(1, 2, 3 10%"), Vec::new());
        assert_eq!(tokenize("rgb(1, 2 , blue"), Vec::new());
    }

    #[test]
    fn test_tokenize_ignores_extra_terms() {
        assert_eq!(tokenize("red 10% 20%"), vec![token("red", Some("10%"))]);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("25%"), Some(25.0));
        assert_eq!(parse_position("0.5"), Some(50.0));
        assert_eq!(parse_position("0%"), Some(0.0));
        assert_eq!(parse_position("150%"), Some(100.0));
        assert_eq!(parse_position("-10%"), Some(0.0));
        assert_eq!(parse_position("3"), Some(100.0));
        assert_eq!(parse_position("20px"), None);
        assert_eq!(parse_position("inf"), None);
        assert_eq!(parse_position("%"), None);
        assert_eq!(parse_position("blue"), None);
    }
}
