//! Cell decoding for the planner's text dump format.
//!
//! The dump follows the `COPY ... TO` text conventions loosely:
//! - `\N` is a null
//! - `{a,b,c}` is an array
//! - anything else is a literal string
//!
//! The array decoder is deliberately simple. It strips the outer braces and splits on `,`.
//! Quoted elements, escaped commas and nested arrays are not understood, and `{}` decodes to a
//! single empty element.

use serde::Serialize;

/// The null sentinel.
pub const NULL_SENTINEL: &str = "\\N";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    List(Vec<String>),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Flattens a cell into display text: lists are joined back with `,`, nulls are absent.
    pub fn into_display(self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::List(items) => Some(items.join(",")),
            Cell::Text(s) => Some(s),
        }
    }
}

/// Decodes one raw cell. Precedence: null sentinel, then array, then text.
pub fn decode_cell(raw: &str) -> Cell {
    if raw == NULL_SENTINEL {
        return Cell::Null;
    }
    match decode_array(raw) {
        Some(items) => Cell::List(items),
        None => Cell::Text(raw.to_string()),
    }
}

/// Returns the comma-split interior of a brace-delimited cell, or `None` if `raw` is not one.
///
/// Elements are returned verbatim (no trimming, no unescaping).
pub fn decode_array(raw: &str) -> Option<Vec<String>> {
    let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
    Some(inner.split(',').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sentinel_decodes_to_null() {
        assert_eq!(decode_cell("\\N"), Cell::Null);
        assert!(decode_cell("\\N").is_null());
    }

    #[test]
    fn sentinel_must_match_exactly() {
        assert_eq!(decode_cell("\\N "), Cell::Text("\\N ".to_string()));
        assert_eq!(decode_cell("N"), Cell::Text("N".to_string()));
    }

    #[test]
    fn braces_decode_to_ordered_list() {
        assert_eq!(
            decode_cell("{p1,p2}"),
            Cell::List(vec!["p1".to_string(), "p2".to_string()])
        );
        assert_eq!(decode_cell("{p1}"), Cell::List(vec!["p1".to_string()]));
    }

    #[test]
    fn array_elements_are_not_trimmed_or_unescaped() {
        assert_eq!(
            decode_array("{ a ,\"b,c\"}"),
            Some(vec![" a ".to_string(), "\"b".to_string(), "c\"".to_string()])
        );
    }

    #[test]
    fn empty_array_yields_single_empty_element() {
        assert_eq!(decode_array("{}"), Some(vec![String::new()]));
    }

    #[test]
    fn unbalanced_braces_stay_text() {
        assert_eq!(decode_array("{p1"), None);
        assert_eq!(decode_array("p1}"), None);
        assert_eq!(decode_cell("{p1"), Cell::Text("{p1".to_string()));
    }

    #[test]
    fn single_brace_is_text() {
        // The opening and closing brace must be two distinct characters.
        assert_eq!(decode_array("{"), None);
    }

    #[test]
    fn display_flattening() {
        assert_eq!(Cell::Null.into_display(), None);
        assert_eq!(
            Cell::List(vec!["a".into(), "b".into()]).into_display(),
            Some("a,b".to_string())
        );
        assert_eq!(Cell::Text("x".into()).into_display(), Some("x".to_string()));
    }
}
