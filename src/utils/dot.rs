//! Escaping for Graphviz DOT output.
//!
//! Used by [`DirectedGraph::to_dot`](crate::DirectedGraph::to_dot) so that arbitrary vertex
//! names can be placed inside quoted DOT labels.

/// Escapes a string for use inside a double-quoted DOT label.
///
/// Backslashes and double quotes are escaped, line feeds become the `\n` escape, carriage
/// returns are dropped, and angle brackets are escaped so record-shaped nodes do not treat
/// them as port markers.
///
/// # Examples
///
/// ```rust
/// use matrixgraph::utils::escape_dot;
///
/// assert_eq!(escape_dot("a\"b"), "a\\\"b");
/// assert_eq!(escape_dot("x<y>"), "x\\<y\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            '<' => escaped.push_str("\\<"),
            '>' => escaped.push_str("\\>"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(escape_dot("V1"), "V1");
        assert_eq!(escape_dot(""), "");
    }

    #[test]
    fn test_quotes_and_backslashes() {
        assert_eq!(escape_dot(r#"a "b" c"#), r#"a \"b\" c"#);
        assert_eq!(escape_dot(r"dir\name"), r"dir\\name");
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(escape_dot("top\r\nbottom"), "top\\nbottom");
    }

    #[test]
    fn test_angle_brackets() {
        assert_eq!(escape_dot("<start>"), "\\<start\\>");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape_dot("顶点→一"), "顶点→一");
    }
}
