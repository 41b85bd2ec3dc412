//! HTML rendering of aligned, classified comparison rows.
//!
//! Output is a sequence of `<div>` blocks (one per row) joined with
//! `<br>`, ready for embedding in a page template. All document text is
//! escaped before it reaches the markup; styling hangs off CSS classes
//! so the embedding page controls presentation.

use crate::align::LinePair;
use crate::diff::{diff_line, OpKind};
use std::borrow::Cow;

/// Default styling for the emitted classes: matching text green,
/// differing text red, confirmed-identical rows on a yellow marker.
pub const STYLESHEET: &str = "\
.cmp-row { font-family: monospace; white-space: pre-wrap; }
.cmp-row-identical { background-color: yellow; }
.cmp-match { color: green; }
.cmp-diff { color: red; }
";

fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

fn match_span(text: &str) -> String {
    format!("<span class=\"cmp-match\">{}</span>", escape(text))
}

fn diff_span(text: &str) -> String {
    format!("<span class=\"cmp-diff\">{}</span>", escape(text))
}

/// Render one comparison row as an HTML block.
///
/// - both sides present and identical: one block with the identical-row
///   marker class;
/// - both sides present and different: inline spans from the character
///   diff, equal spans marked matching, each non-equal opcode emitting
///   its left then its right substring marked differing (empty marked
///   spans included);
/// - one side absent: the whole surviving line marked differing.
pub fn format_line_pair(pair: &LinePair) -> String {
    match (&pair.left, &pair.right) {
        (Some(left), Some(right)) if left == right => {
            format!(
                "<div class=\"cmp-row cmp-row-identical\">{}</div>",
                match_span(left)
            )
        }
        (Some(left), Some(right)) => {
            let mut spans = String::new();
            for op in diff_line(left, right) {
                match op.kind {
                    OpKind::Equal => spans.push_str(&match_span(&op.left)),
                    OpKind::Replace | OpKind::Delete | OpKind::Insert => {
                        spans.push_str(&diff_span(&op.left));
                        spans.push_str(&diff_span(&op.right));
                    }
                }
            }
            format!("<div class=\"cmp-row\">{spans}</div>")
        }
        (Some(line), None) | (None, Some(line)) => {
            format!("<div class=\"cmp-row\">{}</div>", diff_span(line))
        }
        (None, None) => "<div class=\"cmp-row\"></div>".to_string(),
    }
}

/// Render the full comparison: one block per row, joined with `<br>`.
pub fn format_comparison(pairs: &[LinePair]) -> String {
    pairs
        .iter()
        .map(format_line_pair)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Wrap a rendered comparison in a minimal standalone HTML page.
pub fn render_page(title: &str, comparison: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLESHEET,
        comparison
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(index: usize, left: Option<&str>, right: Option<&str>) -> LinePair {
        LinePair {
            index,
            left: left.map(String::from),
            right: right.map(String::from),
        }
    }

    #[test]
    fn identical_row_gets_block_marker_and_no_diff_spans() {
        let html = format_line_pair(&pair(0, Some("The cat sat."), Some("The cat sat.")));
        assert_eq!(
            html,
            "<div class=\"cmp-row cmp-row-identical\">\
             <span class=\"cmp-match\">The cat sat.</span></div>"
        );
        assert!(!html.contains("cmp-diff"));
    }

    #[test]
    fn differing_row_emits_left_then_right_for_each_change() {
        let html = format_line_pair(&pair(0, Some("The cat sat."), Some("The dog sat.")));
        assert_eq!(
            html,
            "<div class=\"cmp-row\">\
             <span class=\"cmp-match\">The </span>\
             <span class=\"cmp-diff\">cat</span>\
             <span class=\"cmp-diff\">dog</span>\
             <span class=\"cmp-match\"> sat.</span></div>"
        );
    }

    #[test]
    fn one_sided_rows_are_fully_differing() {
        let left_only = format_line_pair(&pair(2, Some("Goodbye"), None));
        assert_eq!(
            left_only,
            "<div class=\"cmp-row\"><span class=\"cmp-diff\">Goodbye</span></div>"
        );
        let right_only = format_line_pair(&pair(2, None, Some("Goodbye")));
        assert_eq!(right_only, left_only);
    }

    #[test]
    fn markup_significant_characters_are_escaped() {
        let html = format_line_pair(&pair(0, Some("<b>&\"x\"</b>"), None));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;&amp;"));
    }

    #[test]
    fn comparison_joins_rows_with_line_break() {
        let rows = vec![pair(0, Some("a"), Some("a")), pair(1, Some("b"), None)];
        let html = format_comparison(&rows);
        assert_eq!(html.matches("<br>").count(), 1);
        assert!(html.contains("cmp-row-identical"));
    }

    #[test]
    fn page_wrapper_escapes_title_and_embeds_styles() {
        let page = render_page("a < b", "<div></div>");
        assert!(page.contains("<title>a &lt; b</title>"));
        assert!(page.contains(STYLESHEET));
    }
}
