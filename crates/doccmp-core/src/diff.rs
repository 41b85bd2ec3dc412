//! Inline character-level diffing of a single line pair.
//!
//! Produces a minimal sequence of classified spans covering both strings
//! end to end, the same opcode shape Python's `SequenceMatcher` emits.

use serde::Serialize;
use similar::{capture_diff_slices, Algorithm, DiffTag};

/// Classification of one diff span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// A classified span of an inline diff.
///
/// `left` and `right` are the (possibly empty) substrings of each side
/// covered by the span. Concatenating the `left` fields of all opcodes
/// for one line reconstructs the left line exactly; same for `right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOpcode {
    pub kind: OpKind,
    pub left: String,
    pub right: String,
}

/// Compute the minimal edit script between two lines.
///
/// Operates on character sequences with Myers diff; adjacent
/// delete+insert runs are grouped into `Replace`. The output is
/// deterministic for a given input pair.
pub fn diff_line(left: &str, right: &str) -> Vec<EditOpcode> {
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();
    let ops = capture_diff_slices(Algorithm::Myers, &left_chars, &right_chars);

    ops.iter()
        .map(|op| {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            let kind = match tag {
                DiffTag::Equal => OpKind::Equal,
                DiffTag::Replace => OpKind::Replace,
                DiffTag::Delete => OpKind::Delete,
                DiffTag::Insert => OpKind::Insert,
            };
            EditOpcode {
                kind,
                left: left_chars[old_range].iter().collect(),
                right: right_chars[new_range].iter().collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(ops: &[EditOpcode]) -> (String, String) {
        let left = ops.iter().map(|op| op.left.as_str()).collect();
        let right = ops.iter().map(|op| op.right.as_str()).collect();
        (left, right)
    }

    #[test]
    fn identical_lines_yield_single_equal_opcode() {
        let ops = diff_line("The cat sat.", "The cat sat.");
        assert_eq!(
            ops,
            vec![EditOpcode {
                kind: OpKind::Equal,
                left: "The cat sat.".to_string(),
                right: "The cat sat.".to_string(),
            }]
        );
    }

    #[test]
    fn replace_span_boundaries_are_exact() {
        let ops = diff_line("The cat sat.", "The dog sat.");
        assert_eq!(
            ops,
            vec![
                EditOpcode {
                    kind: OpKind::Equal,
                    left: "The ".to_string(),
                    right: "The ".to_string(),
                },
                EditOpcode {
                    kind: OpKind::Replace,
                    left: "cat".to_string(),
                    right: "dog".to_string(),
                },
                EditOpcode {
                    kind: OpKind::Equal,
                    left: " sat.".to_string(),
                    right: " sat.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn opcodes_reconstruct_both_sides() {
        let cases = [
            ("", ""),
            ("", "abc"),
            ("abc", ""),
            ("kitten", "sitting"),
            ("The cat sat.", "A cat sat!"),
            ("naïve café", "naive cafe"),
        ];
        for (a, b) in cases {
            let ops = diff_line(a, b);
            let (left, right) = reconstruct(&ops);
            assert_eq!(left, a, "left reconstruction for {a:?} vs {b:?}");
            assert_eq!(right, b, "right reconstruction for {a:?} vs {b:?}");
        }
    }

    #[test]
    fn equal_spans_match_on_both_sides() {
        let ops = diff_line("abcdef", "abXdef");
        for op in &ops {
            if op.kind == OpKind::Equal {
                assert_eq!(op.left, op.right);
            }
        }
    }

    #[test]
    fn diff_is_deterministic() {
        let a = "the quick brown fox jumps over the lazy dog";
        let b = "the quick red fox leaps over a lazy dog";
        assert_eq!(diff_line(a, b), diff_line(a, b));
    }
}
