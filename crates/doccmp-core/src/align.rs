//! Pairing the two documents' line sequences into comparison rows.

use serde::Serialize;
use similar::{capture_diff_slices, Algorithm, DiffTag};

/// One comparison row: the positional association of a left-document
/// line with the corresponding right-document line.
///
/// A `None` side means that document ran out of lines. `index` counts
/// emitted rows, monotonically increasing from 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePair {
    pub index: usize,
    pub left: Option<String>,
    pub right: Option<String>,
}

/// Strategy for pairing lines across the two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignMode {
    /// Pair lines strictly by position. A single inserted line early in
    /// one document shifts every subsequent comparison out of alignment;
    /// this is a known, accepted limitation of line-level alignment,
    /// kept as the default for fidelity with the original behavior.
    #[default]
    Positional,
    /// Re-synchronize with a longest-common-subsequence over whole
    /// lines: unchanged lines pair up, deletions and insertions become
    /// one-sided rows, and replaced runs pair positionally within the
    /// run. In this mode `LinePair::index` is the row number, not a
    /// source line number.
    Sequence,
}

/// Pair lines by position: for each index up to the longer sequence's
/// length, take that index's line from each side, absent where a
/// document has fewer lines.
pub fn align_lines(left: &[String], right: &[String]) -> Vec<LinePair> {
    let rows = left.len().max(right.len());
    (0..rows)
        .map(|index| LinePair {
            index,
            left: left.get(index).cloned(),
            right: right.get(index).cloned(),
        })
        .collect()
}

/// Pair lines with the given [`AlignMode`].
pub fn align_lines_with(mode: AlignMode, left: &[String], right: &[String]) -> Vec<LinePair> {
    match mode {
        AlignMode::Positional => align_lines(left, right),
        AlignMode::Sequence => align_lines_by_sequence(left, right),
    }
}

fn align_lines_by_sequence(left: &[String], right: &[String]) -> Vec<LinePair> {
    let ops = capture_diff_slices(Algorithm::Myers, left, right);
    let mut pairs = Vec::new();

    let mut push = |l: Option<&String>, r: Option<&String>| {
        pairs.push(LinePair {
            index: pairs.len(),
            left: l.cloned(),
            right: r.cloned(),
        });
    };

    for op in &ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for (l, r) in left[old_range].iter().zip(right[new_range].iter()) {
                    push(Some(l), Some(r));
                }
            }
            DiffTag::Delete => {
                for l in &left[old_range] {
                    push(Some(l), None);
                }
            }
            DiffTag::Insert => {
                for r in &right[new_range] {
                    push(None, Some(r));
                }
            }
            DiffTag::Replace => {
                let old = &left[old_range];
                let new = &right[new_range];
                let rows = old.len().max(new.len());
                for i in 0..rows {
                    push(old.get(i), new.get(i));
                }
            }
        }
    }

    pairs
}
