//! Top-level comparison: two file paths in, one HTML string out.

use crate::align::{align_lines_with, AlignMode, LinePair};
use crate::document::{extract_docx_text, extract_pdf_text, ExtractedDocument};
use crate::error::Result;
use crate::render::format_comparison;
use std::path::Path;

/// Options for one comparison invocation.
///
/// Passed explicitly to every call; there is no process-wide
/// configuration state.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub align: AlignMode,
}

/// Compare a DOCX and a PDF document and render the result as HTML.
///
/// The DOCX is the left side of every row, the PDF the right. Both
/// extractions must succeed; an extraction error propagates unmodified
/// and no diffing is attempted on partial data. An empty (but readable)
/// side is valid degenerate input: every line of the other document
/// comes out unmatched, and a warning is logged so the case stays
/// observable.
///
/// The call only reads the two input files; it owns no other state and
/// has no side effects.
pub fn compare_documents(
    docx_path: &Path,
    pdf_path: &Path,
    options: &CompareOptions,
) -> Result<String> {
    // The two extractions are independent; run them side by side.
    let (docx, pdf) = rayon::join(|| extract_docx_text(docx_path), || extract_pdf_text(pdf_path));
    let (docx, pdf) = (docx?, pdf?);

    for doc in [&docx, &pdf] {
        if doc.is_empty() {
            tracing::warn!(
                "{} document {} yielded no text; comparison degenerates to \
                 one-sided rows",
                doc.format(),
                doc.source().display()
            );
        }
    }

    let pairs = compare_extracted(&docx, &pdf, options);
    tracing::debug!(
        "compared {} DOCX lines against {} PDF lines into {} rows",
        docx.len(),
        pdf.len(),
        pairs.len()
    );

    Ok(format_comparison(&pairs))
}

/// Align two already-extracted documents into comparison rows.
///
/// Pure with respect to external state; the filesystem is not touched.
pub fn compare_extracted(
    left: &ExtractedDocument,
    right: &ExtractedDocument,
    options: &CompareOptions,
) -> Vec<LinePair> {
    align_lines_with(options.align, left.lines(), right.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;
    use crate::render::format_comparison;

    fn docx_doc(lines: &[&str]) -> ExtractedDocument {
        ExtractedDocument::from_lines(DocumentFormat::Docx, "test.docx", lines.to_vec())
    }

    fn pdf_doc(lines: &[&str]) -> ExtractedDocument {
        ExtractedDocument::from_lines(DocumentFormat::Pdf, "test.pdf", lines.to_vec())
    }

    #[test]
    fn identical_documents_mark_every_row_identical() {
        let lines = ["alpha", "", "beta", "gamma"];
        let pairs = compare_extracted(
            &docx_doc(&lines),
            &pdf_doc(&lines),
            &CompareOptions::default(),
        );
        let html = format_comparison(&pairs);
        assert_eq!(
            html.matches("cmp-row-identical").count(),
            lines.len(),
            "every row must carry the identical marker"
        );
        assert!(!html.contains("cmp-diff"));
    }

    #[test]
    fn empty_side_degenerates_to_one_sided_rows() {
        let pairs = compare_extracted(
            &docx_doc(&["a", "b"]),
            &pdf_doc(&[]),
            &CompareOptions::default(),
        );
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.right.is_none()));
    }

    #[test]
    fn misaligned_scenario_renders_expected_rows() {
        let pairs = compare_extracted(
            &docx_doc(&["Hello world", "", "Goodbye"]),
            &pdf_doc(&["Hello world", "Goodbye"]),
            &CompareOptions::default(),
        );
        let rows: Vec<String> = pairs.iter().map(crate::render::format_line_pair).collect();

        // Row 0: confirmed identical.
        assert!(rows[0].contains("cmp-row-identical"));
        // Row 1: left "" vs right "Goodbye", fully differing with an
        // empty marked span for the left side.
        assert!(rows[1].contains("<span class=\"cmp-diff\"></span>"));
        assert!(rows[1].contains("<span class=\"cmp-diff\">Goodbye</span>"));
        assert!(!rows[1].contains("cmp-match"));
        // Row 2: left only.
        assert_eq!(
            rows[2],
            "<div class=\"cmp-row\"><span class=\"cmp-diff\">Goodbye</span></div>"
        );
    }
}
