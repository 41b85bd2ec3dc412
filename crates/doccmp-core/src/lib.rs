//! doccmp-core: line-by-line comparison of PDF and DOCX documents
//!
//! This crate provides:
//! - Text extraction adapters normalizing PDF and DOCX files into
//!   ordered line sequences
//! - Positional (and optional sequence-based) line alignment
//! - Character-level inline diffing with classified edit spans
//! - HTML rendering of the aligned, highlighted result
//!
//! The crate performs no HTTP, templating, or routing; the caller hands
//! it two readable, pre-verified file paths and embeds the returned
//! HTML fragment.

pub mod align;
pub mod compare;
pub mod diff;
pub mod document;
pub mod error;
pub mod render;

// Re-exports
pub use align::{align_lines, align_lines_with, AlignMode, LinePair};
pub use compare::{compare_documents, compare_extracted, CompareOptions};
pub use diff::{diff_line, EditOpcode, OpKind};
pub use document::{
    extract_docx_text, extract_document_text, extract_pdf_text, DocumentFormat, ExtractedDocument,
};
pub use error::{CompareError, Result};
pub use render::{format_comparison, format_line_pair, render_page, STYLESHEET};
