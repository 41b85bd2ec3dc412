//! Text extraction for the two supported document formats.
//!
//! Both extractors normalize their input into an [`ExtractedDocument`],
//! an ordered sequence of plain-text lines:
//!
//! - DOCX: one line per paragraph, in document order. Empty paragraphs
//!   produce empty lines and are preserved, because they shift the
//!   positional alignment against the other document.
//! - PDF: raw text extraction has no line concept, so lines are
//!   synthesized by splitting each page's text on `". "` (sentence
//!   boundaries). This is a lossy heuristic: it breaks on abbreviations,
//!   decimal numbers and non-English punctuation, and comparison quality
//!   is bounded by it.

use crate::error::{CompareError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Source format of an extracted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "PDF"),
            DocumentFormat::Docx => write!(f, "DOCX"),
        }
    }
}

/// Ordered sequence of text lines extracted from one source file.
///
/// Immutable after creation and owned by the comparison call that
/// created it; nothing is cached or shared across comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    format: DocumentFormat,
    source: PathBuf,
    lines: Vec<String>,
}

impl ExtractedDocument {
    /// Build a document from lines already in hand (no file involved).
    pub fn from_lines<I, S>(format: DocumentFormat, source: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            format,
            source: source.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Strict accessor: fail with [`CompareError::EmptyDocument`] when
    /// extraction yielded zero lines.
    pub fn require_text(&self) -> Result<&[String]> {
        if self.lines.is_empty() {
            return Err(CompareError::EmptyDocument {
                format: self.format,
                path: self.source.clone(),
            });
        }
        Ok(&self.lines)
    }
}

/// Extract text from a document file, dispatching on the extension.
pub fn extract_document_text(path: &Path) -> Result<ExtractedDocument> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => extract_pdf_text(path),
        "docx" => extract_docx_text(path),
        _ => Err(CompareError::UnsupportedFormat(ext)),
    }
}

/// Extract text from a PDF file with synthesized lines.
///
/// Pages are processed strictly in ascending order. Each page's text is
/// split on `". "` and every segment trimmed; a page yielding no text
/// contributes zero lines, not an empty placeholder.
pub fn extract_pdf_text(path: &Path) -> Result<ExtractedDocument> {
    let unreadable = |reason: String| CompareError::UnreadableDocument {
        format: DocumentFormat::Pdf,
        path: path.to_path_buf(),
        reason,
    };

    // Wrap in catch_unwind since pdf_extract can panic on malformed PDFs.
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text_by_pages(path)
    }));
    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(unreadable(e.to_string())),
        Err(_) => return Err(unreadable("extraction panicked (malformed PDF)".to_string())),
    };

    let mut lines = Vec::new();
    for page_text in &pages {
        if page_text.is_empty() {
            continue;
        }
        // Artificial line breaks: one sentence per line.
        for segment in page_text.split(". ") {
            lines.push(segment.trim().to_string());
        }
    }

    tracing::debug!(
        "PDF extracted: {} pages, {} synthesized lines from {}",
        pages.len(),
        lines.len(),
        path.display()
    );

    Ok(ExtractedDocument {
        format: DocumentFormat::Pdf,
        source: path.to_path_buf(),
        lines,
    })
}

/// Extract text from a DOCX file, one line per paragraph.
///
/// DOCX files are ZIP archives; the paragraph list lives in
/// `word/document.xml`. Run text comes from `w:t` elements; a `w:tab`
/// contributes a tab and `w:br`/`w:cr` contribute a newline within the
/// paragraph's line.
pub fn extract_docx_text(path: &Path) -> Result<ExtractedDocument> {
    let unreadable = |reason: String| CompareError::UnreadableDocument {
        format: DocumentFormat::Docx,
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| unreadable(format!("not a ZIP archive: {e}")))?;

    let mut xml_content = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| unreadable(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut xml_content)
        .map_err(|e| unreadable(format!("word/document.xml is not UTF-8: {e}")))?;

    let lines = parse_docx_paragraphs(&xml_content).map_err(unreadable)?;

    tracing::debug!(
        "DOCX extracted: {} paragraphs from {}",
        lines.len(),
        path.display()
    );

    Ok(ExtractedDocument {
        format: DocumentFormat::Docx,
        source: path.to_path_buf(),
        lines,
    })
}

/// Walk `word/document.xml` and collect paragraph texts in order.
fn parse_docx_paragraphs(xml_content: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml_content);
    // DOCX uses xml:space="preserve"; never trim run text.
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:r" if in_paragraph => in_run = true,
                b"w:t" if in_run => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // A self-closing <w:p/> is an empty paragraph; it still
                // occupies a line in the positional alignment.
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if in_run => current.push('\t'),
                b"w:br" | b"w:cr" if in_run => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e.unescape().map_err(|e| format!("bad run text: {e}"))?;
                    current.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if in_paragraph {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    in_paragraph = false;
                }
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("error parsing document.xml: {e:?}")),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}
