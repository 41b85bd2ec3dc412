//! doccmp - line-by-line PDF/DOCX comparison CLI
//!
//! Compares the textual content of a DOCX and a PDF document and writes
//! an inline-highlighted HTML comparison (or a JSON report).
//!
//! Usage:
//!   doccmp report.docx report.pdf                 Print the HTML fragment
//!   doccmp report.docx report.pdf -o cmp.html --page
//!                                                 Write a standalone page
//!   doccmp report.docx report.pdf --format json   Machine-readable report

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use doccmp_core::{
    compare_documents, compare_extracted, diff_line, extract_docx_text, extract_pdf_text,
    render_page, AlignMode, CompareOptions, DocumentFormat, EditOpcode,
};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "doccmp", version, about = "Compare a DOCX and a PDF document line by line")]
struct Cli {
    /// DOCX document (left side of every row)
    docx: PathBuf,

    /// PDF document (right side of every row)
    pdf: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Line alignment strategy
    #[arg(long, value_enum, default_value_t = AlignArg::Positional)]
    align: AlignArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Wrap the HTML fragment in a standalone page with styling
    #[arg(long)]
    page: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    /// Strictly positional pairing (original behavior)
    Positional,
    /// Re-synchronize around inserted/deleted lines
    Sequence,
}

impl From<AlignArg> for AlignMode {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Positional => AlignMode::Positional,
            AlignArg::Sequence => AlignMode::Sequence,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

/// One row of the JSON report: the aligned pair plus, for rows where
/// both sides are present but differ, the inline opcodes.
#[derive(Serialize)]
struct RowReport {
    index: usize,
    left: Option<String>,
    right: Option<String>,
    identical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    opcodes: Option<Vec<EditOpcode>>,
}

/// Verify by magic bytes that the file really is the expected format.
///
/// The extractors assume well-formed input; this is the caller-side
/// content-type check they contract for.
fn verify_content_type(path: &Path, expected: DocumentFormat) -> Result<()> {
    let expected_mime = match expected {
        DocumentFormat::Pdf => "application/pdf",
        DocumentFormat::Docx => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
    };

    let detected = infer::get_from_path(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match detected {
        Some(kind) if kind.mime_type() == expected_mime => Ok(()),
        Some(kind) => bail!(
            "{} does not look like a {expected} file (detected {})",
            path.display(),
            kind.mime_type()
        ),
        None => bail!(
            "{} does not look like a {expected} file (unrecognized content)",
            path.display()
        ),
    }
}

fn json_report(cli: &Cli, options: &CompareOptions) -> Result<String> {
    let docx = extract_docx_text(&cli.docx)?;
    let pdf = extract_pdf_text(&cli.pdf)?;

    let rows: Vec<RowReport> = compare_extracted(&docx, &pdf, options)
        .into_iter()
        .map(|pair| {
            let identical = pair.left.is_some() && pair.left == pair.right;
            let opcodes = match (&pair.left, &pair.right) {
                (Some(l), Some(r)) if l != r => Some(diff_line(l, r)),
                _ => None,
            };
            RowReport {
                index: pair.index,
                left: pair.left,
                right: pair.right,
                identical,
                opcodes,
            }
        })
        .collect();

    serde_json::to_string_pretty(&rows).context("Failed to serialize report")
}

fn run(cli: &Cli) -> Result<String> {
    verify_content_type(&cli.docx, DocumentFormat::Docx)?;
    verify_content_type(&cli.pdf, DocumentFormat::Pdf)?;

    let options = CompareOptions {
        align: cli.align.into(),
    };

    match cli.format {
        OutputFormat::Html => {
            let fragment = compare_documents(&cli.docx, &cli.pdf, &options)?;
            if cli.page {
                let title = format!(
                    "{} vs {}",
                    cli.docx.file_name().unwrap_or_default().to_string_lossy(),
                    cli.pdf.file_name().unwrap_or_default().to_string_lossy()
                );
                Ok(render_page(&title, &fragment))
            } else {
                Ok(fragment)
            }
        }
        OutputFormat::Json => json_report(cli, &options),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            let result = match &cli.out {
                Some(path) => fs::write(path, &output)
                    .with_context(|| format!("Failed to write {}", path.display())),
                None => std::io::stdout()
                    .write_all(output.as_bytes())
                    .map_err(Into::into),
            };
            if let Err(e) = result {
                eprintln!("{} {e:#}", "error:".red().bold());
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
