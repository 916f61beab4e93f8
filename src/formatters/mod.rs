//! Output formatters for the report. Each formatter walks the same
//! section/element sequence and renders it to its target format.

mod json;
mod markdown;
mod pdf;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use pdf::{PdfFormatter, DEFAULT_PDF_FILENAME};

use crate::error::Result;
use crate::report::Report;

/// Renders an assembled report into output bytes (UTF-8 text for the
/// Markdown and JSON formats, binary for PDF).
pub trait ReportFormatter {
    fn format(&self, report: &Report) -> Result<Vec<u8>>;
}
