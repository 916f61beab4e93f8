//! sbom-report - SBOM report generator for CyberSoluce Asset Manager
//!
//! This library renders a fixed, compiled-in inventory of the application's
//! software dependencies into a professional multi-section SBOM report.
//! The primary output is a PDF document; Markdown and JSON formatters render
//! the same inventory through the common [`formatters::ReportFormatter`] seam.
//!
//! # Architecture
//!
//! - **`report`**: the domain model - the static dependency catalogs, project
//!   metadata, computed summary statistics, and the fixed section sequence
//! - **`render`**: a small flowable layout engine over `lopdf` (paragraphs,
//!   bullets, tables, page breaks, footers)
//! - **`formatters`**: PDF, Markdown, and JSON renderers over the same
//!   section elements
//! - **`cli`** / **`error`**: argument parsing and shared error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_report::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let report = Report::assemble();
//! let formatter = PdfFormatter::new();
//! let bytes = formatter.format(&report)?;
//! std::fs::write("SBOM_Report_CyberSoluce_AssetManager.pdf", bytes)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod formatters;
pub mod render;
pub mod report;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cli::{Args, OutputFormat};
    pub use crate::error::{ExitCode, ReportError, Result};
    pub use crate::formatters::{
        JsonFormatter, MarkdownFormatter, PdfFormatter, ReportFormatter, DEFAULT_PDF_FILENAME,
    };
    pub use crate::report::{
        development, production, Dependency, DependencyScope, ProjectInfo, Report, ReportSummary,
    };
}
