use clap::Parser;

use crate::formatters::{
    JsonFormatter, MarkdownFormatter, PdfFormatter, ReportFormatter, DEFAULT_PDF_FILENAME,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'pdf', 'markdown', or 'json'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            OutputFormat::Pdf => Box::new(PdfFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "📝 Generating PDF report...",
            OutputFormat::Markdown => "📝 Generating Markdown format output...",
            OutputFormat::Json => "📝 Generating JSON format output...",
        }
    }

    /// Default output destination: the PDF format writes the canonical
    /// report filename; the text formats go to stdout.
    pub fn default_output(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Pdf => Some(DEFAULT_PDF_FILENAME),
            OutputFormat::Markdown | OutputFormat::Json => None,
        }
    }
}

/// Generate the SBOM report for CyberSoluce Asset Manager
#[derive(Parser, Debug)]
#[command(name = "sbom-report")]
#[command(version)]
#[command(about = "Generate the SBOM report for CyberSoluce Asset Manager", long_about = None)]
pub struct Args {
    /// Output format: pdf, markdown, or json
    #[arg(short, long, default_value = "pdf")]
    pub format: OutputFormat,

    /// Output file path (PDF defaults to the canonical report filename in
    /// the working directory; markdown and json default to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_pdf() {
        let format = OutputFormat::from_str("pdf").unwrap();
        assert_eq!(format, OutputFormat::Pdf);

        let format = OutputFormat::from_str("PDF").unwrap();
        assert_eq!(format, OutputFormat::Pdf);
    }

    #[test]
    fn test_output_format_from_str_markdown() {
        assert_eq!(
            OutputFormat::from_str("markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_from_str_json() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("docx");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("docx"));
    }

    #[test]
    fn test_default_output() {
        assert_eq!(
            OutputFormat::Pdf.default_output(),
            Some("SBOM_Report_CyberSoluce_AssetManager.pdf")
        );
        assert_eq!(OutputFormat::Markdown.default_output(), None);
        assert_eq!(OutputFormat::Json.default_output(), None);
    }

    #[test]
    fn test_progress_messages() {
        assert!(OutputFormat::Pdf.progress_message().contains("PDF"));
        assert!(OutputFormat::Json.progress_message().contains("JSON"));
    }
}
