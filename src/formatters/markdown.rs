use crate::error::Result;
use crate::report::sections::{build_elements, Element, TableData};
use crate::report::Report;

use super::ReportFormatter;

/// Renders the report as GitHub-flavored Markdown with pipe tables.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_table(output: &mut String, table: &TableData) {
        let header: Vec<String> = table.columns.iter().map(|c| c.to_string()).collect();
        output.push_str(&format!("| {} |\n", header.join(" | ")));
        let separator: Vec<&str> = table.columns.iter().map(|_| "---").collect();
        output.push_str(&format!("| {} |\n", separator.join(" | ")));
        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|c| Self::escape_table_cell(c)).collect();
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output.push('\n');
    }

    fn render_header(output: &mut String, report: &Report) {
        output.push_str("# Software Bill of Materials (SBOM) Report\n\n");
        output.push_str(&format!(
            "**Project:** {} {}\n",
            report.project.name, report.project.version
        ));
        output.push_str(&format!("**Vendor:** {}\n", report.project.vendor));
        output.push_str(&format!(
            "**Report Date:** {}\n",
            report.project.report_date
        ));
        output.push_str(&format!(
            "**Report Version:** {}\n\n",
            report.project.report_version
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<Vec<u8>> {
        let mut output = String::new();
        Self::render_header(&mut output, report);

        let elements = build_elements(report);
        for (i, element) in elements.iter().enumerate() {
            match element {
                Element::SectionHeading(text) => {
                    output.push_str(&format!("## {}\n\n", text));
                }
                Element::Subheading(text) => {
                    output.push_str(&format!("### {}\n\n", text));
                }
                Element::BoldLine(text) => {
                    output.push_str(&format!("**{}**\n\n", text));
                }
                Element::Paragraph(text) => {
                    output.push_str(&format!("{}\n\n", text));
                }
                Element::Note(text) => {
                    output.push_str(&format!("*{}*\n\n", text));
                }
                Element::Bullet(text) => {
                    output.push_str(&format!("- {}\n", Self::escape_table_cell(text)));
                    // Close the list when the next element is not a bullet.
                    if !matches!(elements.get(i + 1), Some(Element::Bullet(_))) {
                        output.push('\n');
                    }
                }
                Element::Table(table) => Self::render_table(&mut output, table),
                Element::PageBreak => {}
            }
        }

        Ok(output.into_bytes())
    }
}
