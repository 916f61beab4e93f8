use std::io::Cursor;

use crate::error::{ReportError, Result};
use crate::render::style::{BODY, BODY_BOLD, NOTE, SECTION_HEADING, SUBSECTION_HEADING, TABLE};
use crate::render::{palette, DocumentBuilder, Font, TableLayout, PAGE_HEIGHT, PAGE_WIDTH};
use crate::report::sections::{build_elements, Element};
use crate::report::{ProjectInfo, Report};

use super::ReportFormatter;

/// Canonical output filename when no --output path is given.
pub const DEFAULT_PDF_FILENAME: &str = "SBOM_Report_CyberSoluce_AssetManager.pdf";

const INCH: f32 = 72.0;

/// Renders the report as the PDF document: title page, table of contents,
/// and the eight numbered sections with their embedded tables.
pub struct PdfFormatter;

impl PdfFormatter {
    pub fn new() -> Self {
        Self
    }

    fn paint_title_page(builder: &mut DocumentBuilder, project: &ProjectInfo) {
        let report_date = project.report_date.clone();
        let version_line = format!("Version {}", project.version);
        let date_line = format!("Report Date: {}", report_date);
        let report_version_line = format!("Report Version: {}", project.report_version);
        let name = project.name;
        let vendor = project.vendor;

        builder.paint_cover(|content| {
            content.fill_rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, palette::PAGE_TINT);

            DocumentBuilder::centered_line(
                content,
                "SOFTWARE BILL OF MATERIALS",
                Font::HelveticaBold,
                28.0,
                palette::HEADING_BLUE,
                PAGE_HEIGHT - 2.0 * INCH,
            );
            DocumentBuilder::centered_line(
                content,
                "(SBOM) REPORT",
                Font::HelveticaBold,
                28.0,
                palette::HEADING_BLUE,
                PAGE_HEIGHT - 2.5 * INCH,
            );
            DocumentBuilder::centered_line(
                content,
                name,
                Font::HelveticaBold,
                20.0,
                palette::SLATE,
                PAGE_HEIGHT - 4.0 * INCH,
            );
            DocumentBuilder::centered_line(
                content,
                &version_line,
                Font::Helvetica,
                14.0,
                palette::SLATE,
                PAGE_HEIGHT - 4.5 * INCH,
            );
            DocumentBuilder::centered_line(
                content,
                vendor,
                Font::Helvetica,
                12.0,
                palette::SLATE,
                PAGE_HEIGHT - 5.5 * INCH,
            );

            let metadata_y = PAGE_HEIGHT - 7.0 * INCH;
            DocumentBuilder::centered_line(
                content,
                &date_line,
                Font::Helvetica,
                10.0,
                palette::GREY,
                metadata_y,
            );
            DocumentBuilder::centered_line(
                content,
                &report_version_line,
                Font::Helvetica,
                10.0,
                palette::GREY,
                metadata_y - 0.3 * INCH,
            );

            DocumentBuilder::centered_line(
                content,
                "CONFIDENTIAL - For Internal Use Only",
                Font::HelveticaOblique,
                9.0,
                palette::ALERT_RED,
                INCH,
            );
        });
    }
}

impl Default for PdfFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PdfFormatter {
    fn format(&self, report: &Report) -> Result<Vec<u8>> {
        let footer_text = format!(
            "{} SBOM Report | {}",
            report.project.name, report.project.report_date
        );
        let mut builder = DocumentBuilder::new(footer_text);

        Self::paint_title_page(&mut builder, &report.project);

        for element in build_elements(report) {
            match element {
                Element::SectionHeading(text) => {
                    // Keep headings off the very bottom of a page.
                    builder.ensure_room(80.0);
                    builder.add_paragraph(&text, &SECTION_HEADING);
                }
                Element::Subheading(text) => {
                    builder.ensure_room(60.0);
                    builder.add_paragraph(&text, &SUBSECTION_HEADING);
                }
                Element::BoldLine(text) => builder.add_paragraph(&text, &BODY_BOLD),
                Element::Paragraph(text) => builder.add_paragraph(&text, &BODY),
                Element::Note(text) => builder.add_paragraph(&text, &NOTE),
                Element::Bullet(text) => builder.add_bullet(&text, &BODY),
                Element::Table(table) => {
                    let layout =
                        TableLayout::build(&table.columns, &table.rows, table.widths, TABLE);
                    builder.add_table(&layout);
                }
                Element::PageBreak => builder.break_page(),
            }
        }

        let mut doc = builder.finish().map_err(|e| ReportError::Render {
            details: e.to_string(),
        })?;
        let mut cursor = Cursor::new(Vec::new());
        doc.save_to(&mut cursor).map_err(|e| ReportError::Render {
            details: e.to_string(),
        })?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Document;

    fn render_document() -> Document {
        let report = Report::assemble();
        let bytes = PdfFormatter::new().format(&report).unwrap();
        Document::load_mem(&bytes).unwrap()
    }

    fn all_text(doc: &Document) -> String {
        let mut out = String::new();
        for (_, page_id) in doc.get_pages() {
            out.push_str(&String::from_utf8_lossy(
                &doc.get_page_content(page_id).unwrap(),
            ));
        }
        out
    }

    #[test]
    fn test_output_is_valid_pdf() {
        let report = Report::assemble();
        let bytes = PdfFormatter::new().format(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(Document::load_mem(&bytes).is_ok());
    }

    #[test]
    fn test_document_has_title_page_plus_sections() {
        let doc = render_document();
        // Title page, TOC, and at least one page per section.
        assert!(doc.get_pages().len() >= 10);
    }

    #[test]
    fn test_title_page_content() {
        let doc = render_document();
        let pages = doc.get_pages();
        let first = String::from_utf8_lossy(
            &doc.get_page_content(*pages.get(&1).unwrap()).unwrap(),
        )
        .into_owned();
        assert!(first.contains("SOFTWARE BILL OF MATERIALS"));
        assert!(first.contains("CyberSoluce Asset Manager"));
        assert!(first.contains("CONFIDENTIAL - For Internal Use Only"));
    }

    #[test]
    fn test_all_sections_rendered() {
        let doc = render_document();
        let text = all_text(&doc);
        assert!(text.contains("TABLE OF CONTENTS"));
        assert!(text.contains("1. EXECUTIVE SUMMARY"));
        assert!(text.contains("2. PROJECT INFORMATION"));
        assert!(text.contains("3. COMPONENT INVENTORY"));
        assert!(text.contains("4. LICENSE INFORMATION"));
        assert!(text.contains("5. SECURITY & VULNERABILITY ASSESSMENT"));
        assert!(text.contains("6. COMPLIANCE & RISK ANALYSIS"));
        assert!(text.contains("7. RECOMMENDATIONS"));
        assert!(text.contains("8. APPENDICES"));
    }

    #[test]
    fn test_component_names_rendered() {
        let doc = render_document();
        let text = all_text(&doc);
        assert!(text.contains("react-router-dom"));
        assert!(text.contains("@supabase/supabase-js"));
        assert!(text.contains("typescript"));
    }

    #[test]
    fn test_two_runs_are_structurally_equivalent() {
        let first = render_document();
        let second = render_document();
        // Timestamps may differ between runs; structure must not.
        assert_eq!(first.get_pages().len(), second.get_pages().len());
    }
}
