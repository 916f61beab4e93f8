//! Fixed section sequence of the SBOM report.
//!
//! The report is assembled as a flat list of [`Element`]s that every output
//! format walks in order. There is no branching on data content here beyond
//! iterating the two dependency catalogs and the license distribution into
//! table rows.

use super::Report;

/// Column widths in points for each table shape (US-Letter, 54pt margins,
/// 504pt of usable width).
pub const SUMMARY_WIDTHS: &[f32] = &[216.0, 144.0];
pub const PROJECT_WIDTHS: &[f32] = &[180.0, 288.0];
pub const COMPONENT_WIDTHS: &[f32] = &[198.0, 102.0, 102.0, 102.0];
pub const LICENSE_WIDTHS: &[f32] = &[180.0, 72.0, 72.0];

/// Section titles as they appear in the table of contents.
pub const TOC_ITEMS: &[&str] = &[
    "1. Executive Summary",
    "2. Project Information",
    "3. Component Inventory",
    "4. License Information",
    "5. Security & Vulnerability Assessment",
    "6. Compliance & Risk Analysis",
    "7. Recommendations",
    "8. Appendices",
];

/// A table with a styled header row and plain-text body rows.
#[derive(Debug, Clone)]
pub struct TableData {
    pub columns: Vec<&'static str>,
    pub widths: &'static [f32],
    pub rows: Vec<Vec<String>>,
}

/// One flowable piece of report content, format-agnostic.
#[derive(Debug, Clone)]
pub enum Element {
    SectionHeading(String),
    Subheading(String),
    /// A bold body-size line, used for term lead-ins inside a section.
    BoldLine(String),
    Paragraph(String),
    /// An italic aside.
    Note(String),
    Bullet(String),
    Table(TableData),
    PageBreak,
}

fn component_table(deps: &[super::Dependency]) -> TableData {
    TableData {
        columns: vec!["Component Name", "Version", "License", "Type"],
        widths: COMPONENT_WIDTHS,
        rows: deps
            .iter()
            .map(|d| {
                vec![
                    d.name.to_string(),
                    d.version.to_string(),
                    d.license.to_string(),
                    d.kind.to_string(),
                ]
            })
            .collect(),
    }
}

fn summary_table(report: &Report) -> TableData {
    let summary = &report.summary;
    TableData {
        columns: vec!["Metric", "Value"],
        widths: SUMMARY_WIDTHS,
        rows: vec![
            vec!["Total Components".into(), summary.total.to_string()],
            vec![
                "Production Dependencies".into(),
                summary.production.to_string(),
            ],
            vec![
                "Development Dependencies".into(),
                summary.development.to_string(),
            ],
            vec!["Unique Licenses".into(), summary.unique_licenses.to_string()],
            vec!["Primary License".into(), summary.primary_license().into()],
        ],
    }
}

fn project_table(report: &Report) -> TableData {
    let project = &report.project;
    TableData {
        columns: vec!["Property", "Value"],
        widths: PROJECT_WIDTHS,
        rows: vec![
            vec!["Project Name".into(), project.name.into()],
            vec!["Version".into(), project.version.into()],
            vec!["Vendor".into(), project.vendor.into()],
            vec!["Description".into(), project.description.into()],
            vec!["Project License".into(), project.license.into()],
            vec!["Report Date".into(), project.report_date.clone()],
            vec!["Report Version".into(), project.report_version.into()],
            vec![
                "Technology Stack".into(),
                "React 18, TypeScript, Vite, Tailwind CSS".into(),
            ],
            vec!["Build Tool".into(), "Vite 5.4.21".into()],
            vec!["Package Manager".into(), "npm".into()],
        ],
    }
}

fn license_table(report: &Report) -> TableData {
    TableData {
        columns: vec!["License Type", "Count", "Percentage"],
        widths: LICENSE_WIDTHS,
        rows: report
            .summary
            .license_distribution
            .iter()
            .map(|l| {
                vec![
                    l.license.clone(),
                    l.count.to_string(),
                    l.percentage_display(),
                ]
            })
            .collect(),
    }
}

/// Builds the full report body in its fixed emission order: table of
/// contents, then the eight numbered sections, each ending in a page break.
pub fn build_elements(report: &Report) -> Vec<Element> {
    use Element::*;

    let mut out = Vec::new();

    // Table of contents
    out.push(SectionHeading("TABLE OF CONTENTS".into()));
    for item in TOC_ITEMS {
        out.push(Paragraph((*item).into()));
    }
    out.push(PageBreak);

    // 1. Executive Summary
    out.push(SectionHeading("1. EXECUTIVE SUMMARY".into()));
    out.push(Paragraph(
        "This Software Bill of Materials (SBOM) report provides a comprehensive inventory of \
         all software components, dependencies, and third-party libraries used in the \
         CyberSoluce Asset Manager application. The report includes detailed information about \
         component versions, licenses, security considerations, and compliance status."
            .into(),
    ));
    out.push(Paragraph(format!(
        "The application is built using modern web technologies including React 18, \
         TypeScript, and Vite, with a total of {} dependencies identified. The majority of \
         components utilize permissive open-source licenses (primarily MIT), ensuring minimal \
         licensing restrictions for commercial use.",
        report.summary.total
    )));
    out.push(Paragraph("This SBOM is essential for:".into()));
    out.push(Bullet("Security vulnerability management and tracking".into()));
    out.push(Bullet("License compliance verification".into()));
    out.push(Bullet("Supply chain risk assessment".into()));
    out.push(Bullet(
        "Regulatory compliance (NIST, SOC 2, ISO 27001)".into(),
    ));
    out.push(Bullet("Incident response and forensic analysis".into()));
    out.push(Table(summary_table(report)));
    out.push(PageBreak);

    // 2. Project Information
    out.push(SectionHeading("2. PROJECT INFORMATION".into()));
    out.push(Table(project_table(report)));
    out.push(PageBreak);

    // 3. Component Inventory
    out.push(SectionHeading("3. COMPONENT INVENTORY".into()));
    out.push(Subheading("3.1 Production Dependencies".into()));
    out.push(Table(component_table(report.production())));
    out.push(PageBreak);
    out.push(Subheading("3.2 Development Dependencies".into()));
    out.push(Table(component_table(report.development())));
    out.push(PageBreak);

    // 4. License Information
    out.push(SectionHeading("4. LICENSE INFORMATION".into()));
    out.push(Paragraph(
        "This section provides an overview of the license types used across all dependencies. \
         Understanding license obligations is critical for legal compliance and commercial \
         deployment."
            .into(),
    ));
    out.push(Subheading("4.1 License Distribution".into()));
    out.push(Table(license_table(report)));
    out.push(Subheading("4.2 License Summary".into()));
    out.push(BoldLine("MIT License:".into()));
    out.push(Paragraph(
        "The majority of dependencies use the MIT license, which is a permissive open-source \
         license allowing commercial use, modification, distribution, and private use with \
         minimal restrictions. Only attribution is required."
            .into(),
    ));
    out.push(BoldLine("Apache-2.0 License:".into()));
    out.push(Paragraph(
        "Similar to MIT but includes patent grant provisions. Used by TypeScript, ESLint, and \
         XLSX libraries."
            .into(),
    ));
    out.push(BoldLine("ISC License:".into()));
    out.push(Paragraph(
        "Functionally equivalent to MIT, used by Lucide React icon library.".into(),
    ));
    out.push(Paragraph(
        "All licenses are compatible with commercial use and do not impose copyleft \
         requirements."
            .into(),
    ));
    out.push(PageBreak);

    // 5. Security & Vulnerability Assessment
    out.push(SectionHeading("5. SECURITY & VULNERABILITY ASSESSMENT".into()));
    out.push(Subheading("5.1 Vulnerability Management Process".into()));
    out.push(Paragraph(
        "Regular security scanning and vulnerability assessment should be performed using \
         tools such as:"
            .into(),
    ));
    out.push(Bullet("npm audit".into()));
    out.push(Bullet("Snyk".into()));
    out.push(Bullet("OWASP Dependency-Check".into()));
    out.push(Bullet("GitHub Dependabot".into()));
    out.push(Subheading("5.2 Recommended Actions".into()));
    out.push(Paragraph(
        "1. Automated Scanning: Implement continuous vulnerability scanning in CI/CD pipeline"
            .into(),
    ));
    out.push(Paragraph(
        "2. Dependency Updates: Regularly update dependencies to latest secure versions".into(),
    ));
    out.push(Paragraph(
        "3. Security Monitoring: Subscribe to security advisories for critical dependencies"
            .into(),
    ));
    out.push(Paragraph(
        "4. Patch Management: Establish process for rapid patching of critical vulnerabilities"
            .into(),
    ));
    out.push(Subheading("5.3 Critical Dependencies".into()));
    out.push(Paragraph(
        "The following dependencies require special attention due to their critical nature:"
            .into(),
    ));
    out.push(Bullet("React & React-DOM: Core framework components".into()));
    out.push(Bullet(
        "@supabase/supabase-js: Backend authentication and data access".into(),
    ));
    out.push(Bullet(
        "react-router-dom: Client-side routing and navigation".into(),
    ));
    out.push(Bullet(
        "jspdf & html2canvas: PDF generation capabilities".into(),
    ));
    out.push(Subheading("5.4 Known Vulnerabilities".into()));
    out.push(Note(
        "Note: This report should be updated with current vulnerability scan results. Run \
         'npm audit' to get the latest vulnerability information."
            .into(),
    ));
    out.push(PageBreak);

    // 6. Compliance & Risk Analysis
    out.push(SectionHeading("6. COMPLIANCE & RISK ANALYSIS".into()));
    out.push(Subheading("6.1 Regulatory Compliance".into()));
    out.push(Paragraph(
        "This SBOM supports compliance with the following frameworks:".into(),
    ));
    out.push(Bullet(
        "NIST Cybersecurity Framework: Asset inventory and supply chain risk management".into(),
    ));
    out.push(Bullet(
        "SOC 2: Vendor management and third-party risk assessment".into(),
    ));
    out.push(Bullet(
        "ISO 27001: Information security management system requirements".into(),
    ));
    out.push(Bullet(
        "Executive Order 14028: Software supply chain security requirements".into(),
    ));
    out.push(Subheading("6.2 Supply Chain Risk".into()));
    out.push(BoldLine("Low Risk Areas:".into()));
    out.push(Bullet(
        "Well-maintained open-source projects with active communities".into(),
    ));
    out.push(Bullet(
        "Established vendors (Meta/React, Vercel/Vite, Supabase)".into(),
    ));
    out.push(Bullet("Permissive licenses with minimal legal risk".into()));
    out.push(BoldLine("Medium Risk Areas:".into()));
    out.push(Bullet(
        "Dependencies with transitive dependencies (nested dependencies)".into(),
    ));
    out.push(Bullet(
        "Components with frequent updates requiring maintenance".into(),
    ));
    out.push(Bullet(
        "Third-party services (Supabase) requiring operational monitoring".into(),
    ));
    out.push(Subheading("6.3 Risk Mitigation Strategies".into()));
    out.push(Paragraph(
        "1. Maintain dependency lock files (package-lock.json) for reproducible builds".into(),
    ));
    out.push(Paragraph(
        "2. Implement dependency pinning for critical components".into(),
    ));
    out.push(Paragraph(
        "3. Regular security audits and dependency updates".into(),
    ));
    out.push(Paragraph(
        "4. Monitor dependency health and maintenance status".into(),
    ));
    out.push(Paragraph(
        "5. Maintain vendor relationships and support channels".into(),
    ));
    out.push(PageBreak);

    // 7. Recommendations
    out.push(SectionHeading("7. RECOMMENDATIONS".into()));
    out.push(Subheading("7.1 Immediate Actions".into()));
    out.push(Paragraph(
        "1. Establish automated SBOM generation in CI/CD pipeline".into(),
    ));
    out.push(Paragraph(
        "2. Integrate vulnerability scanning tools (npm audit, Snyk)".into(),
    ));
    out.push(Paragraph(
        "3. Create dependency update schedule (monthly/quarterly reviews)".into(),
    ));
    out.push(Paragraph(
        "4. Document dependency selection and approval process".into(),
    ));
    out.push(Subheading("7.2 Long-term Improvements".into()));
    out.push(Paragraph(
        "1. Implement Software Composition Analysis (SCA) tools".into(),
    ));
    out.push(Paragraph(
        "2. Establish security review process for new dependencies".into(),
    ));
    out.push(Paragraph(
        "3. Create dependency lifecycle management policy".into(),
    ));
    out.push(Paragraph(
        "4. Regular SBOM updates and distribution to stakeholders".into(),
    ));
    out.push(Paragraph(
        "5. Integration with security information and event management (SIEM)".into(),
    ));
    out.push(Subheading("7.3 Best Practices".into()));
    out.push(Bullet(
        "Keep dependencies up to date with security patches".into(),
    ));
    out.push(Bullet("Minimize dependency count where possible".into()));
    out.push(Bullet(
        "Prefer well-maintained, actively developed libraries".into(),
    ));
    out.push(Bullet("Review and understand license obligations".into()));
    out.push(Bullet(
        "Maintain comprehensive documentation of all dependencies".into(),
    ));
    out.push(Bullet("Regular security training for development team".into()));
    out.push(PageBreak);

    // 8. Appendices
    out.push(SectionHeading("8. APPENDICES".into()));
    out.push(Subheading("Appendix A: SBOM Format Standards".into()));
    out.push(Paragraph(
        "This report follows industry-standard SBOM formats including:".into(),
    ));
    out.push(Bullet("SPDX (Software Package Data Exchange)".into()));
    out.push(Bullet("CycloneDX".into()));
    out.push(Bullet("SWID (Software Identification) tags".into()));
    out.push(Subheading("Appendix B: Glossary".into()));
    out.push(Bullet(
        "SBOM: Software Bill of Materials - A nested inventory of software components".into(),
    ));
    out.push(Bullet(
        "Dependency: External library or package required by the application".into(),
    ));
    out.push(Bullet(
        "Transitive Dependency: A dependency of a dependency".into(),
    ));
    out.push(Bullet(
        "Vulnerability: A security flaw that could be exploited".into(),
    ));
    out.push(Bullet(
        "CVE: Common Vulnerabilities and Exposures identifier".into(),
    ));
    out.push(Subheading("Appendix C: Contact Information".into()));
    out.push(Paragraph(
        "For questions regarding this SBOM report, please contact:".into(),
    ));
    out.push(Bullet(format!("Vendor: {}", report.project.vendor)));
    out.push(Bullet(format!("Project: {}", report.project.name)));
    out.push(Bullet(format!(
        "Report Version: {}",
        report.project.report_version
    )));
    out.push(Bullet(format!("Report Date: {}", report.project.report_date)));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_numbered_sections_plus_toc() {
        let report = Report::assemble();
        let elements = build_elements(&report);
        let headings: Vec<&String> = elements
            .iter()
            .filter_map(|e| match e {
                Element::SectionHeading(t) => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(headings.len(), 9);
        assert_eq!(headings[0], "TABLE OF CONTENTS");
        assert_eq!(headings[1], "1. EXECUTIVE SUMMARY");
        assert_eq!(headings[8], "8. APPENDICES");
    }

    #[test]
    fn test_component_tables_row_counts() {
        let report = Report::assemble();
        let elements = build_elements(&report);
        let tables: Vec<&TableData> = elements
            .iter()
            .filter_map(|e| match e {
                Element::Table(t) => Some(t),
                _ => None,
            })
            .collect();
        // summary, project, production, development, license distribution
        assert_eq!(tables.len(), 5);
        assert_eq!(tables[2].rows.len(), 25);
        assert_eq!(tables[3].rows.len(), 16);
        assert_eq!(tables[4].rows.len(), report.summary.unique_licenses);
    }

    #[test]
    fn test_tables_fit_usable_page_width() {
        for widths in [
            SUMMARY_WIDTHS,
            PROJECT_WIDTHS,
            COMPONENT_WIDTHS,
            LICENSE_WIDTHS,
        ] {
            let total: f32 = widths.iter().sum();
            assert!(total <= 504.0, "table width {} exceeds usable width", total);
        }
    }

    #[test]
    fn test_every_table_row_matches_column_count() {
        let report = Report::assemble();
        for element in build_elements(&report) {
            if let Element::Table(table) = element {
                assert_eq!(table.columns.len(), table.widths.len());
                for row in &table.rows {
                    assert_eq!(row.len(), table.columns.len());
                }
            }
        }
    }

    #[test]
    fn test_page_breaks_separate_sections() {
        let report = Report::assemble();
        let elements = build_elements(&report);
        let breaks = elements
            .iter()
            .filter(|e| matches!(e, Element::PageBreak))
            .count();
        // TOC, sections 1-7, and the extra break between 3.1 and 3.2.
        assert_eq!(breaks, 9);
    }
}
