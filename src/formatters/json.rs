use serde::Serialize;

use crate::error::Result;
use crate::report::{Dependency, ProjectInfo, Report, ReportSummary};

use super::ReportFormatter;

/// Serialized shape of the JSON output: project metadata, the computed
/// summary, and both catalogs. This is a plain inventory document, not a
/// CycloneDX or SPDX SBOM.
#[derive(Serialize)]
struct InventoryDocument<'a> {
    project: &'a ProjectInfo,
    summary: &'a ReportSummary,
    production: &'a [Dependency],
    development: &'a [Dependency],
}

/// Renders the report as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<Vec<u8>> {
        let document = InventoryDocument {
            project: &report.project,
            summary: &report.summary,
            production: report.production(),
            development: report.development(),
        };
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn render() -> Value {
        let report = Report::assemble();
        let bytes = JsonFormatter::new().format(&report).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_catalog_lengths() {
        let doc = render();
        assert_eq!(doc["production"].as_array().unwrap().len(), 25);
        assert_eq!(doc["development"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn test_summary_fields() {
        let doc = render();
        assert_eq!(doc["summary"]["total"], 41);
        assert_eq!(doc["summary"]["unique_licenses"], 3);
        assert_eq!(doc["summary"]["license_distribution"][0]["license"], "MIT");
    }

    #[test]
    fn test_project_fields() {
        let doc = render();
        assert_eq!(doc["project"]["name"], "CyberSoluce Asset Manager");
        assert_eq!(doc["project"]["vendor"], "ERMITS Corporation");
        assert!(doc["project"]["report_date"].as_str().is_some());
    }

    #[test]
    fn test_dependency_record_shape() {
        let doc = render();
        let first = &doc["production"][0];
        for field in ["name", "version", "license", "type"] {
            assert!(
                first[field].as_str().map(|s| !s.is_empty()).unwrap_or(false),
                "missing field {}",
                field
            );
        }
    }
}
