use chrono::Local;
use serde::Serialize;

/// Metadata about the project the report describes.
///
/// Everything here is a literal constant except `report_date`, which is
/// captured once when the report run starts and stays fixed for the run.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub vendor: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub report_date: String,
    pub report_version: &'static str,
}

impl ProjectInfo {
    /// Project information with the report date stamped at call time.
    pub fn current() -> Self {
        Self {
            name: "CyberSoluce Asset Manager",
            version: "1.0.0",
            vendor: "ERMITS Corporation",
            description: "Comprehensive Asset Inventory Management Tool",
            license: "MIT",
            report_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            report_version: "1.0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_constants() {
        let info = ProjectInfo::current();
        assert_eq!(info.name, "CyberSoluce Asset Manager");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.vendor, "ERMITS Corporation");
        assert_eq!(info.license, "MIT");
        assert_eq!(info.report_version, "1.0");
    }

    #[test]
    fn test_report_date_format() {
        let info = ProjectInfo::current();
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(info.report_date.len(), 19);
        assert_eq!(&info.report_date[4..5], "-");
        assert_eq!(&info.report_date[10..11], " ");
        assert_eq!(&info.report_date[13..14], ":");
    }
}
