use std::collections::HashMap;

use serde::Serialize;

use super::dependency::Dependency;

/// One row of the license distribution table.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseCount {
    pub license: String,
    pub count: usize,
    pub percentage: f64,
}

impl LicenseCount {
    /// Percentage rendered to one decimal place, e.g. "90.2%".
    pub fn percentage_display(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Aggregate statistics over the two dependency catalogs.
///
/// This is the only computation in the program: counts plus a license
/// frequency tally.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub production: usize,
    pub development: usize,
    pub unique_licenses: usize,
    /// Sorted by count descending; ties broken by license name ascending
    /// so the output is deterministic.
    pub license_distribution: Vec<LicenseCount>,
}

impl ReportSummary {
    pub fn compute(production: &[Dependency], development: &[Dependency]) -> Self {
        let total = production.len() + development.len();

        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for dep in production.iter().chain(development) {
            *frequency.entry(dep.license).or_insert(0) += 1;
        }

        let mut license_distribution: Vec<LicenseCount> = frequency
            .into_iter()
            .map(|(license, count)| LicenseCount {
                license: license.to_string(),
                count,
                percentage: (count as f64 / total as f64) * 100.0,
            })
            .collect();
        license_distribution
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.license.cmp(&b.license)));

        Self {
            total,
            production: production.len(),
            development: development.len(),
            unique_licenses: license_distribution.len(),
            license_distribution,
        }
    }

    /// The most common license across both catalogs.
    pub fn primary_license(&self) -> &str {
        self.license_distribution
            .first()
            .map(|l| l.license.as_str())
            .unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::dependency::{development, production};

    #[test]
    fn test_total_is_sum_of_catalogs() {
        let summary = ReportSummary::compute(production(), development());
        assert_eq!(summary.total, summary.production + summary.development);
        assert_eq!(summary.total, 41);
        assert_eq!(summary.production, 25);
        assert_eq!(summary.development, 16);
    }

    #[test]
    fn test_license_counts_for_current_data() {
        let summary = ReportSummary::compute(production(), development());
        assert_eq!(summary.unique_licenses, 3);

        let mit = &summary.license_distribution[0];
        assert_eq!(mit.license, "MIT");
        assert_eq!(mit.count, 37);

        let apache = &summary.license_distribution[1];
        assert_eq!(apache.license, "Apache-2.0");
        assert_eq!(apache.count, 3);

        let isc = &summary.license_distribution[2];
        assert_eq!(isc.license, "ISC");
        assert_eq!(isc.count, 1);
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let summary = ReportSummary::compute(production(), development());
        let sum: f64 = summary
            .license_distribution
            .iter()
            .map(|l| l.percentage)
            .sum();
        // Each rendered row rounds to one decimal, so allow 0.1 per category.
        let tolerance = 0.1 * summary.license_distribution.len() as f64;
        assert!((sum - 100.0).abs() < tolerance, "sum was {}", sum);
    }

    #[test]
    fn test_distribution_ordering_is_deterministic() {
        let summary = ReportSummary::compute(production(), development());
        for pair in summary.license_distribution.windows(2) {
            assert!(
                pair[0].count > pair[1].count
                    || (pair[0].count == pair[1].count && pair[0].license < pair[1].license)
            );
        }
    }

    #[test]
    fn test_primary_license() {
        let summary = ReportSummary::compute(production(), development());
        assert_eq!(summary.primary_license(), "MIT");
    }

    #[test]
    fn test_percentage_display_rounds_to_one_decimal() {
        let count = LicenseCount {
            license: "MIT".to_string(),
            count: 37,
            percentage: 37.0 / 41.0 * 100.0,
        };
        assert_eq!(count.percentage_display(), "90.2%");
    }
}
