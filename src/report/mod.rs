//! Domain model of the report: the static dependency inventory, project
//! metadata, computed summary statistics, and the section assembly.

mod dependency;
mod project;
pub mod sections;
mod summary;

pub use dependency::{catalog, development, production, Dependency, DependencyScope};
pub use project::ProjectInfo;
pub use summary::{LicenseCount, ReportSummary};

/// Everything a formatter needs to render the report.
#[derive(Debug, Clone)]
pub struct Report {
    pub project: ProjectInfo,
    pub summary: ReportSummary,
}

impl Report {
    /// Captures the report date and computes the summary statistics over
    /// the compiled-in catalogs.
    pub fn assemble() -> Self {
        Self {
            project: ProjectInfo::current(),
            summary: ReportSummary::compute(production(), development()),
        }
    }

    pub fn production(&self) -> &'static [Dependency] {
        production()
    }

    pub fn development(&self) -> &'static [Dependency] {
        development()
    }
}
