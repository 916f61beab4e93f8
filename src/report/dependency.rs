use serde::Serialize;

/// Whether a dependency ships with the application or only supports its build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Production,
    Development,
}

impl DependencyScope {
    pub fn label(&self) -> &'static str {
        match self {
            DependencyScope::Production => "Production",
            DependencyScope::Development => "Development",
        }
    }
}

/// A single third-party component in the inventory.
///
/// The version field is a semver range string as declared in the manifest,
/// and the license field is an SPDX-like identifier.
#[derive(Debug, Clone, Serialize)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
    pub license: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

const fn dep(
    name: &'static str,
    version: &'static str,
    license: &'static str,
    kind: &'static str,
) -> Dependency {
    Dependency {
        name,
        version,
        license,
        kind,
    }
}

/// Production dependencies of the CyberSoluce Asset Manager, as declared
/// in its package.json at the time this inventory was captured.
const PRODUCTION: &[Dependency] = &[
    dep("@nivo/core", "^0.99.0", "MIT", "Chart Library"),
    dep("@nivo/heatmap", "^0.99.0", "MIT", "Chart Library"),
    dep("@nivo/radar", "^0.99.0", "MIT", "Chart Library"),
    dep("@radix-ui/react-dialog", "^1.1.15", "MIT", "UI Component"),
    dep("@radix-ui/react-dropdown-menu", "^2.1.16", "MIT", "UI Component"),
    dep("@radix-ui/react-label", "^2.1.8", "MIT", "UI Component"),
    dep("@radix-ui/react-popover", "^1.1.15", "MIT", "UI Component"),
    dep("@radix-ui/react-select", "^2.2.6", "MIT", "UI Component"),
    dep("@radix-ui/react-slot", "^1.2.4", "MIT", "UI Component"),
    dep("@radix-ui/react-tooltip", "^1.2.8", "MIT", "UI Component"),
    dep("@supabase/supabase-js", "^2.53.0", "MIT", "Backend SDK"),
    dep("class-variance-authority", "^0.7.1", "MIT", "Utility"),
    dep("clsx", "^2.1.1", "MIT", "Utility"),
    dep("date-fns", "^3.0.0", "MIT", "Date Library"),
    dep("framer-motion", "^12.23.24", "MIT", "Animation Library"),
    dep("html2canvas", "^1.4.1", "MIT", "PDF Generation"),
    dep("jspdf", "^2.5.1", "MIT", "PDF Generation"),
    dep("lucide-react", "^0.344.0", "ISC", "Icon Library"),
    dep("react", "^18.3.1", "MIT", "Framework"),
    dep("react-dom", "^18.3.1", "MIT", "Framework"),
    dep("react-hot-toast", "^2.4.1", "MIT", "UI Component"),
    dep("react-router-dom", "^7.9.6", "MIT", "Routing"),
    dep("recharts", "^2.8.0", "MIT", "Chart Library"),
    dep("tailwind-merge", "^3.4.0", "MIT", "Utility"),
    dep("xlsx", "^0.18.5", "Apache-2.0", "File Processing"),
];

/// Development dependencies (build, test, and lint tooling).
const DEVELOPMENT: &[Dependency] = &[
    dep("@eslint/js", "^9.9.1", "Apache-2.0", "Linting"),
    dep("@testing-library/jest-dom", "^6.1.5", "MIT", "Testing"),
    dep("@testing-library/react", "^14.1.2", "MIT", "Testing"),
    dep("@testing-library/user-event", "^14.5.1", "MIT", "Testing"),
    dep("@types/node", "^24.10.1", "MIT", "Type Definitions"),
    dep("@types/react", "^18.3.27", "MIT", "Type Definitions"),
    dep("@types/react-dom", "^18.3.0", "MIT", "Type Definitions"),
    dep("@vitejs/plugin-react", "^4.7.0", "MIT", "Build Tool"),
    dep("@vitest/coverage-v8", "^1.0.4", "MIT", "Testing"),
    dep("autoprefixer", "^10.4.18", "MIT", "CSS Processing"),
    dep("eslint", "^9.9.1", "MIT", "Linting"),
    dep("postcss", "^8.4.35", "MIT", "CSS Processing"),
    dep("tailwindcss", "^3.4.1", "MIT", "CSS Framework"),
    dep("typescript", "^5.5.3", "Apache-2.0", "Language"),
    dep("vite", "^5.4.21", "MIT", "Build Tool"),
    dep("vitest", "^1.0.4", "MIT", "Testing"),
];

/// The catalog for one dependency scope.
pub fn catalog(scope: DependencyScope) -> &'static [Dependency] {
    match scope {
        DependencyScope::Production => PRODUCTION,
        DependencyScope::Development => DEVELOPMENT,
    }
}

pub fn production() -> &'static [Dependency] {
    catalog(DependencyScope::Production)
}

pub fn development() -> &'static [Dependency] {
    catalog(DependencyScope::Development)
}
