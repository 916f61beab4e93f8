use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use owo_colors::OwoColorize;

use sbom_report::cli::Args;
use sbom_report::error::{ExitCode, ReportError, Result};
use sbom_report::report::Report;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let report = Report::assemble();

    eprintln!("{}", args.format.progress_message());
    let formatter = args.format.create_formatter();
    let output = formatter.format(&report)?;

    let destination = args
        .output
        .as_deref()
        .or_else(|| args.format.default_output());

    match destination {
        Some(path) => {
            let path = PathBuf::from(path);
            write_report(&path, &output)?;
            eprintln!(
                "{} SBOM report generated successfully: {}",
                "✓".green(),
                path.display()
            );
        }
        None => {
            io::stdout()
                .write_all(&output)
                .map_err(|e| ReportError::FileWrite {
                    path: PathBuf::from("<stdout>"),
                    details: e.to_string(),
                })?;
        }
    }

    Ok(())
}

fn write_report(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(ReportError::FileWrite {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }
    std::fs::write(path, bytes).map_err(|e| {
        ReportError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_to_valid_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.pdf");
        write_report(&path, b"%PDF-1.7 test").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7 test");
    }

    #[test]
    fn test_write_report_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.pdf");
        let err = write_report(&path, b"data").unwrap_err();
        let display = format!("{}", err);
        assert!(display.contains("Parent directory does not exist"));
    }
}
