//! Saving reports to disk

use relief_domain::{ReliefSession, Report};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while saving a report
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No report to save yet. Generate one first.")]
    NoReport,

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the markdown document of a report to a file
pub struct ReportExporter;

impl ReportExporter {
    /// Write `report` to `path`, creating parent directories.
    ///
    /// The file holds exactly [`Report::markdown`], with nothing added.
    pub fn save(report: &Report, path: &Path) -> Result<PathBuf, ExportError> {
        let io_err = |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, report.markdown().as_bytes()).map_err(io_err)?;

        info!("Saved report ({} bytes) to {}", report.markdown().len(), path.display());
        Ok(path.to_path_buf())
    }

    /// Save the session's last report, if there is one.
    pub fn save_last(session: &ReliefSession, path: &Path) -> Result<PathBuf, ExportError> {
        let report = session.last_report().ok_or(ExportError::NoReport)?;
        Self::save(report, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::console::ConsoleFormatter;
    use relief_domain::{Credentials, ImageReference, Paragraph, ReportBlock};

    fn sample_report() -> Report {
        Report::from_blocks(vec![
            ReportBlock::new(
                Paragraph::new("Breathe in.\nBreathe out."),
                ImageReference::new("https://media.giphy.com/media/x/giphy.gif"),
            ),
            ReportBlock::new(
                Paragraph::new("Café breaks count too."),
                ImageReference::new("https://media.giphy.com/media/y/giphy.gif"),
            ),
        ])
    }

    #[test]
    fn test_saved_bytes_equal_displayed_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stress_relief_report.md");
        let report = sample_report();

        ReportExporter::save(&report, &path).unwrap();

        let saved = std::fs::read(&path).unwrap();
        assert_eq!(saved, ConsoleFormatter::format_markdown(&report).into_bytes());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/today/relief.md");
        let written = ReportExporter::save(&sample_report(), &path).unwrap();
        assert_eq!(written, path);
        assert!(path.exists());
    }

    #[test]
    fn test_save_last_without_report() {
        let dir = tempfile::tempdir().unwrap();
        let session = ReliefSession::new(Credentials::new());
        let err = ReportExporter::save_last(&session, &dir.path().join("r.md")).unwrap_err();
        assert!(matches!(err, ExportError::NoReport));
    }

    #[test]
    fn test_save_last_with_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.md");
        let mut session = ReliefSession::new(Credentials::new());
        session.store_report(sample_report());

        ReportExporter::save_last(&session, &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            sample_report().markdown()
        );
    }
}
