//! Rolling log file setup.

use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::{AppError, Result};

/// File name prefix; the daily appender adds the date suffix.
pub const LOG_FILE_PREFIX: &str = "rival-lens.log";

/// Open the daily rolling log file in `log_dir`, creating the directory first.
///
/// Fails instead of panicking when the directory cannot be created or written.
pub fn open_log_file(log_dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(log_dir)?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
        .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs").join("nested");
        assert!(open_log_file(&log_dir).is_ok());
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_open_log_file_under_regular_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let result = open_log_file(&blocker.join("logs"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
