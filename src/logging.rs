use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the platform-correct log file path.
///
/// Log output goes to a file because the game owns the terminal screen.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs a file logger at `level`, truncating any previous log.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    let file = create_log_file(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn create_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    File::create(path)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{create_log_file, default_log_path, LOG_FILE_NAME};

    #[test]
    fn default_path_ends_with_log_file_name() {
        let path = default_log_path();

        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some(LOG_FILE_NAME)
        );
    }

    #[test]
    fn log_file_creation_makes_parent_directories() {
        let path = unique_test_path("nested");

        create_log_file(&path).expect("log file should be creatable");
        assert!(path.exists());

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join(format!("grid-snake-log-tests-{label}-{nanos}"))
            .join("grid-snake.log")
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
