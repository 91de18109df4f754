use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

pub const DEFAULT_LOG_FILE: &str = "quiz_player.log";

/// Opens `path` for appending. Logging stays disabled if the file can't be opened.
pub fn init(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_without_init_is_silent() {
        log("dropped");
    }

    #[test]
    fn test_logger_init_and_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        init(&path);
        log("Test log message");
        // another test may have initialised the global logger first
        if let Ok(content) = std::fs::read_to_string(&path) {
            assert!(content.is_empty() || content.contains("Test log message"));
        }
    }
}
