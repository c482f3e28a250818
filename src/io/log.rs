use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

/// Maximum size of the event log before it is truncated and restarted (1 MB).
const MAX_LOG_SIZE: u64 = 1_048_576;

/// Append-only event log for swallowed errors.
///
/// Storage and config failures are caught at the call site and never shown
/// to the user (logout aside), so they land here instead. Logging failures
/// are themselves ignored.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(data_dir: &Path) -> EventLog {
        EventLog {
            path: data_dir.join("tempo.log"),
        }
    }

    /// Log an error with a short context string, e.g. "failed to save tasks"
    pub fn error(&self, context: &str, err: &dyn std::error::Error) {
        let _ = self.append(&format!("{}: {}", context, err));
    }

    /// Log a plain message
    pub fn info(&self, message: &str) {
        let _ = self.append(message);
    }

    fn append(&self, message: &str) -> io::Result<()> {
        // Start over when the log grows too large
        if let Ok(meta) = std::fs::metadata(&self.path)
            && meta.len() > MAX_LOG_SIZE
        {
            let _ = std::fs::remove_file(&self.path);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = format!("{} {}\n", Utc::now().to_rfc3339(), message);
        file.write_all(line.as_bytes())
    }
}
