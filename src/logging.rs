//! Optional tracing output.
//!
//! The TUI owns stdout and stderr while it runs, so events only go to a
//! file, and only when one is configured.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

/// Install a global fmt subscriber writing plain text to `path`.
///
/// Truncates an existing file. Fails if the file cannot be created or a
/// global subscriber is already installed.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn events_land_in_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hangman.log");

        init_file_logging(&path).unwrap();
        tracing::info!(letter = %'Q', "log file smoke test");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log file smoke test"));
        assert!(contents.contains("letter=Q"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/hangman.log");
        assert!(init_file_logging(&path).is_err());
    }
}
