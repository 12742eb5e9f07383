use crate::domain::ports::PriceLog;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Append-only text log of price observations, one line per successful
/// poll cycle: `[YYYY-MM-DD HH:MM:SS] Price: <price>`.
///
/// Write failures are swallowed: losing a log line must never interrupt
/// monitoring.
pub struct FilePriceLog {
    path: PathBuf,
}

impl FilePriceLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PriceLog for FilePriceLog {
    fn append(&self, timestamp: &str, price: f64) {
        let result = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "[{}] Price: {:.6}", timestamp, price));

        if let Err(e) = result {
            debug!("Price log write to {:?} failed: {}", self.path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_log_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("xmrwatch_{}_{}.txt", name, std::process::id()))
    }

    #[test]
    fn test_append_writes_formatted_line() {
        let path = temp_log_path("format");
        let _ = fs::remove_file(&path);

        let log = FilePriceLog::new(path.clone());
        log.append("2026-08-24 12:00:00", 161.2345);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[2026-08-24 12:00:00] Price: 161.234500\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_accumulates_lines() {
        let path = temp_log_path("accumulate");
        let _ = fs::remove_file(&path);

        let log = FilePriceLog::new(path.clone());
        log.append("2026-08-24 12:00:00", 100.0);
        log.append("2026-08-24 12:01:00", 111.0);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[2026-08-24 12:00:00] Price: 100.000000");
        assert_eq!(lines[1], "[2026-08-24 12:01:00] Price: 111.000000");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_failure_is_silent() {
        // A directory path cannot be opened for appending; this must not panic.
        let log = FilePriceLog::new(std::env::temp_dir());
        log.append("2026-08-24 12:00:00", 100.0);
    }
}
