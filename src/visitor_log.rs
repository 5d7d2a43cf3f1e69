//! Flat-file visitor log.
//!
//! Every successful login appends one record to a CSV file with the header
//! `name,timestamp`. Names containing a comma are double-quoted; timestamps
//! are RFC 3339 in UTC. The file and its parent directory are created on
//! first append.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const CSV_HEADER: &str = "name,timestamp\n";

/// One recorded visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorRecord {
    pub name: String,
    /// RFC 3339 timestamp of the login
    pub timestamp: String,
}

/// Append-only CSV visitor log at a fixed path.
pub struct VisitorLog {
    path: PathBuf,
}

impl VisitorLog {
    /// Creates a log handle for the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a log handle at the per-user data directory
    /// (`<data_dir>/tiledeck/visitors.csv`).
    pub fn default_location() -> Result<Self> {
        let data_dir = dirs::data_dir().context("no user data directory available")?;
        Ok(Self::new(data_dir.join("tiledeck").join("visitors.csv")))
    }

    /// Returns the path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a record for the given visitor, stamped with the current time.
    pub fn append(&self, name: &str) -> Result<()> {
        self.append_with_timestamp(name, &Utc::now().to_rfc3339())
    }

    fn append_with_timestamp(&self, name: &str, timestamp: &str) -> Result<()> {
        self.ensure_file()?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening visitor log {}", self.path.display()))?;
        writeln!(file, "{},{}", escape_name(name), timestamp)
            .context("appending visitor record")?;
        tracing::debug!(name, timestamp, "visitor recorded");
        Ok(())
    }

    /// Reads all records back, oldest first.
    ///
    /// Returns an empty list if the log file does not exist yet.
    pub fn records(&self) -> Result<Vec<VisitorRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading visitor log {}", self.path.display()))?;
        Ok(content
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(parse_line)
            .collect())
    }

    fn ensure_file(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
        }
        if !self.path.exists() {
            fs::write(&self.path, CSV_HEADER)
                .with_context(|| format!("creating visitor log {}", self.path.display()))?;
        }
        Ok(())
    }
}

/// Quotes a name when it contains a comma, otherwise returns it verbatim.
fn escape_name(name: &str) -> String {
    if name.contains(',') {
        format!("\"{}\"", name)
    } else {
        name.to_string()
    }
}

/// Parses one data line, honoring a quoted name.
fn parse_line(line: &str) -> VisitorRecord {
    if let Some(rest) = line.strip_prefix('"') {
        if let Some(close) = rest.find('"') {
            let name = rest[..close].to_string();
            let timestamp = rest[close + 1..].trim_start_matches(',').to_string();
            return VisitorRecord { name, timestamp };
        }
    }
    let (name, timestamp) = line.split_once(',').unwrap_or((line, ""));
    VisitorRecord {
        name: name.to_string(),
        timestamp: timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn first_append_creates_file_with_header() -> Result<()> {
        let dir = tempdir()?;
        let log = VisitorLog::new(dir.path().join("nested").join("visitors.csv"));

        log.append("Ada")?;

        let content = fs::read_to_string(log.path())?;
        assert!(content.starts_with("name,timestamp\n"));
        assert_eq!(content.lines().count(), 2);
        Ok(())
    }

    #[test]
    fn records_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let log = VisitorLog::new(dir.path().join("visitors.csv"));

        log.append("Ada")?;
        log.append("Grace")?;

        let records = log.records()?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ada");
        assert_eq!(records[1].name, "Grace");
        assert!(!records[0].timestamp.is_empty());
        Ok(())
    }

    #[test]
    fn comma_in_name_is_quoted_and_parsed_back() -> Result<()> {
        let dir = tempdir()?;
        let log = VisitorLog::new(dir.path().join("visitors.csv"));

        log.append("Lovelace, Ada")?;

        let raw = fs::read_to_string(log.path())?;
        assert!(raw.contains("\"Lovelace, Ada\","));

        let records = log.records()?;
        assert_eq!(records[0].name, "Lovelace, Ada");
        assert!(!records[0].timestamp.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_reads_as_empty() -> Result<()> {
        let dir = tempdir()?;
        let log = VisitorLog::new(dir.path().join("visitors.csv"));
        assert!(log.records()?.is_empty());
        Ok(())
    }

    #[test]
    fn timestamps_are_rfc3339() -> Result<()> {
        let dir = tempdir()?;
        let log = VisitorLog::new(dir.path().join("visitors.csv"));
        log.append("Ada")?;

        let records = log.records()?;
        assert!(chrono::DateTime::parse_from_rfc3339(&records[0].timestamp).is_ok());
        Ok(())
    }
}
