//! Scan statistics and query result types.

use std::time::Duration;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ScanWarning;

/// Size reported for a file that does not exist in the index.
pub const FILE_NOT_FOUND: u64 = u64::MAX;

/// Counters collected while building a tree.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Regular files recorded.
    pub total_files: u64,
    /// Directories recorded, root excluded.
    pub total_folders: u64,
    /// Non-fatal conditions met along the way.
    pub warnings: Vec<ScanWarning>,
}

impl ScanStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file.
    pub fn record_file(&mut self) {
        self.total_files += 1;
    }

    /// Record a directory.
    pub fn record_dir(&mut self) {
        self.total_folders += 1;
    }

    /// Record a warning.
    pub fn warn(&mut self, warning: ScanWarning) {
        self.warnings.push(warning);
    }
}

/// Summary of one completed or failed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Wall-clock duration of the scan.
    #[serde(rename = "scan_time_ms", serialize_with = "as_millis")]
    pub scan_time: Duration,
    /// Files found.
    pub total_files: u64,
    /// Directories found below the root.
    pub total_folders: u64,
    /// Whether the scan completed.
    pub initialized: bool,
}

impl ScanReport {
    /// Scan duration in whole milliseconds.
    pub fn scan_time_ms(&self) -> u128 {
        self.scan_time.as_millis()
    }
}

fn as_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// A file returned by a query: reconstructed path and size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    /// Root name followed by the `/`-joined path to the file.
    pub path: String,
    /// Size in bytes at scan time.
    pub size: u64,
}
