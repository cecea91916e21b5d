//! Core types for treescan.
//!
//! This crate provides the data structures shared by the scan engine and
//! its callers: the node arena that mirrors a scanned directory tree, the
//! path segment codec, scan configuration, errors and query result types.

mod config;
mod error;
pub mod name;
mod node;
mod report;
mod store;

pub use config::{ScanConfig, ScanConfigBuilder, WalkStrategy};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use node::{DirId, Directory, File, FileId};
pub use report::{FILE_NOT_FOUND, FileInfo, ScanReport, ScanStats};
pub use store::NodeStore;
