//! Directory scan engine and query index for treescan.
//!
//! A [`Scanner`] walks a root directory once, mirrors it in memory and then
//! answers repeated lookups without touching the filesystem again.
//!
//! # Overview
//!
//! - **One scan** at construction, breadth-first, never following symlinks
//! - **Two strategies** with identical results: a native `read_dir` loop
//!   that reuses one path buffer, and a `jwalk` traversal
//! - **Permission-denied subtrees** are skipped; any other failure leaves
//!   the scanner uninitialized
//! - **Queries never fail**: missing or malformed paths just find nothing
//!
//! # Example
//!
//! ```rust,no_run
//! use treescan_scan::Scanner;
//!
//! let scanner = Scanner::new("assets");
//! let report = scanner.get_report();
//! println!("{} files, {} folders", report.total_files, report.total_folders);
//!
//! if let Some(size) = scanner.get_file_size("textures/stone.png") {
//!     println!("stone.png: {size} bytes");
//! }
//! for shader in scanner.get_files_with_extension("shaders", "glsl") {
//!     println!("{}", shader.path);
//! }
//! ```
//!
//! # Choosing a strategy
//!
//! ```rust,no_run
//! use treescan_scan::{ScanConfig, Scanner, WalkStrategy};
//!
//! let config = ScanConfig::new("assets").with_strategy(WalkStrategy::Jwalk);
//! let scanner = Scanner::with_config(&config);
//! assert!(scanner.get_report().initialized);
//! ```

mod resolver;
mod scanner;
pub mod walker;

pub use resolver::PathResolver;
pub use scanner::Scanner;
pub use walker::{JwalkWalker, NativeWalker, Walker};

// Re-export core types for convenience
pub use treescan_core::{
    DirId, FILE_NOT_FOUND, FileId, FileInfo, NodeStore, ScanConfig, ScanError, ScanReport,
    ScanStats, ScanWarning, WalkStrategy, WarningKind,
};
