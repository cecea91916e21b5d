//! Read-only query façade over a scanned directory tree.

use std::env;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, info};
use treescan_core::name::with_query_separators;
use treescan_core::{
    DirId, FILE_NOT_FOUND, FileId, FileInfo, NodeStore, ScanConfig, ScanError, ScanReport,
    ScanStats, ScanWarning,
};

use crate::resolver::PathResolver;
use crate::walker::walker_for;

/// In-memory mirror of a directory tree, scanned once at construction.
///
/// Every query after construction is answered from memory. Query paths are
/// `/`-separated and relative to the root, without a leading separator.
///
/// A scanner whose root does not exist, or whose scan failed, is still
/// usable: [`get_report`](Self::get_report) shows `initialized == false`
/// and every query returns nothing.
///
/// Not `Clone`; move it instead.
#[derive(Debug)]
pub struct Scanner {
    store: NodeStore,
    report: ScanReport,
    warnings: Vec<ScanWarning>,
}

impl Scanner {
    /// Scan `root` with the default strategy.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_config(&ScanConfig::new(root.as_ref()))
    }

    /// Scan according to `config`.
    pub fn with_config(config: &ScanConfig) -> Self {
        let root = match resolve_root(&config.root) {
            Ok(root) => root,
            Err(e) => {
                error!(error = %e, "cannot resolve scan root");
                return Self::uninitialized(root_name_of(&config.root), Vec::new());
            }
        };
        let root_name = root_name_of(&root);

        if !root.exists() {
            debug!(root = %root_name, "scan root does not exist");
            return Self::uninitialized(root_name, Vec::new());
        }

        let start = Instant::now();
        let mut store = NodeStore::new(root_name.as_str());
        let mut stats = ScanStats::new();

        let result = if root.is_dir() {
            walker_for(config.strategy).walk(&root, &mut store, &mut stats)
        } else {
            Err(ScanError::NotADirectory { path: root.clone() })
        };

        if let Err(e) = result {
            error!(root = %root_name, error = %e, "scan aborted");
            return Self::uninitialized(root_name, stats.warnings);
        }

        let report = ScanReport {
            scan_time: start.elapsed(),
            total_files: stats.total_files,
            total_folders: stats.total_folders,
            initialized: true,
        };
        info!(
            root = %root_name,
            files = report.total_files,
            folders = report.total_folders,
            elapsed_ms = report.scan_time_ms() as u64,
            warnings = stats.warnings.len(),
            "scan complete"
        );

        Self {
            store,
            report,
            warnings: stats.warnings,
        }
    }

    fn uninitialized(root_name: impl AsRef<str>, warnings: Vec<ScanWarning>) -> Self {
        Self {
            store: NodeStore::new(root_name.as_ref()),
            report: ScanReport::default(),
            warnings,
        }
    }

    /// Size of the file at `path`, or `None` when no such file was scanned.
    pub fn get_file_size(&self, path: &str) -> Option<u64> {
        self.find_file(path).map(|id| self.store.file(id).size)
    }

    /// Size of the file at `path`, or [`FILE_NOT_FOUND`].
    pub fn get_file_size_or_sentinel(&self, path: &str) -> u64 {
        self.get_file_size(path).unwrap_or(FILE_NOT_FOUND)
    }

    /// Whether a regular file exists at `path`. Directories do not count.
    pub fn is_file_exists(&self, path: &str) -> bool {
        self.find_file(path).is_some()
    }

    /// Files directly inside `dir` whose extension equals `extension`.
    ///
    /// The extension is given without a dot; an empty one selects files
    /// that have no extension.
    pub fn get_files_with_extension(&self, dir: &str, extension: &str) -> Vec<FileInfo> {
        self.collect_in(dir, |id| self.store.file(id).extension == extension)
    }

    /// Files directly inside `dir` whose stem equals `stem`. An empty stem
    /// matches nothing.
    pub fn get_files_with_name(&self, dir: &str, stem: &str) -> Vec<FileInfo> {
        if stem.is_empty() {
            return Vec::new();
        }
        self.collect_in(dir, |id| self.store.file(id).stem == stem)
    }

    /// All files directly inside `dir`.
    pub fn get_files(&self, dir: &str) -> Vec<FileInfo> {
        self.collect_in(dir, |_| true)
    }

    /// Every file below the root, in scan order.
    pub fn get_all_files(&self) -> Vec<FileInfo> {
        self.store.file_ids().map(|id| self.file_info(id)).collect()
    }

    /// Statistics of the scan.
    pub fn get_report(&self) -> ScanReport {
        self.report
    }

    /// Resolve a directory path to its node.
    pub fn find_directory(&self, path: &str) -> Option<DirId> {
        if !self.report.initialized {
            return None;
        }
        self.resolver().find_directory(path)
    }

    /// Resolve a file path to its node.
    pub fn find_file(&self, path: &str) -> Option<FileId> {
        if !self.report.initialized {
            return None;
        }
        self.resolver().find_file(path)
    }

    /// Full path of a directory node, or `None` for a handle this scanner
    /// did not produce.
    pub fn path_of_dir(&self, dir: DirId) -> Option<String> {
        self.store.get_dir(dir)?;
        Some(self.resolver().path_of_dir(dir))
    }

    /// Full path of a file node, or `None` for a handle this scanner did
    /// not produce.
    pub fn path_of_file(&self, file: FileId) -> Option<String> {
        self.store.get_file(file)?;
        Some(self.resolver().path_of_file(file))
    }

    /// The absolute root path every result path starts with.
    pub fn root_name(&self) -> &str {
        &self.store.root().name
    }

    /// Non-fatal conditions met during the scan, such as skipped subtrees.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    /// The underlying node arena.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.store)
    }

    fn file_info(&self, id: FileId) -> FileInfo {
        FileInfo {
            path: self.resolver().path_of_file(id),
            size: self.store.file(id).size,
        }
    }

    fn collect_in(&self, dir: &str, mut keep: impl FnMut(FileId) -> bool) -> Vec<FileInfo> {
        let Some(dir) = self.find_directory(dir) else {
            return Vec::new();
        };
        self.store
            .dir(dir)
            .files
            .iter()
            .copied()
            .filter(|&id| keep(id))
            .map(|id| self.file_info(id))
            .collect()
    }
}

/// Make `root` absolute against the working directory and drop trailing
/// separators and `.` segments.
fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|source| ScanError::WorkingDirectory { source })?
            .join(root)
    };
    Ok(absolute.components().collect())
}

/// Root path as it prefixes result paths, `/`-separated on every host.
fn root_name_of(root: &Path) -> String {
    with_query_separators(&root.to_string_lossy(), MAIN_SEPARATOR).into_owned()
}
