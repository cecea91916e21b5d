//! Directory and file node types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::name;

/// Handle of a directory inside a [`NodeStore`](crate::NodeStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirId(pub u32);

impl DirId {
    /// The root directory of every store.
    pub const ROOT: DirId = DirId(0);

    /// Index into the store's directory arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle of a file inside a [`NodeStore`](crate::NodeStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(pub u32);

impl FileId {
    /// Index into the store's file arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A scanned directory.
///
/// `parent` is a back-reference only; the owning store holds every node.
#[derive(Debug)]
pub struct Directory {
    /// Final path segment. For the root this is the full root path.
    pub name: CompactString,
    /// Parent directory, `None` for the root.
    pub parent: Option<DirId>,
    /// Child directories in discovery order.
    pub dirs: Vec<DirId>,
    /// Child files in discovery order.
    pub files: Vec<FileId>,
}

impl Directory {
    pub(crate) fn new(name: impl Into<CompactString>, parent: Option<DirId>) -> Self {
        Self {
            name: name.into(),
            parent,
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Check if this is the root directory.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A scanned regular file.
#[derive(Debug)]
pub struct File {
    /// Name without the extension.
    pub stem: CompactString,
    /// Extension without the leading dot, possibly empty.
    pub extension: CompactString,
    /// Size in bytes at scan time.
    pub size: u64,
    /// Directory containing this file.
    pub parent: DirId,
}

impl File {
    pub(crate) fn new(file_name: &str, size: u64, parent: DirId) -> Self {
        let (stem, extension) = name::split_file_name(file_name);
        Self {
            stem: stem.into(),
            extension: extension.into(),
            size,
            parent,
        }
    }

    /// Full file name, `stem.extension` or just `stem`.
    pub fn full_name(&self) -> String {
        name::full_name(&self.stem, &self.extension)
    }

    /// Compare against a file name without building the full name.
    pub fn is_named(&self, file_name: &str) -> bool {
        name::matches_full_name(file_name, &self.stem, &self.extension)
    }
}
