//! Arena owning every node of a scanned tree.

use compact_str::CompactString;

use crate::error::ScanError;
use crate::node::{DirId, Directory, File, FileId};

/// Owns all directories and files created by one scan.
///
/// Nodes refer to each other only through [`DirId`] and [`FileId`]
/// handles, so the parent relation never implies ownership. The root is
/// always [`DirId::ROOT`].
#[derive(Debug)]
pub struct NodeStore {
    dirs: Vec<Directory>,
    files: Vec<File>,
}

impl NodeStore {
    /// Create a store holding only the root directory.
    pub fn new(root_name: impl Into<CompactString>) -> Self {
        Self {
            dirs: vec![Directory::new(root_name, None)],
            files: Vec::new(),
        }
    }

    /// The root directory.
    pub fn root(&self) -> &Directory {
        &self.dirs[DirId::ROOT.index()]
    }

    /// Look up a directory. Panics on a handle from another store.
    pub fn dir(&self, id: DirId) -> &Directory {
        &self.dirs[id.index()]
    }

    /// Look up a file. Panics on a handle from another store.
    pub fn file(&self, id: FileId) -> &File {
        &self.files[id.index()]
    }

    /// Look up a directory, or `None` when the handle is not from this store.
    pub fn get_dir(&self, id: DirId) -> Option<&Directory> {
        self.dirs.get(id.index())
    }

    /// Look up a file, or `None` when the handle is not from this store.
    pub fn get_file(&self, id: FileId) -> Option<&File> {
        self.files.get(id.index())
    }

    /// All directories in creation order, root first.
    pub fn dirs(&self) -> &[Directory] {
        &self.dirs
    }

    /// All files in creation order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Iterate over directory handles in creation order, root first.
    pub fn dir_ids(&self) -> impl Iterator<Item = DirId> + '_ {
        (0..self.dirs.len() as u32).map(DirId)
    }

    /// Iterate over file handles in creation order.
    pub fn file_ids(&self) -> impl Iterator<Item = FileId> + '_ {
        (0..self.files.len() as u32).map(FileId)
    }

    /// Find a direct child directory by exact name.
    pub fn child_dir(&self, parent: DirId, name: &str) -> Option<DirId> {
        self.dir(parent)
            .dirs
            .iter()
            .copied()
            .find(|&id| self.dir(id).name == name)
    }

    /// Create a directory and link it under `parent`.
    pub fn add_dir(
        &mut self,
        parent: DirId,
        name: impl Into<CompactString>,
    ) -> Result<DirId, ScanError> {
        let id = DirId(next_index(self.dirs.len())?);
        self.dirs.push(Directory::new(name, Some(parent)));
        self.dirs[parent.index()].dirs.push(id);
        Ok(id)
    }

    /// Create a file and link it under `parent`.
    ///
    /// The name is split into stem and extension here.
    pub fn add_file(&mut self, parent: DirId, name: &str, size: u64) -> Result<FileId, ScanError> {
        let id = FileId(next_index(self.files.len())?);
        self.files.push(File::new(name, size, parent));
        self.dirs[parent.index()].files.push(id);
        Ok(id)
    }

    /// Number of directories below the root.
    pub fn folder_count(&self) -> usize {
        self.dirs.len() - 1
    }

    /// Number of files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

fn next_index(len: usize) -> Result<u32, ScanError> {
    u32::try_from(len).map_err(|_| ScanError::CapacityExceeded { nodes: len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NodeStore {
        let mut store = NodeStore::new("/scan/root");
        let game = store.add_dir(DirId::ROOT, "game").unwrap();
        store.add_dir(game, "game.bkp").unwrap();
        store.add_file(DirId::ROOT, "appveyor.yml", 43).unwrap();
        store.add_file(game, "game.cxx", 47).unwrap();
        store
    }

    #[test]
    fn test_new_store_has_root() {
        let store = NodeStore::new("/scan/root");
        assert_eq!(store.root().name, "/scan/root");
        assert!(store.root().is_root());
        assert_eq!(store.folder_count(), 0);
        assert_eq!(store.file_count(), 0);
    }

    #[test]
    fn test_links_children() {
        let store = sample();
        let game = store.child_dir(DirId::ROOT, "game").unwrap();
        assert_eq!(store.dir(game).parent, Some(DirId::ROOT));
        assert_eq!(store.dir(game).files.len(), 1);
        assert_eq!(store.dir(game).dirs.len(), 1);
        assert_eq!(store.root().files.len(), 1);
        assert_eq!(store.folder_count(), 2);
        assert_eq!(store.file_count(), 2);
    }

    #[test]
    fn test_foreign_handles_are_rejected() {
        let store = sample();
        assert!(store.get_dir(DirId(999)).is_none());
        assert!(store.get_file(FileId(999)).is_none());
        assert_eq!(store.get_dir(DirId::ROOT).map(|d| d.is_root()), Some(true));
        assert_eq!(store.dir_ids().count(), 3);
        assert_eq!(store.dir_ids().next(), Some(DirId::ROOT));
    }

    #[test]
    fn test_child_dir_is_exact() {
        let store = sample();
        assert!(store.child_dir(DirId::ROOT, "Game").is_none());
        assert!(store.child_dir(DirId::ROOT, "").is_none());
        assert!(store.child_dir(DirId::ROOT, "game.bkp").is_none());
    }

    #[test]
    fn test_files_keep_creation_order() {
        let store = sample();
        let names: Vec<_> = store.files().iter().map(|f| f.full_name()).collect();
        assert_eq!(names, ["appveyor.yml", "game.cxx"]);
        assert_eq!(store.file_ids().count(), 2);
    }
}
