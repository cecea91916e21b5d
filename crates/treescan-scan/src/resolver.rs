//! Translation between query paths and node handles.

use treescan_core::name::{self, SEPARATOR};
use treescan_core::{DirId, FileId, NodeStore};

/// Resolves `/`-separated paths against a scanned tree, and rebuilds
/// paths from nodes.
///
/// Name matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    store: &'a NodeStore,
}

impl<'a> PathResolver<'a> {
    pub fn new(store: &'a NodeStore) -> Self {
        Self { store }
    }

    /// Walk `path` segment by segment from the root. An empty path is the root.
    pub fn find_directory(&self, path: &str) -> Option<DirId> {
        name::segments(path).try_fold(DirId::ROOT, |dir, segment| {
            self.store.child_dir(dir, segment)
        })
    }

    /// Resolve the parent part of `path`, then match the file name part
    /// against its files. An empty file name never matches.
    pub fn find_file(&self, path: &str) -> Option<FileId> {
        let (dir_path, file_name) = name::split_file_path(path);
        if file_name.is_empty() {
            return None;
        }
        let dir = self.find_directory(dir_path)?;
        self.store
            .dir(dir)
            .files
            .iter()
            .copied()
            .find(|&id| self.store.file(id).is_named(file_name))
    }

    /// Rebuild the path of a directory: the root name followed by every
    /// segment below it. The root's own path is its name. Panics on a
    /// handle from another store.
    pub fn path_of_dir(&self, dir: DirId) -> String {
        let mut chain = Vec::new();
        let mut current = dir;
        while let Some(parent) = self.store.dir(current).parent {
            chain.push(self.store.dir(current).name.as_str());
            current = parent;
        }

        let mut path = self.root_prefix(chain.iter().map(|s| s.len() + 1).sum());
        for (i, segment) in chain.iter().rev().enumerate() {
            if i > 0 {
                path.push(SEPARATOR);
            }
            path.push_str(segment);
        }
        path
    }

    /// Rebuild the path of a file. Panics on a handle from another store.
    pub fn path_of_file(&self, file: FileId) -> String {
        let file = self.store.file(file);
        let mut path = self.path_of_dir(file.parent);
        path.reserve(file.stem.len() + file.extension.len() + 2);
        if !path.ends_with(SEPARATOR) {
            path.push(SEPARATOR);
        }
        name::push_full_name(&mut path, &file.stem, &file.extension);
        path
    }

    /// Root name, with a trailing separator when anything follows it.
    fn root_prefix(&self, tail_len: usize) -> String {
        let root = self.store.root().name.as_str();
        let mut path = String::with_capacity(root.len() + tail_len + 1);
        path.push_str(root);
        if tail_len > 0 && !root.ends_with(SEPARATOR) {
            path.push(SEPARATOR);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NodeStore {
        let mut store = NodeStore::new("/data/test-folder");
        let engine = store.add_dir(DirId::ROOT, "engine").unwrap();
        let src = store.add_dir(engine, "src").unwrap();
        let scanner = store.add_dir(src, "scanner").unwrap();
        let hidden = store.add_dir(scanner, "~.scanner").unwrap();
        store.add_file(src, "one.cxx", 0).unwrap();
        store.add_file(src, "one.hxx", 0).unwrap();
        store.add_file(hidden, ".gitignore", 295).unwrap();
        store.add_file(DirId::ROOT, "readme.md", 58).unwrap();
        store
    }

    #[test]
    fn test_find_directory() {
        let store = sample();
        let resolver = PathResolver::new(&store);

        assert_eq!(resolver.find_directory(""), Some(DirId::ROOT));
        let src = resolver.find_directory("engine/src").unwrap();
        assert_eq!(store.dir(src).name, "src");
        assert!(resolver.find_directory("engine/src/scanner/~.scanner").is_some());
        assert!(resolver.find_directory("engine/no_dir").is_none());
        assert!(resolver.find_directory("Engine").is_none());
        assert!(resolver.find_directory("engine//src").is_none());
        assert!(resolver.find_directory("engine/src/one.cxx").is_none());
        assert!(resolver.find_directory("./engine").is_none());
    }

    #[test]
    fn test_find_file() {
        let store = sample();
        let resolver = PathResolver::new(&store);

        assert!(resolver.find_file("readme.md").is_some());
        assert!(resolver.find_file("engine/src/one.cxx").is_some());
        assert!(resolver.find_file("engine/src/scanner/~.scanner/.gitignore").is_some());
        assert!(resolver.find_file("readme").is_none());
        assert!(resolver.find_file(".md").is_none());
        assert!(resolver.find_file("").is_none());
        assert!(resolver.find_file("engine/src/").is_none());
        assert!(resolver.find_file("/readme.md").is_none());
        assert!(resolver.find_file("engine/src").is_none());
    }

    #[test]
    fn test_path_of() {
        let store = sample();
        let resolver = PathResolver::new(&store);

        assert_eq!(resolver.path_of_dir(DirId::ROOT), "/data/test-folder");
        let src = resolver.find_directory("engine/src").unwrap();
        assert_eq!(resolver.path_of_dir(src), "/data/test-folder/engine/src");

        let file = resolver.find_file("engine/src/one.hxx").unwrap();
        assert_eq!(resolver.path_of_file(file), "/data/test-folder/engine/src/one.hxx");
        let file = resolver.find_file("readme.md").unwrap();
        assert_eq!(resolver.path_of_file(file), "/data/test-folder/readme.md");
    }

    #[test]
    fn test_path_of_under_filesystem_root() {
        let mut store = NodeStore::new("/");
        let etc = store.add_dir(DirId::ROOT, "etc").unwrap();
        let hosts = store.add_file(etc, "hosts", 10).unwrap();
        let top = store.add_file(DirId::ROOT, "swapfile", 10).unwrap();
        let resolver = PathResolver::new(&store);

        assert_eq!(resolver.path_of_dir(etc), "/etc");
        assert_eq!(resolver.path_of_file(hosts), "/etc/hosts");
        assert_eq!(resolver.path_of_file(top), "/swapfile");
    }

    #[test]
    fn test_round_trip() {
        let store = sample();
        let resolver = PathResolver::new(&store);
        let prefix = "/data/test-folder/";

        for id in store.file_ids() {
            let path = resolver.path_of_file(id);
            let relative = path.strip_prefix(prefix).unwrap();
            assert_eq!(resolver.find_file(relative), Some(id));
        }
        for id in store.dir_ids().skip(1) {
            let path = resolver.path_of_dir(id);
            let relative = path.strip_prefix(prefix).unwrap();
            assert_eq!(resolver.find_directory(relative), Some(id));
        }
    }
}
