//! jwalk-based walker.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, trace, warn};
use treescan_core::{DirId, NodeStore, ScanError, ScanStats, ScanWarning};

use super::{Walker, skip_or_abort};

/// Walker built on `jwalk` path handling.
///
/// Simpler than [`NativeWalker`](super::NativeWalker) but allocates a
/// full path for every entry and keeps one per directory to link children
/// to their parent node. Runs serially.
#[derive(Debug, Default, Clone, Copy)]
pub struct JwalkWalker;

impl Walker for JwalkWalker {
    fn walk(
        &self,
        root: &Path,
        store: &mut NodeStore,
        stats: &mut ScanStats,
    ) -> Result<(), ScanError> {
        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .sort(false)
            .process_read_dir(|_depth, _path, _state, children| {
                // Directories that can never be addressed are not descended into.
                for child in children.iter_mut().flatten() {
                    if child.file_name.to_str().is_none() {
                        child.read_children_path = None;
                    }
                }
            });

        let mut dirs: HashMap<PathBuf, DirId> = HashMap::new();
        dirs.insert(root.to_path_buf(), DirId::ROOT);

        for entry_result in walker {
            let mut entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let (path, error) = convert_error(err, root);
                    skip_or_abort(error, &path, stats)?;
                    continue;
                }
            };
            // A directory whose children could not be read still comes back
            // as an entry; the failure rides along with it.
            let read_error = entry.read_children_error.take();

            if entry.depth() == 0 {
                if let Some(err) = read_error {
                    let (path, error) = convert_error(err, root);
                    skip_or_abort(error, &path, stats)?;
                }
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                debug!(path = %entry.path().display(), "ignoring non UTF-8 name");
                stats.warn(ScanWarning::invalid_name(entry.path()));
                continue;
            };

            // Parents are yielded before their children.
            let Some(&parent) = dirs.get(entry.parent_path()) else {
                trace!(path = %entry.path().display(), "parent not indexed, skipping");
                continue;
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                let child = store.add_dir(parent, name)?;
                let path = entry.path();
                stats.record_dir();
                if let Some(err) = read_error {
                    let (path, error) = convert_error(err, &path);
                    skip_or_abort(error, &path, stats)?;
                    continue;
                }
                dirs.insert(path, child);
            } else if file_type.is_file() {
                let size = match entry.metadata() {
                    Ok(metadata) => metadata.len(),
                    Err(e) => {
                        let error = io::Error::other(e.to_string());
                        warn!(path = %entry.path().display(), error = %error, "cannot read metadata");
                        stats.warn(ScanWarning::metadata_error(entry.path(), &error));
                        0
                    }
                };
                store.add_file(parent, name, size)?;
                stats.record_file();
            } else {
                trace!(name, "ignoring special entry");
            }
        }

        Ok(())
    }
}

/// Turn a jwalk error into a path and a [`ScanError`] for the failure policy.
fn convert_error(err: jwalk::Error, fallback: &Path) -> (PathBuf, ScanError) {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf());
    let message = err.to_string();
    let error = io_error_to_scan(&path, err.into_io_error(), message);
    (path, error)
}

fn io_error_to_scan(path: &Path, source: Option<io::Error>, message: String) -> ScanError {
    match source {
        Some(source) => ScanError::io(path, source),
        None => ScanError::Io {
            path: path.to_path_buf(),
            source: io::Error::other(message),
        },
    }
}
