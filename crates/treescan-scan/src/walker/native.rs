//! Breadth-first `read_dir` walker.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::fs;
use std::path::{MAIN_SEPARATOR_STR, Path};

use tracing::{debug, trace, warn};
use treescan_core::{DirId, NodeStore, ScanError, ScanStats, ScanWarning};

use super::{Walker, skip_or_abort};

/// Walker driven by an explicit queue of pending directory handles.
///
/// The queue holds handles only. The OS path of each popped directory is
/// reassembled into a single reused buffer by following parent links, so
/// the walk allocates no path per entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeWalker;

impl Walker for NativeWalker {
    fn walk(
        &self,
        root: &Path,
        store: &mut NodeStore,
        stats: &mut ScanStats,
    ) -> Result<(), ScanError> {
        let mut pending = VecDeque::from([DirId::ROOT]);
        let mut chain: Vec<DirId> = Vec::with_capacity(32);
        let mut path = OsString::with_capacity(root.as_os_str().len() + 256);

        while let Some(dir) = pending.pop_front() {
            assemble_dir_path(&mut path, &mut chain, root, store, dir);
            let dir_path = Path::new(&path);

            let entries = match fs::read_dir(dir_path) {
                Ok(entries) => entries,
                Err(e) => {
                    skip_or_abort(ScanError::io(dir_path, e), dir_path, stats)?;
                    continue;
                }
            };

            for entry in entries {
                let entry = entry.map_err(|e| ScanError::io(dir_path, e))?;
                let file_type = entry
                    .file_type()
                    .map_err(|e| ScanError::io(entry.path(), e))?;

                let file_name = entry.file_name();
                let Some(name) = file_name.to_str() else {
                    debug!(path = %entry.path().display(), "ignoring non UTF-8 name");
                    stats.warn(ScanWarning::invalid_name(entry.path()));
                    continue;
                };

                if file_type.is_dir() {
                    let child = store.add_dir(dir, name)?;
                    pending.push_back(child);
                    stats.record_dir();
                } else if file_type.is_file() {
                    let size = match entry.metadata() {
                        Ok(metadata) => metadata.len(),
                        Err(e) => {
                            warn!(path = %entry.path().display(), error = %e, "cannot read metadata");
                            stats.warn(ScanWarning::metadata_error(entry.path(), &e));
                            0
                        }
                    };
                    store.add_file(dir, name, size)?;
                    stats.record_file();
                } else {
                    trace!(name, "ignoring special entry");
                }
            }
        }

        Ok(())
    }
}

/// Write `root/seg/.../seg` for `dir` into `buf`.
fn assemble_dir_path(
    buf: &mut OsString,
    chain: &mut Vec<DirId>,
    root: &Path,
    store: &NodeStore,
    dir: DirId,
) {
    chain.clear();
    let mut current = dir;
    while let Some(parent) = store.dir(current).parent {
        chain.push(current);
        current = parent;
    }

    buf.clear();
    buf.push(root.as_os_str());
    for &id in chain.iter().rev() {
        buf.push(MAIN_SEPARATOR_STR);
        buf.push(store.dir(id).name.as_str());
    }
}
