//! Tree building strategies.
//!
//! A [`Walker`] visits every directory below a root exactly once and
//! records what it finds in a [`NodeStore`]. Entries are classified as
//! directories, regular files, or ignored (symlinks, sockets, devices and
//! names that are not valid UTF-8). Symlinks are never followed.
//!
//! Failure policy, shared by every strategy: a directory that cannot be
//! opened because permission is denied is skipped with a warning and the
//! walk goes on; any other enumeration failure aborts the walk.

mod jwalker;
mod native;

use std::path::Path;

use tracing::warn;
use treescan_core::{NodeStore, ScanError, ScanStats, ScanWarning, WalkStrategy};

pub use self::jwalker::JwalkWalker;
pub use self::native::NativeWalker;

/// A directory traversal that populates a node store.
pub trait Walker {
    /// Walk everything below `root`, whose node is already the store's root.
    fn walk(&self, root: &Path, store: &mut NodeStore, stats: &mut ScanStats)
    -> Result<(), ScanError>;
}

/// Get the walker implementing a strategy.
pub fn walker_for(strategy: WalkStrategy) -> Box<dyn Walker> {
    match strategy {
        WalkStrategy::Native => Box::new(NativeWalker),
        WalkStrategy::Jwalk => Box::new(JwalkWalker),
    }
}

/// Apply the failure policy to a directory that could not be read.
///
/// Returns `Ok(())` when the subtree should be skipped.
fn skip_or_abort(error: ScanError, path: &Path, stats: &mut ScanStats) -> Result<(), ScanError> {
    if error.is_permission_denied() {
        warn!(path = %path.display(), "permission denied, skipping subtree");
        stats.warn(ScanWarning::permission_denied(path));
        Ok(())
    } else {
        Err(error)
    }
}
