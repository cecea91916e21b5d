//! Path segment codec.
//!
//! Stateless helpers shared by the scan engine and the path resolver. Query
//! paths are always `/`-separated and relative to the scanned root,
//! regardless of the host's separator conventions.

use std::borrow::Cow;

/// Separator used by every query path and every reconstructed path.
pub const SEPARATOR: char = '/';

/// Rewrite a host path so it uses [`SEPARATOR`] throughout.
///
/// `host_separator` is the platform's own separator, normally
/// [`std::path::MAIN_SEPARATOR`]. On hosts that already use `/` the input
/// is returned as is.
///
/// ```
/// use treescan_core::name::with_query_separators;
///
/// assert_eq!(with_query_separators(r"C:\data\assets", '\\'), "C:/data/assets");
/// assert_eq!(with_query_separators("/data/assets", '/'), "/data/assets");
/// ```
pub fn with_query_separators(path: &str, host_separator: char) -> Cow<'_, str> {
    if host_separator == SEPARATOR || !path.contains(host_separator) {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(path.replace(host_separator, "/"))
    }
}

/// Split a file name into its stem and extension.
///
/// The split happens at the last `.` only when that dot is neither the
/// first nor the last character of the name. Otherwise the whole name is
/// the stem and the extension is empty:
///
/// ```
/// use treescan_core::name::split_file_name;
///
/// assert_eq!(split_file_name("scanner.hxx"), ("scanner", "hxx"));
/// assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", "gz"));
/// assert_eq!(split_file_name(".gitignore"), (".gitignore", ""));
/// assert_eq!(split_file_name("c++"), ("c++", ""));
/// ```
///
/// A name with a lone trailing dot keeps the dot in the stem, so
/// `"notes."` becomes `("notes.", "")` rather than `("notes", "")`.
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < name.len() => (&name[..pos], &name[pos + 1..]),
        _ => (name, ""),
    }
}

/// Append `stem[.extension]` to `buf`.
pub fn push_full_name(buf: &mut String, stem: &str, extension: &str) {
    buf.push_str(stem);
    if !extension.is_empty() {
        buf.push('.');
        buf.push_str(extension);
    }
}

/// Join a stem and an extension back into a file name.
pub fn full_name(stem: &str, extension: &str) -> String {
    let mut buf = String::with_capacity(stem.len() + extension.len() + 1);
    push_full_name(&mut buf, stem, extension);
    buf
}

/// Check whether `name` equals `stem[.extension]` without allocating.
pub fn matches_full_name(name: &str, stem: &str, extension: &str) -> bool {
    if extension.is_empty() {
        return name == stem;
    }
    name.len() == stem.len() + 1 + extension.len()
        && name.starts_with(stem)
        && name.as_bytes()[stem.len()] == b'.'
        && name.ends_with(extension)
}

/// Split a query path into its parent directory part and file name part.
///
/// The split happens at the last `/` when it is not the first character.
/// A path without such a separator resolves against the root, and a
/// leading separator is kept in the file name so it never matches.
pub fn split_file_path(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATOR) {
        Some(pos) if pos > 0 => (&path[..pos], &path[pos + 1..]),
        _ => ("", path),
    }
}

/// Iterate over the segments of a directory query path.
///
/// An empty path yields nothing (the root). Empty segments produced by
/// doubled or trailing separators are yielded as-is; no directory has an
/// empty name, so such paths never resolve.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    (!path.is_empty())
        .then(|| path.split(SEPARATOR))
        .into_iter()
        .flatten()
}
