//! Recursive marker-file subdirectory discovery.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::spec::FsOpError;

/// Collect every directory at or below `base` that directly contains an
/// entry named `name_marker`.
///
/// A `base` that is not an existing directory yields an empty result. The
/// marker probe is existence-only: a directory with the marker name also
/// qualifies. Results are depth-first, parent before children, siblings in
/// listing order. A directory reached twice through symlinks is skipped.
pub fn find_subdirectories_containing<P: AsRef<Path>>(
    base: P,
    name_marker: &str,
) -> Result<Vec<PathBuf>, FsOpError> {
    let mut l_found = Vec::new();
    let mut set_visited_dirs: HashSet<(u64, u64)> = HashSet::new();
    walk_marker_directories(base.as_ref(), name_marker, &mut l_found, &mut set_visited_dirs)?;
    Ok(l_found)
}

fn walk_marker_directories(
    path_base: &Path,
    name_marker: &str,
    l_found: &mut Vec<PathBuf>,
    set_visited_dirs: &mut HashSet<(u64, u64)>,
) -> Result<(), FsOpError> {
    // Non-directory entries reached through recursion are no-ops.
    if !path_base.is_dir() {
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        let stat_base = fs::metadata(path_base).map_err(|e| FsOpError::InspectPathFailed {
            path: path_base.to_path_buf(),
            message: e.to_string(),
        })?;
        let tuple_dirs_identifier = (stat_base.dev(), stat_base.ino());
        if !set_visited_dirs.insert(tuple_dirs_identifier) {
            tracing::warn!("Symlink loop detected: {}", path_base.display());
            return Ok(());
        }
    }
    #[cfg(not(unix))]
    {
        let _ = &set_visited_dirs;
    }

    if path_base.join(name_marker).exists() {
        l_found.push(path_base.to_path_buf());
    }

    let iter_entries = fs::read_dir(path_base).map_err(|e| FsOpError::ListDirectoryFailed {
        path: path_base.to_path_buf(),
        message: e.to_string(),
    })?;
    for entry_res in iter_entries {
        let entry = entry_res.map_err(|e| FsOpError::ListDirectoryFailed {
            path: path_base.to_path_buf(),
            message: e.to_string(),
        })?;
        walk_marker_directories(&entry.path(), name_marker, l_found, set_visited_dirs)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::testutil::{TestDir, write_text};

    use super::find_subdirectories_containing;

    #[test]
    fn finds_marker_directories_parent_first() {
        let tmp = TestDir::new();
        write_text(&tmp.path().join("marker.txt"), "m");
        write_text(&tmp.path().join("a/marker.txt"), "m");
        std::fs::create_dir_all(tmp.path().join("b")).expect("create b");

        let l_found =
            find_subdirectories_containing(tmp.path(), "marker.txt").expect("discover");

        assert_eq!(l_found.len(), 2);
        assert_eq!(l_found[0], tmp.path());
        assert!(l_found.contains(&tmp.path().join("a")));
    }

    #[test]
    fn finds_markers_at_any_depth() {
        let tmp = TestDir::new();
        write_text(&tmp.path().join("a/b/c/marker.txt"), "m");

        let l_found =
            find_subdirectories_containing(tmp.path(), "marker.txt").expect("discover");
        assert_eq!(l_found, vec![tmp.path().join("a/b/c")]);
    }

    #[test]
    fn missing_base_yields_empty_result() {
        let tmp = TestDir::new();
        let l_found = find_subdirectories_containing(tmp.path().join("missing"), "marker.txt")
            .expect("discover");
        assert!(l_found.is_empty());
    }

    #[test]
    fn marker_named_directory_also_qualifies() {
        let tmp = TestDir::new();
        std::fs::create_dir_all(tmp.path().join("a/marker.txt")).expect("create marker dir");

        let l_found =
            find_subdirectories_containing(tmp.path(), "marker.txt").expect("discover");
        assert!(l_found.contains(&tmp.path().join("a")));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_skipped_instead_of_recursing() {
        use std::os::unix::fs::symlink;

        let tmp = TestDir::new();
        write_text(&tmp.path().join("marker.txt"), "m");
        symlink(tmp.path(), tmp.path().join("loop")).expect("create loop symlink");

        let l_found =
            find_subdirectories_containing(tmp.path(), "marker.txt").expect("discover");
        assert_eq!(l_found, vec![tmp.path().to_path_buf()]);
    }
}
