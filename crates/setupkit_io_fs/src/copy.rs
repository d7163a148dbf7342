//! Single-file copy and pattern-based batch operations.

use std::fs;
use std::path::Path;

use crate::spec::{EnumNamePattern, FsOpError};

/// Copy one file by reading the source fully and rewriting the destination.
///
/// The destination is overwritten unconditionally when present and created
/// when absent; its parent directory must already exist. The whole source is
/// buffered in memory, so this is not suitable for files larger than
/// available memory.
pub fn copy_file<P, Q>(file_source: P, file_destination: Q) -> Result<(), FsOpError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_file_src = file_source.as_ref();
    let path_file_dst = file_destination.as_ref();

    let raw_content = fs::read(path_file_src).map_err(|e| FsOpError::ReadFileFailed {
        path: path_file_src.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path_file_dst, raw_content).map_err(|e| FsOpError::WriteFileFailed {
        path: path_file_dst.to_path_buf(),
        message: e.to_string(),
    })
}

fn list_matching_names(
    path_dir: &Path,
    pattern: &EnumNamePattern,
) -> Result<Vec<String>, FsOpError> {
    let iter_entries = fs::read_dir(path_dir).map_err(|e| FsOpError::ListDirectoryFailed {
        path: path_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut l_names = Vec::new();
    for entry_res in iter_entries {
        let entry = entry_res.map_err(|e| FsOpError::ListDirectoryFailed {
            path: path_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let c_name = entry.file_name().to_string_lossy().to_string();
        if pattern.is_match(&c_name) {
            l_names.push(c_name);
        }
    }
    l_names.sort();
    Ok(l_names)
}

/// Copy every immediate entry of `dir_source` whose base name matches
/// `pattern` into `dir_destination` under the same base name.
///
/// Operates on a single directory level. Matching names are processed in
/// sorted order and the first failure halts the batch. A matching directory
/// entry is still attempted as a plain file copy and surfaces the resulting
/// read error.
pub fn copy_matching_files<P, Q>(
    pattern: &EnumNamePattern,
    dir_source: P,
    dir_destination: Q,
) -> Result<(), FsOpError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref();
    let path_dir_dst = dir_destination.as_ref();

    for c_name in list_matching_names(path_dir_src, pattern)? {
        copy_file(path_dir_src.join(&c_name), path_dir_dst.join(&c_name))?;
    }
    Ok(())
}

/// Remove every immediate entry of `dir` whose base name matches `pattern`.
///
/// Matching names are processed in sorted order and the first failure halts
/// the batch.
pub fn delete_matching_files<P: AsRef<Path>>(
    pattern: &EnumNamePattern,
    dir: P,
) -> Result<(), FsOpError> {
    let path_dir = dir.as_ref();

    for c_name in list_matching_names(path_dir, pattern)? {
        let path_entry = path_dir.join(&c_name);
        fs::remove_file(&path_entry).map_err(|e| FsOpError::RemoveFileFailed {
            path: path_entry.clone(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

/// Replace matching entries of `dir_destination` with those of `dir_source`.
///
/// Runs [`delete_matching_files`] on the destination, then
/// [`copy_matching_files`]. Not atomic: a copy-phase failure leaves
/// already-deleted matches missing from the destination.
pub fn replace_matching_files<P, Q>(
    pattern: &EnumNamePattern,
    dir_source: P,
    dir_destination: Q,
) -> Result<(), FsOpError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    delete_matching_files(pattern, dir_destination.as_ref())?;
    copy_matching_files(pattern, dir_source, dir_destination)
}
