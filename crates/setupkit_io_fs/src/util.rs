use std::path::{Component, Path, PathBuf};

////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

fn _absolutize_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

/// Absolutize `path` against the current directory, then drop `.` components
/// and resolve `..` lexically (no symlink resolution, no disk access).
pub(crate) fn absolutize_lexical(path: &Path) -> PathBuf {
    let path_abs = _absolutize_path(path);

    let mut path_out = PathBuf::new();
    for component in path_abs.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                path_out.pop();
            }
            _ => path_out.push(component.as_os_str()),
        }
    }
    path_out
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
