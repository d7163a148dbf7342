//! Existence checks and validating wrappers.

use std::path::Path;

/// True iff `path` exists and is a directory.
pub fn directory_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// True iff `path` exists and is a regular file.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Return [`directory_exists`], emitting one diagnostic line when false.
///
/// Absence is not a failure here; the diagnostic goes to the `tracing`
/// error channel and the caller must check the returned bool.
pub fn validate_directory<P: AsRef<Path>>(path: P, message: Option<&str>) -> bool {
    let path = path.as_ref();
    if directory_exists(path) {
        return true;
    }
    match message {
        Some(c_message) => tracing::error!("{c_message}"),
        None => tracing::error!(
            "Error validate_directory() the directory path is not valid {}",
            path.display()
        ),
    }
    false
}

/// Return [`file_exists`], emitting one diagnostic line when false.
pub fn validate_file<P: AsRef<Path>>(path: P, message: Option<&str>) -> bool {
    let path = path.as_ref();
    if file_exists(path) {
        return true;
    }
    match message {
        Some(c_message) => tracing::error!("{c_message}"),
        None => tracing::error!(
            "Error validate_file() the file path is not valid {}",
            path.display()
        ),
    }
    false
}
