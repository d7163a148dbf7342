//! `setupkit_io_fs` v1:
//! Synchronous filesystem helpers for setup and staging flows.
//!
//! - `check`    : existence checks and validating wrappers
//! - `copy`     : single-file copy and pattern-based batch operations
//! - `resolve`  : path maximisation and directory reduction
//! - `discover` : recursive marker-file discovery
//! - `spec`     : pattern/segment models and error types
//! - `util`     : shared helper functions

pub mod check;
pub mod copy;
pub mod discover;
pub mod resolve;
pub mod spec;
mod util;

#[cfg(test)]
mod testutil;

pub use check::{directory_exists, file_exists, validate_directory, validate_file};
pub use copy::{copy_file, copy_matching_files, delete_matching_files, replace_matching_files};
pub use discover::find_subdirectories_containing;
pub use resolve::{
    compare_numeric_rank, extract_numeric_rank, maximise_path, reduce_first_existing_directory,
};
pub use spec::{EnumNamePattern, EnumPathSegment, FsOpError};
