//! Pattern/segment models and operation error types.

use std::fmt;
use std::path::PathBuf;

use regex::Regex;

////////////////////////////////////////////////////////////////////////////////
// #region PatternsAndSegments

/// Matcher applied to a directory entry base name.
#[derive(Debug, Clone)]
pub enum EnumNamePattern {
    /// Substring containment against the base name.
    Literal(String),
    /// Regular expression tested against the base name.
    Regex(Regex),
}

impl EnumNamePattern {
    /// Whether `name_entry` satisfies this pattern.
    pub fn is_match(&self, name_entry: &str) -> bool {
        match self {
            Self::Literal(c_needle) => name_entry.contains(c_needle.as_str()),
            Self::Regex(re) => re.is_match(name_entry),
        }
    }
}

/// One element of a `maximise_path` call.
///
/// The first segment anchors the path and must be `Literal`; later segments
/// may be patterns resolved against the entries of the already-resolved
/// prefix directory.
#[derive(Debug, Clone)]
pub enum EnumPathSegment {
    /// Path component used verbatim. The caller supplies a well-formed
    /// segment string.
    Literal(String),
    /// Component resolved to the highest-ranked matching subdirectory name.
    Pattern(EnumNamePattern),
}

impl EnumPathSegment {
    /// Literal segment from any string-like value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Pattern segment from a compiled regular expression.
    pub fn regex(re: Regex) -> Self {
        Self::Pattern(EnumNamePattern::Regex(re))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Propagated filesystem operation failures (path + underlying error text).
///
/// "Nothing matched" outcomes of `maximise_path` and
/// `reduce_first_existing_directory` are not errors; they are reported as
/// `None`.
#[derive(Debug)]
pub enum FsOpError {
    /// Directory could not be listed.
    ListDirectoryFailed {
        /// Directory whose listing failed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Source file could not be read.
    ReadFileFailed {
        /// File whose read failed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Destination file could not be written.
    WriteFileFailed {
        /// File whose write failed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Entry could not be removed.
    RemoveFileFailed {
        /// Entry whose removal failed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Path metadata could not be inspected.
    InspectPathFailed {
        /// Path whose stat failed.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
}

impl fmt::Display for FsOpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListDirectoryFailed { path, message } => {
                write!(f, "Failed to list directory {}: {message}", path.display())
            }
            Self::ReadFileFailed { path, message } => {
                write!(f, "Failed to read file {}: {message}", path.display())
            }
            Self::WriteFileFailed { path, message } => {
                write!(f, "Failed to write file {}: {message}", path.display())
            }
            Self::RemoveFileFailed { path, message } => {
                write!(f, "Failed to remove {}: {message}", path.display())
            }
            Self::InspectPathFailed { path, message } => {
                write!(f, "Failed to inspect {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for FsOpError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::EnumNamePattern;

    #[test]
    fn literal_pattern_matches_by_containment() {
        let pattern = EnumNamePattern::Literal("report_".to_string());
        assert!(pattern.is_match("report_01.csv"));
        assert!(pattern.is_match("old_report_01.csv"));
        assert!(!pattern.is_match("summary.csv"));
    }

    #[test]
    fn regex_pattern_matches_full_rule() {
        let pattern = EnumNamePattern::Regex(Regex::new(r"^v\d+$").expect("regex"));
        assert!(pattern.is_match("v10"));
        assert!(!pattern.is_match("v10-beta"));
    }
}
