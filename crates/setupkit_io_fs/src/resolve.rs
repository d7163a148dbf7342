//! Path maximisation and directory reduction.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::spec::{EnumNamePattern, EnumPathSegment, FsOpError};
use crate::util::absolutize_lexical;

/// Extract the numeric rank of a candidate name.
///
/// The rank is the first contiguous run of ASCII digit or dot characters,
/// parsed as `f64`. A run that does not parse (for example `1.2.3`) yields
/// no rank.
pub fn extract_numeric_rank(name: &str) -> Option<f64> {
    let n_start = name.find(|c: char| c.is_ascii_digit() || c == '.')?;
    let c_run: String = name[n_start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    c_run.parse::<f64>().ok()
}

/// Order two candidate names by numeric rank, highest rank first.
///
/// A name with no extractable rank sorts after any ranked name; equal ranks
/// and two unranked names tie, and tie order is unspecified.
pub fn compare_numeric_rank(name_a: &str, name_b: &str) -> Ordering {
    match (extract_numeric_rank(name_a), extract_numeric_rank(name_b)) {
        (Some(n_a), Some(n_b)) => n_b.partial_cmp(&n_a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn best_candidate(
    path_dir: &Path,
    pattern: &EnumNamePattern,
) -> Result<Option<String>, FsOpError> {
    let iter_entries = fs::read_dir(path_dir).map_err(|e| FsOpError::ListDirectoryFailed {
        path: path_dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut l_candidates = Vec::new();
    for entry_res in iter_entries {
        let entry = entry_res.map_err(|e| FsOpError::ListDirectoryFailed {
            path: path_dir.to_path_buf(),
            message: e.to_string(),
        })?;
        let c_name = entry.file_name().to_string_lossy().to_string();
        // Only directory entries qualify, even when the pattern matches a
        // file name.
        if pattern.is_match(&c_name) && entry.path().is_dir() {
            l_candidates.push(c_name);
        }
    }

    l_candidates.sort_by(|a, b| compare_numeric_rank(a, b));
    Ok(l_candidates.into_iter().next())
}

/// Resolve `segments` into a concrete absolute path, preferring the
/// numerically highest directory match for each pattern segment.
///
/// Segment 0 anchors the path and is used verbatim; it must be a literal.
/// Each later segment is resolved only if the already-resolved prefix exists
/// as a directory; a missing prefix or an empty candidate set yields
/// `Ok(None)` with no partial result. Listing failures on an existing prefix
/// propagate. The final segment itself is not required to exist when it is a
/// literal.
pub fn maximise_path(segments: &[EnumPathSegment]) -> Result<Option<PathBuf>, FsOpError> {
    let Some(EnumPathSegment::Literal(c_anchor)) = segments.first() else {
        return Ok(None);
    };

    let mut l_resolved: Vec<String> = vec![c_anchor.clone()];
    for segment in &segments[1..] {
        let path_prefix = absolutize_lexical(&l_resolved.iter().collect::<PathBuf>());
        if !path_prefix.is_dir() {
            return Ok(None);
        }

        match segment {
            EnumPathSegment::Literal(c_part) => l_resolved.push(c_part.clone()),
            EnumPathSegment::Pattern(pattern) => {
                let Some(c_best) = best_candidate(&path_prefix, pattern)? else {
                    return Ok(None);
                };
                tracing::debug!(
                    "maximise_path resolved {} -> {c_best}",
                    path_prefix.display()
                );
                l_resolved.push(c_best);
            }
        }
    }

    Ok(Some(absolutize_lexical(
        &l_resolved.iter().collect::<PathBuf>(),
    )))
}

/// Return the first candidate that exists as a directory, in candidate
/// order, after absolutizing and normalizing each one.
pub fn reduce_first_existing_directory<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|candidate| absolutize_lexical(candidate.as_ref()))
        .find(|path_candidate| path_candidate.is_dir())
}
