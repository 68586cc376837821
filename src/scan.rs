//! Directory scanning for torrent content.
//!
//! [`filter_files`] enumerates the regular files below a path, applying the
//! hidden/empty/exclude policy in [`FilterOptions`], and [`real_size`] sums
//! their lengths.
//!
//! Only regular files count. Symbolic links below the root are neither
//! followed nor listed, so a link to a large file contributes nothing to
//! [`real_size`] and never appears in [`filter_files`] output. A root that is
//! itself a link is followed.
//!
//! # Examples
//!
//! ```
//! use tormeta::scan::{filter_files, real_size, FilterOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("movie.mkv"), b"frames")?;
//! std::fs::write(dir.path().join(".DS_Store"), b"junk")?;
//! std::fs::write(dir.path().join("empty.txt"), b"")?;
//!
//! let options = FilterOptions::new().hidden(false).empty(false);
//! let files = filter_files(dir.path(), &options)?;
//! assert_eq!(files, [dir.path().join("movie.mkv")]);
//!
//! assert_eq!(real_size(dir.path())?, 10);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::error::ReadError;

/// Which files [`filter_files`] keeps.
///
/// The default keeps everything.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    hidden: bool,
    empty: bool,
    exclude: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            hidden: true,
            empty: true,
            exclude: Vec::new(),
        }
    }
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to keep paths with a segment (below the root) starting with `.`.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Whether to keep zero-length files.
    pub fn empty(mut self, empty: bool) -> Self {
        self.empty = empty;
        self
    }

    /// Adds shell glob patterns (`*`, `?`, `[...]`).
    ///
    /// A path is dropped when any of its segments below the root matches any
    /// pattern. Matching is case-sensitive and `*` also matches a leading
    /// dot, so `".*"` excludes hidden paths.
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }

    fn matchers(&self) -> Vec<Exclude> {
        self.exclude.iter().map(|raw| Exclude::new(raw)).collect()
    }
}

/// A compiled exclude pattern. Patterns glob cannot compile match literally.
struct Exclude {
    raw: String,
    glob: Option<Pattern>,
}

impl Exclude {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            glob: Pattern::new(raw).ok(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match &self.glob {
            Some(glob) => glob.matches(name),
            None => self.raw == name,
        }
    }
}

/// Returns the absolute paths of the regular files at or below `root` that
/// pass `options`, sorted by their full path string.
///
/// # Errors
///
/// Returns the first entry that could not be read, including `root` itself.
pub fn filter_files(
    root: impl AsRef<Path>,
    options: &FilterOptions,
) -> Result<Vec<PathBuf>, ReadError> {
    let root = root.as_ref();
    fs::metadata(root).map_err(|e| ReadError::new(root, e))?;
    let base = std::path::absolute(root).map_err(|e| ReadError::new(root, e))?;

    let excludes = options.matchers();
    let keep = |entry: &DirEntry| {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        (options.hidden || !name.starts_with('.')) && !excludes.iter().any(|p| p.matches(&name))
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(&base)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep)
    {
        let entry = entry.map_err(|e| walk_error(&base, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        if !options.empty {
            let metadata = entry.metadata().map_err(|e| walk_error(entry.path(), e))?;
            if metadata.len() == 0 {
                tracing::trace!("Skipping empty file {}", entry.path().display());
                continue;
            }
        }

        files.push(entry.into_path());
    }

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    tracing::debug!("Found {} files under {}", files.len(), base.display());
    Ok(files)
}

/// Returns the size of a file, or the combined size of every regular file
/// below a directory.
///
/// # Errors
///
/// Fails with the first path that could not be read, e.g.
/// `"path/doesnt/exist: No such file or directory"`.
pub fn real_size(path: impl AsRef<Path>) -> Result<u64, ReadError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| ReadError::new(path, e))?;
    if !metadata.is_dir() {
        return Ok(metadata.len());
    }

    let mut total = 0;
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|e| walk_error(path, e))?;
        if entry.file_type().is_file() {
            total += entry
                .metadata()
                .map_err(|e| walk_error(entry.path(), e))?
                .len();
        }
    }

    tracing::trace!("{} holds {} bytes", path.display(), total);
    Ok(total)
}

fn walk_error(fallback: &Path, err: walkdir::Error) -> ReadError {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop"));
    ReadError::new(path, source)
}

#[cfg(test)]
mod tests;
