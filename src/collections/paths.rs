use std::collections::HashSet;
use std::path::{self, Component, Path, PathBuf};

use super::observable::{ListKind, ObservableList};
use crate::error::ReadError;
use crate::scan::{filter_files, FilterOptions};

/// Deduplicated file paths.
///
/// A relative path and its absolute form name the same file, so only the
/// first one added is kept. Adding an existing directory adds every file
/// below it instead, in [`filter_files`] order.
///
/// ```
/// use std::path::Path;
/// use tormeta::PathList;
///
/// let mut paths = PathList::new(["content/a.txt", "content/b.txt"]).unwrap();
/// paths.append(std::path::absolute("content/a.txt").unwrap()).unwrap();
/// paths.append("content/./b.txt").unwrap();
/// assert_eq!(paths, ["content/a.txt", "content/b.txt"]);
/// assert_eq!(paths[0].path(), Path::new("content/a.txt"));
/// ```
pub type PathList = ObservableList<PathKind>;

/// [`ListKind`] of [`PathList`]: identity by resolved path, ordered equality.
#[derive(Debug)]
pub enum PathKind {}

/// One entry of a [`PathList`].
///
/// Keeps the path the way it was given next to its absolute, lexically
/// normalized form. Both are fixed when the entry is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathEntry {
    display: PathBuf,
    resolved: PathBuf,
}

impl PathEntry {
    /// Resolves `path` against the current directory without touching the
    /// filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ReadError> {
        let display = path.into();
        let absolute = path::absolute(&display).map_err(|e| ReadError::new(&display, e))?;
        Ok(Self {
            resolved: normalize(&absolute),
            display,
        })
    }

    /// The path as it was given.
    pub fn path(&self) -> &Path {
        &self.display
    }

    pub fn resolved(&self) -> &Path {
        &self.resolved
    }
}

impl AsRef<Path> for PathEntry {
    fn as_ref(&self) -> &Path {
        &self.display
    }
}

impl From<&PathEntry> for PathBuf {
    fn from(entry: &PathEntry) -> Self {
        entry.display.clone()
    }
}

impl From<PathEntry> for PathBuf {
    fn from(entry: PathEntry) -> Self {
        entry.display
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl ListKind for PathKind {
    type Item = PathEntry;
    type Input = PathBuf;
    type Error = ReadError;

    fn expand(input: PathBuf) -> Result<Vec<PathEntry>, ReadError> {
        if !input.is_dir() {
            return Ok(vec![PathEntry::new(input)?]);
        }

        let files = filter_files(&input, &FilterOptions::default())?;
        let base = path::absolute(&input).map_err(|e| ReadError::new(&input, e))?;
        tracing::debug!("Expanding directory {} into {} files", input.display(), files.len());

        files
            .into_iter()
            .map(|file| match file.strip_prefix(&base) {
                Ok(relative) => PathEntry::new(input.join(relative)),
                Err(_) => PathEntry::new(file),
            })
            .collect()
    }

    fn admit(existing: &[&PathEntry], incoming: Vec<PathEntry>) -> Vec<PathEntry> {
        let mut seen: HashSet<PathBuf> = existing
            .iter()
            .map(|entry| entry.resolved.clone())
            .collect();
        incoming
            .into_iter()
            .filter(|entry| seen.insert(entry.resolved.clone()))
            .collect()
    }

    fn list_eq(a: &[PathEntry], b: &[PathEntry]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.display == b.display)
    }
}

impl ObservableList<PathKind> {
    /// Removes the entry naming the same file as `path`. Returns whether one
    /// was found.
    pub fn remove_path(&mut self, path: impl AsRef<Path>) -> bool {
        let Ok(target) = PathEntry::new(path.as_ref()) else {
            return false;
        };
        self.remove_first(|entry| entry.resolved == target.resolved)
    }
}

impl<T: AsRef<Path>> PartialEq<[T]> for ObservableList<PathKind> {
    fn eq(&self, other: &[T]) -> bool {
        self.items.len() == other.len()
            && self
                .items
                .iter()
                .zip(other)
                .all(|(entry, path)| entry.path() == path.as_ref())
    }
}

impl<T: AsRef<Path>> PartialEq<Vec<T>> for ObservableList<PathKind> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: AsRef<Path>, const N: usize> PartialEq<[T; N]> for ObservableList<PathKind> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}
