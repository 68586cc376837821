//! Fixed-size chunked file reading.
//!
//! Piece hashes cover a torrent's content as one continuous stream, so a
//! piece frequently starts in one file and ends in the next. [`read_chunks`]
//! re-segments a single file into `chunk_size` blocks, optionally prefixed
//! with the carry-over bytes left unhashed at the end of the previous file.
//!
//! # Examples
//!
//! ```
//! use tormeta::read_chunks;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("file");
//! std::fs::write(&path, b"abcde")?;
//!
//! let chunks = read_chunks(&path, 2, b"123")?.collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(chunks, [&b"12"[..], b"3a", b"bc", b"de"]);
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::ReadError;

/// Opens `path` and returns an iterator over `prepend ++ contents` in blocks
/// of `chunk_size` bytes.
///
/// Every block is exactly `chunk_size` bytes long except the last, which may
/// be shorter. Nothing is yielded when both `prepend` and the file are empty.
///
/// # Errors
///
/// Fails immediately if the file cannot be opened.
///
/// # Panics
///
/// Panics if `chunk_size` is 0.
pub fn read_chunks(
    path: impl AsRef<Path>,
    chunk_size: usize,
    prepend: &[u8],
) -> Result<Chunks, ReadError> {
    assert!(chunk_size != 0, "chunk size must be non-zero");

    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ReadError::new(path, e))?;
    tracing::trace!(
        "Reading {} in blocks of {} bytes",
        path.display(),
        chunk_size
    );

    Ok(Chunks {
        path: path.to_path_buf(),
        file: Some(file),
        chunk_size,
        carry: BytesMut::from(prepend),
    })
}

/// Lazy block iterator returned by [`read_chunks`].
///
/// The underlying file is closed as soon as it is exhausted, on the first
/// read error, or when the iterator is dropped.
#[derive(Debug)]
pub struct Chunks {
    path: PathBuf,
    file: Option<File>,
    chunk_size: usize,
    carry: BytesMut,
}

impl Chunks {
    /// Tops the carry buffer up to one full block, closing the file at EOF.
    ///
    /// The buffer only grows by what the file actually delivers, so a block
    /// size far larger than the file costs nothing up front.
    fn fill(&mut self) -> io::Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        let need = (self.chunk_size - self.carry.len()) as u64;
        let mut sink = (&mut self.carry).writer();
        let read = io::copy(&mut file.by_ref().take(need), &mut sink)?;

        if read < need {
            self.file = None;
        }
        Ok(())
    }
}

impl Iterator for Chunks {
    type Item = Result<Bytes, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.carry.len() < self.chunk_size {
            if let Err(e) = self.fill() {
                self.file = None;
                self.carry.clear();
                return Some(Err(ReadError::new(&self.path, e)));
            }
        }

        if self.carry.is_empty() {
            return None;
        }

        let take = self.chunk_size.min(self.carry.len());
        Some(Ok(self.carry.split_to(take).freeze()))
    }
}

impl std::iter::FusedIterator for Chunks {}
