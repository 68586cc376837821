//! tormeta - building blocks for torrent metainfo construction
//!
//! The pieces a `.torrent` builder keeps in memory before anything is
//! hashed or written: the file list, the announce tiers, the native and wire
//! forms of the metainfo dictionary, and the chunked reader that feeds piece
//! hashing across file boundaries.
//!
//! # Modules
//!
//! - [`chunks`] - Fixed-size block reader with carry-over bytes
//! - [`scan`] - Filtered file enumeration and recursive size
//! - [`collections`] - Observable path, URL and tier lists
//! - [`codec`] - Native tree to wire tree conversion
//! - [`bencode`] - BEP-3 wire tree serialization
//! - [`uri`] - Validated URLs
//! - [`util`] - Small numeric and sequence helpers
//!
//! Nothing here installs a `tracing` subscriber; I/O boundaries emit
//! `debug`/`trace` events for the application to collect.

pub mod bencode;
pub mod chunks;
pub mod codec;
pub mod collections;
pub mod error;
pub mod scan;
pub mod uri;
pub mod util;

pub use bencode::{BencodeError, Value};
pub use chunks::{read_chunks, Chunks};
pub use codec::Native;
pub use collections::{ObservableList, PathEntry, PathList, TierInput, TierList, TierMut, UrlList};
pub use error::{ReadError, UrlError};
pub use scan::{filter_files, real_size, FilterOptions};
pub use uri::Url;
