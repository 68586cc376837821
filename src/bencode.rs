//! The wire tree and its bencode serialization ([BEP-3]).
//!
//! [`Value`] is the byte-string keyed form a metainfo dictionary takes right
//! before it is written out: integers, raw byte strings, lists and
//! dictionaries with sorted byte-string keys. [`crate::codec`] converts it to
//! and from the native text/number form used in memory.
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` |
//! | Byte string | `<length>:<data>` | `4:spam` |
//! | List | `l<items>e` | `l4:spami42ee` |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` |
//!
//! # Examples
//!
//! ```
//! use tormeta::bencode::{decode, encode, Value};
//!
//! let value = Value::dict([
//!     ("announce", Value::string("http://tracker.example.com/announce")),
//!     ("creation date", Value::Integer(1700000000)),
//! ]);
//!
//! let bytes = encode(&value);
//! assert_eq!(
//!     bytes,
//!     b"d8:announce35:http://tracker.example.com/announce13:creation datei1700000000ee"
//! );
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, MAX_DEPTH};
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;
