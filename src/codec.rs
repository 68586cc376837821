//! Conversion between the native tree and the wire tree.
//!
//! Metainfo is assembled in memory as [`Native`] values (text, integers,
//! lists, text-keyed maps) and lowered with [`encode`] to the byte-string
//! keyed [`Value`] tree that [`crate::bencode`] serializes. [`decode`] goes
//! the other way.
//!
//! `decode(&encode(&x)) == x` holds for any tree built from text, integers,
//! lists and maps. Floats (truncated to integers) and values entered through
//! [`Native::display`] do not survive the trip.
//!
//! # Examples
//!
//! ```
//! use tormeta::bencode::Value;
//! use tormeta::codec::{decode, encode, Native};
//!
//! let info = Native::map([
//!     ("name", Native::from("example")),
//!     ("piece length", Native::from(16384)),
//!     ("ratio", Native::from(17.3)),
//!     ("tiers", Native::from((1, "two", 0i64..3))),
//! ]);
//!
//! let wire = encode(&info);
//! assert_eq!(wire.get(b"name"), Some(&Value::string("example")));
//! assert_eq!(wire.get(b"ratio"), Some(&Value::Integer(17)));
//!
//! let back = decode(&wire);
//! assert_eq!(back.get("tiers").and_then(Native::as_list).map(<[_]>::len), Some(3));
//! ```

mod native;

use bytes::Bytes;

use crate::bencode::Value;

pub use native::Native;

/// Lowers a native tree to the wire tree.
///
/// Text becomes UTF-8 byte strings, map keys become byte-string keys and
/// floats are truncated toward zero.
pub fn encode(native: &Native) -> Value {
    match native {
        Native::Text(s) => Value::string(s),
        Native::Int(i) => Value::Integer(*i),
        Native::Float(f) => Value::Integer(f.trunc() as i64),
        Native::Bytes(b) => Value::Bytes(Bytes::copy_from_slice(b)),
        Native::List(items) => Value::List(items.iter().map(encode).collect()),
        Native::Map(entries) => Value::Dict(
            entries
                .iter()
                .map(|(k, v)| (Bytes::copy_from_slice(k.as_bytes()), encode(v)))
                .collect(),
        ),
    }
}

/// Lifts a wire tree to the native tree.
///
/// Byte strings that are valid UTF-8 become text and all others stay
/// [`Native::Bytes`]. Dictionary keys are always text; invalid UTF-8 in a key
/// is replaced with U+FFFD.
pub fn decode(value: &Value) -> Native {
    match value {
        Value::Integer(i) => Native::Int(*i),
        Value::Bytes(b) => match std::str::from_utf8(b) {
            Ok(s) => Native::Text(s.to_string()),
            Err(_) => Native::Bytes(b.to_vec()),
        },
        Value::List(items) => Native::List(items.iter().map(decode).collect()),
        Value::Dict(entries) => Native::Map(
            entries
                .iter()
                .map(|(k, v)| (String::from_utf8_lossy(k).into_owned(), decode(v)))
                .collect(),
        ),
    }
}
