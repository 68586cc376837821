use bytes::{BufMut, BytesMut};

use super::value::Value;

/// Serializes a wire tree to canonical bencode.
///
/// Dictionaries are emitted in key order, so equal trees always produce
/// identical bytes.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = BytesMut::new();
    write_value(value, &mut out);
    out.to_vec()
}

fn write_value(value: &Value, out: &mut BytesMut) {
    match value {
        Value::Integer(i) => {
            out.put_u8(b'i');
            out.put_slice(i.to_string().as_bytes());
            out.put_u8(b'e');
        }
        Value::Bytes(b) => write_bytes(b, out),
        Value::List(items) => {
            out.put_u8(b'l');
            for item in items {
                write_value(item, out);
            }
            out.put_u8(b'e');
        }
        Value::Dict(entries) => {
            out.put_u8(b'd');
            for (key, item) in entries {
                write_bytes(key, out);
                write_value(item, out);
            }
            out.put_u8(b'e');
        }
    }
}

fn write_bytes(bytes: &[u8], out: &mut BytesMut) {
    out.put_slice(bytes.len().to_string().as_bytes());
    out.put_u8(b':');
    out.put_slice(bytes);
}
