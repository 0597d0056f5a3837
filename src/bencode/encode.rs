use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Encodes a bencode value into its canonical byte form.
///
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` with keys in ascending byte order
///
/// Encoding cannot fail. Because [`Value::Dict`] iterates in key order, the
/// output for a given value is unique, which is what makes it safe to hash.
///
/// # Examples
///
/// ```
/// use bitlet::bencode::{decode, encode};
///
/// // Keys come out sorted even when the input was not.
/// let value = decode(b"d3:fooi42e3:bar4:spame").unwrap();
/// assert_eq!(encode(&value), b"d3:bar4:spam3:fooi42ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf);
    buf
}

/// Appends the canonical encoding of `value` to `buf`.
pub fn encode_into(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.push(b'i');
            buf.extend_from_slice(i.to_string().as_bytes());
            buf.push(b'e');
        }
        Value::Bytes(b) => encode_bytes(b, buf),
        Value::List(l) => {
            buf.push(b'l');
            for item in l {
                encode_into(item, buf);
            }
            buf.push(b'e');
        }
        Value::Dict(d) => encode_dict_into(d, buf),
    }
}

/// Appends the canonical encoding of a dictionary without wrapping it in a
/// [`Value`] first.
pub fn encode_dict_into(dict: &BTreeMap<Bytes, Value>, buf: &mut Vec<u8>) {
    buf.push(b'd');
    for (key, val) in dict {
        encode_bytes(key, buf);
        encode_into(val, buf);
    }
    buf.push(b'e');
}

fn encode_bytes(bytes: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(bytes.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(bytes);
}
