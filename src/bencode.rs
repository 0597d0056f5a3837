//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used by `.torrent` files and tracker
//! responses. It has four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Canonical form
//!
//! A torrent's info hash is the SHA-1 of its `info` dictionary, so every
//! client has to serialize that dictionary to exactly the same bytes. The
//! encoder here always writes dictionary keys in ascending byte order. Decoding
//! accepts dictionaries in any key order, which means
//! `encode(decode(bytes))` normalizes once and is stable from then on.
//!
//! ```
//! use bitlet::bencode::{decode, encode};
//!
//! let unsorted = decode(b"d3:fooi42e3:bar4:spame").unwrap();
//! let sorted = decode(b"d3:bar4:spam3:fooi42ee").unwrap();
//! assert_eq!(unsorted, sorted);
//! assert_eq!(encode(&unsorted), b"d3:bar4:spam3:fooi42ee");
//! ```
//!
//! # Error Handling
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended unexpectedly
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidStringLength`] - Non-numeric length prefix
//! - [`BencodeError::UnexpectedChar`] - Unknown type tag
//! - [`BencodeError::InvalidKey`] - Dictionary key that is not a byte string
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_prefix, Decoder, DEFAULT_MAX_DEPTH};
pub use encode::{encode, encode_dict_into, encode_into};
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
