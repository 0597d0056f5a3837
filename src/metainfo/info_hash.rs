use super::error::MetainfoError;
use crate::bencode::{encode_dict_into, Value};
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;
use std::fmt;

/// The 20-byte SHA-1 identifier of a torrent's `info` dictionary.
///
/// It is derived from the canonical bencoding of the dictionary, so two
/// descriptors whose `info` dictionaries differ only in key order share the
/// same info hash.
///
/// ```
/// use bitlet::bencode::decode;
/// use bitlet::metainfo::InfoHash;
///
/// let a = decode(b"d6:lengthi1e4:name1:xe").unwrap();
/// let b = decode(b"d4:name1:x6:lengthi1ee").unwrap();
/// assert_eq!(
///     InfoHash::from_info(a.as_dict().unwrap()),
///     InfoHash::from_info(b.as_dict().unwrap()),
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHash([u8; 20]);

impl InfoHash {
    /// Hashes the canonical encoding of an `info` dictionary.
    pub fn from_info(info: &BTreeMap<Bytes, Value>) -> Self {
        let mut buf = Vec::new();
        encode_dict_into(info, &mut buf);
        Self::digest(&buf)
    }

    /// SHA-1 of already-encoded bytes.
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetainfoError> {
        let arr: [u8; 20] = bytes
            .try_into()
            .map_err(|_| MetainfoError::InvalidInfoHash)?;
        Ok(Self(arr))
    }

    pub fn from_hex(s: &str) -> Result<Self, MetainfoError> {
        let bytes = hex_decode(s).ok_or(MetainfoError::InvalidInfoHash)?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoHash({})", self.to_hex())
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Lowercase hex, two digits per byte. Used for info hashes, peer ids and
/// piece hashes.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", b);
        s
    })
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 || !s.is_ascii() {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
