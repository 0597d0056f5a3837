use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, Value};
use bytes::Bytes;
use std::collections::BTreeMap;

/// A parsed single-file torrent descriptor.
///
/// The `info` dictionary is kept exactly as decoded (including keys this type
/// does not interpret) so the info hash can be recomputed from it. The
/// commonly used fields are validated once at construction and exposed
/// through accessors; the struct cannot be mutated afterwards.
///
/// # Examples
///
/// ```no_run
/// use bitlet::metainfo::Metainfo;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = std::fs::read("example.torrent")?;
/// let metainfo = Metainfo::from_bytes(&data)?;
///
/// println!("Tracker URL: {}", metainfo.announce());
/// println!("Length: {}", metainfo.total_length());
/// println!("Info Hash: {}", metainfo.info_hash());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metainfo {
    announce: String,
    info: BTreeMap<Bytes, Value>,
    name: Option<String>,
    piece_length: u64,
    total_length: u64,
    pieces: Vec<[u8; 20]>,
}

impl Metainfo {
    /// Parses a torrent file from raw bytes.
    ///
    /// The whole buffer must be a single bencoded value.
    ///
    /// # Errors
    ///
    /// Returns [`MetainfoError::Bencode`] for malformed bencode, and the schema
    /// errors described in [`Metainfo::from_value`] otherwise.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        Self::from_value(value)
    }

    /// Builds the typed view over an already decoded descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the top-level value is not a dictionary
    /// - `announce` is missing or not a UTF-8 byte string
    /// - `info` is missing or not a dictionary
    /// - `length` or `piece length` is missing, not an integer, or negative
    /// - `pieces` is missing, not a byte string, or not a multiple of 20 bytes
    pub fn from_value(value: Value) -> Result<Self, MetainfoError> {
        let mut dict = value
            .into_dict()
            .ok_or(MetainfoError::InvalidField("root"))?;

        let announce = match dict.get(b"announce".as_slice()) {
            None => return Err(MetainfoError::MissingField("announce")),
            Some(v) => v
                .as_str()
                .ok_or(MetainfoError::InvalidField("announce"))?
                .to_string(),
        };

        let info = dict
            .remove(b"info".as_slice())
            .ok_or(MetainfoError::MissingField("info"))?
            .into_dict()
            .ok_or(MetainfoError::InvalidField("info"))?;

        let total_length = non_negative(&info, "length")?;
        let piece_length = non_negative(&info, "piece length")?;

        let pieces_bytes = match info.get(b"pieces".as_slice()) {
            None => return Err(MetainfoError::MissingField("pieces")),
            Some(v) => v.as_bytes().ok_or(MetainfoError::InvalidField("pieces"))?,
        };

        if pieces_bytes.len() % 20 != 0 {
            return Err(MetainfoError::InvalidField("pieces"));
        }

        let pieces: Vec<[u8; 20]> = pieces_bytes
            .chunks_exact(20)
            .map(|chunk| {
                let mut arr = [0u8; 20];
                arr.copy_from_slice(chunk);
                arr
            })
            .collect();

        let name = info
            .get(b"name".as_slice())
            .and_then(|v| v.as_str())
            .map(String::from);

        Ok(Self {
            announce,
            info,
            name,
            piece_length,
            total_length,
            pieces,
        })
    }

    /// Primary tracker URL.
    pub fn announce(&self) -> &str {
        &self.announce
    }

    /// The raw `info` dictionary, as decoded.
    pub fn info(&self) -> &BTreeMap<Bytes, Value> {
        &self.info
    }

    /// Suggested file name, when present and valid UTF-8.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of bytes per piece.
    pub fn piece_length(&self) -> u64 {
        self.piece_length
    }

    /// Size of the single file described by this torrent.
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// SHA-1 hash of each piece, in piece order.
    pub fn piece_hashes(&self) -> &[[u8; 20]] {
        &self.pieces
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Computes the info hash from the canonical encoding of `info`.
    pub fn info_hash(&self) -> InfoHash {
        InfoHash::from_info(&self.info)
    }
}

fn non_negative(
    info: &BTreeMap<Bytes, Value>,
    field: &'static str,
) -> Result<u64, MetainfoError> {
    let value = info
        .get(field.as_bytes())
        .ok_or(MetainfoError::MissingField(field))?
        .as_integer()
        .ok_or(MetainfoError::InvalidField(field))?;

    u64::try_from(value).map_err(|_| MetainfoError::InvalidField(field))
}
