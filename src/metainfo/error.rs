use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when interpreting a torrent descriptor.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has an invalid value or type.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// An info hash was not 20 bytes (or 40 hex characters).
    #[error("invalid info hash")]
    InvalidInfoHash,
}
