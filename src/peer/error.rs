use thiserror::Error;

/// Errors that can occur during the peer handshake.
#[derive(Debug, Error)]
pub enum PeerError {
    /// Network I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The connection closed before a full handshake arrived.
    #[error("connection closed")]
    ConnectionClosed,

    /// A handshake message shorter than 68 bytes.
    #[error("invalid handshake")]
    InvalidHandshake,
}
