use super::error::PeerError;
use super::peer_id::PeerId;
use crate::metainfo::InfoHash;
use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

pub const PROTOCOL: &[u8] = b"BitTorrent protocol";
pub const HANDSHAKE_LEN: usize = 1 + 19 + 8 + 20 + 20;

/// The fixed-length message that opens a peer connection.
///
/// Layout: `19`, `"BitTorrent protocol"`, 8 reserved bytes, 20-byte info hash,
/// 20-byte peer id. This client advertises no extensions, so the reserved
/// bytes it sends are all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    pub info_hash: [u8; 20],
    pub peer_id: [u8; 20],
    pub reserved: [u8; 8],
}

impl Handshake {
    pub fn new(info_hash: [u8; 20], peer_id: [u8; 20]) -> Self {
        Self {
            info_hash,
            peer_id,
            reserved: [0u8; 8],
        }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HANDSHAKE_LEN);
        buf.put_u8(19);
        buf.put_slice(PROTOCOL);
        buf.put_slice(&self.reserved);
        buf.put_slice(&self.info_hash);
        buf.put_slice(&self.peer_id);
        buf.freeze()
    }

    /// Splits a handshake message into its fields.
    ///
    /// The protocol header is not checked; see [`Handshake::has_valid_header`].
    pub fn decode(data: &[u8]) -> Result<Self, PeerError> {
        if data.len() < HANDSHAKE_LEN {
            return Err(PeerError::InvalidHandshake);
        }

        let mut reserved = [0u8; 8];
        reserved.copy_from_slice(&data[20..28]);

        let mut info_hash = [0u8; 20];
        info_hash.copy_from_slice(&data[28..48]);

        let mut peer_id = [0u8; 20];
        peer_id.copy_from_slice(&data[48..68]);

        Ok(Self {
            info_hash,
            peer_id,
            reserved,
        })
    }

    pub fn has_valid_header(data: &[u8]) -> bool {
        data.len() >= 20 && data[0] == 19 && &data[1..20] == PROTOCOL
    }
}

/// Performs the handshake over an already connected stream and returns the
/// remote peer's id.
///
/// Writes exactly [`HANDSHAKE_LEN`] bytes, then reads exactly as many back.
/// The info hash echoed by the remote side is not compared with ours, and a
/// response with an unexpected protocol header is accepted with a warning.
///
/// # Errors
///
/// Returns [`PeerError::ConnectionClosed`] if the stream ends before a full
/// handshake is read, and [`PeerError::Io`] for other I/O failures.
pub async fn handshake<S>(
    stream: &mut S,
    info_hash: &InfoHash,
    peer_id: &PeerId,
) -> Result<PeerId, PeerError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let ours = Handshake::new(*info_hash.as_bytes(), *peer_id.as_bytes());
    stream.write_all(&ours.encode()).await?;
    stream.flush().await?;
    debug!(info_hash = %info_hash, "sent handshake");

    let mut buf = [0u8; HANDSHAKE_LEN];
    stream.read_exact(&mut buf).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => PeerError::ConnectionClosed,
        _ => PeerError::Io(e),
    })?;

    if !Handshake::has_valid_header(&buf) {
        warn!("peer handshake has an unexpected protocol header");
    }

    let theirs = Handshake::decode(&buf)?;
    let remote = PeerId(theirs.peer_id);
    debug!(peer_id = %remote, "received handshake");

    Ok(remote)
}
