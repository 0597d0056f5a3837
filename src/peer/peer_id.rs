use std::fmt;

use crate::constants::CLIENT_PEER_ID;
use crate::metainfo::hex_encode;

/// A 20-byte peer identifier.
///
/// Peer IDs identify BitTorrent clients in the swarm. They usually follow the
/// Azureus-style format `-XX0000-<12 bytes>`, where `XX` is the client ID and
/// `0000` the version.
///
/// The identity is passed explicitly to the tracker and handshake, so several
/// can coexist in one process.
///
/// # Examples
///
/// ```
/// use bitlet::peer::PeerId;
///
/// let peer_id = PeerId::client();
/// assert_eq!(peer_id.as_bytes(), b"-BL0001-bitletclient");
/// assert_eq!(peer_id.client_id(), Some("BL0001"));
///
/// assert!(PeerId::from_bytes(b"too short").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerId(pub [u8; 20]);

impl PeerId {
    /// The fixed identity this client announces with by default.
    pub fn client() -> Self {
        Self(*CLIENT_PEER_ID)
    }

    /// Creates a peer ID from a 20-byte slice.
    ///
    /// Returns `None` if the slice is not exactly 20 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let id: [u8; 20] = bytes.try_into().ok()?;
        Some(Self(id))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    /// Extracts the client identifier if using Azureus-style format.
    ///
    /// Returns the 6-character client ID (e.g., "UT3500" for uTorrent 3.5.0.0)
    /// if the peer ID follows the `-XXXXXX-` format, otherwise `None`.
    pub fn client_id(&self) -> Option<&str> {
        if self.0[0] == b'-' && self.0[7] == b'-' {
            std::str::from_utf8(&self.0[1..7]).ok()
        } else {
            None
        }
    }
}

impl Default for PeerId {
    fn default() -> Self {
        Self::client()
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(client) = self.client_id() {
            write!(f, "PeerId({})", client)
        } else {
            write!(f, "PeerId({:02x?})", &self.0[..8])
        }
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            if byte.is_ascii_alphanumeric() || *byte == b'-' {
                write!(f, "{}", *byte as char)?;
            } else {
                write!(f, "%{:02x}", byte)?;
            }
        }
        Ok(())
    }
}
