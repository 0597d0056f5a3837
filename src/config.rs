//! Client configuration.
//!
//! Everything that identifies this client or bounds its work on untrusted
//! input is collected here and passed down explicitly.

use crate::bencode::{Decoder, DEFAULT_MAX_DEPTH};
use crate::constants::DEFAULT_PORT;
use crate::peer::PeerId;

/// Settings shared by the tracker announce and the peer handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Identity sent to trackers and peers
    pub peer_id: PeerId,
    /// Port reported to the tracker
    pub port: u16,
    /// Nesting limit for bencode read from disk or the network
    pub max_depth: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            peer_id: PeerId::client(),
            port: DEFAULT_PORT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ClientConfig {
    /// A decoder honoring [`ClientConfig::max_depth`].
    pub fn decoder(&self) -> Decoder {
        Decoder::with_max_depth(self.max_depth)
    }
}
