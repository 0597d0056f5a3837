//! Protocol constants and client defaults.

// ============================================================================
// Client identification
// ============================================================================

/// Peer id announced by default: an Azureus-style prefix padded to 20 bytes.
pub const CLIENT_PEER_ID: &[u8; 20] = b"-BL0001-bitletclient";

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("bitlet/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Ports
// ============================================================================

/// Default BitTorrent listen port reported to trackers
pub const DEFAULT_PORT: u16 = 6881;
