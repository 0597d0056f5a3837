//! HTTP tracker protocol (BEP-3, BEP-23)
//!
//! Announces a torrent to an HTTP tracker and decodes the compact peer list
//! from its response.

mod error;
mod http;
mod response;

pub use error::TrackerError;
pub use http::{build_announce_url, HttpTracker};
pub use response::{
    parse_announce_response, parse_compact_peers, AnnounceResponse, CompactPeer, COMPACT_PEER_LEN,
};
