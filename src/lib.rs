//! bitlet - A small BitTorrent client library
//!
//! Parses `.torrent` descriptors, derives their info hash, asks an HTTP
//! tracker for peers and performs the opening handshake with one of them.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode encoding/decoding with canonical dictionary order
//! - [`metainfo`] - BEP-3 single-file torrent metainfo and info hash
//! - [`tracker`] - BEP-3/23 HTTP tracker announce with compact peer lists
//! - [`peer`] - BEP-3 peer handshake
//! - [`config`] - Client identity and limits
//!
//! # Example
//!
//! ```no_run
//! use bitlet::config::ClientConfig;
//! use bitlet::metainfo::Metainfo;
//! use bitlet::tracker::HttpTracker;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let data = std::fs::read("sample.torrent")?;
//! let torrent = Metainfo::from_value(config.decoder().decode(&data)?)?;
//!
//! let tracker = HttpTracker::new(torrent.announce())?;
//! let response = tracker
//!     .announce(
//!         &torrent.info_hash(),
//!         &config.peer_id,
//!         config.port,
//!         0,
//!         0,
//!         torrent.total_length(),
//!     )
//!     .await?;
//!
//! for peer in &response.peers {
//!     println!("{}", peer);
//! }
//! # Ok(())
//! # }
//! ```

pub mod bencode;
pub mod config;
pub mod constants;
pub mod metainfo;
pub mod peer;
pub mod tracker;

pub use bencode::{decode, encode, BencodeError, Value};
pub use config::ClientConfig;
pub use metainfo::{InfoHash, Metainfo, MetainfoError};
pub use peer::{handshake, Handshake, PeerError, PeerId};
pub use tracker::{AnnounceResponse, CompactPeer, HttpTracker, TrackerError};
