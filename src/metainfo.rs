//! Torrent metainfo handling ([BEP-3]).
//!
//! A torrent file (`.torrent`) is a bencoded dictionary with an `announce`
//! URL and an `info` dictionary describing the content:
//!
//! - `name` - Suggested file name
//! - `length` - File size in bytes (single-file torrents only)
//! - `piece length` - Size of each piece in bytes
//! - `pieces` - Concatenated 20-byte SHA-1 hashes, one per piece
//!
//! [`Metainfo`] is the typed view over such a dictionary and [`InfoHash`] is
//! the SHA-1 of the canonically re-encoded `info` dictionary, the value that
//! identifies the torrent to trackers and peers.
//!
//! ```
//! use bitlet::metainfo::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = b"d8:announce22:http://tracker.example4:infod6:lengthi3e4:name1:a\
//!              12:piece lengthi16384e6:pieces20:aaaaaaaaaaaaaaaaaaaaee";
//! let torrent = Metainfo::from_bytes(data)?;
//!
//! assert_eq!(torrent.announce(), "http://tracker.example");
//! assert_eq!(torrent.total_length(), 3);
//! assert_eq!(torrent.piece_count(), 1);
//! println!("Info hash: {}", torrent.info_hash());
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::{hex_encode, InfoHash};
pub use torrent::Metainfo;
