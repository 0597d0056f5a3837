//! Peer wire protocol handshake (BEP-3)
//!
//! Only the opening 68-byte handshake is implemented. Message exchange after
//! the handshake is out of scope for this crate.

mod error;
mod handshake;
mod peer_id;

pub use error::PeerError;
pub use handshake::{handshake, Handshake, HANDSHAKE_LEN, PROTOCOL};
pub use peer_id::PeerId;
