use super::error::TrackerError;
use crate::bencode::Decoder;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Size of one entry in a compact IPv4 peer list.
pub const COMPACT_PEER_LEN: usize = 6;

/// A peer address from a compact tracker response.
///
/// Only produced by splitting a compact peer list: 4 bytes of IPv4 address
/// followed by a 2-byte big-endian port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactPeer {
    ip: Ipv4Addr,
    port: u16,
}

impl CompactPeer {
    pub(crate) fn from_v4_bytes(bytes: &[u8; COMPACT_PEER_LEN]) -> Self {
        Self {
            ip: Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]),
            port: u16::from_be_bytes([bytes[4], bytes[5]]),
        }
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip, self.port))
    }
}

impl fmt::Display for CompactPeer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

/// A decoded announce response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceResponse {
    pub interval: Option<u32>,
    pub min_interval: Option<u32>,
    pub complete: Option<u32>,
    pub incomplete: Option<u32>,
    pub warning_message: Option<String>,
    pub peers: Vec<CompactPeer>,
}

/// Splits a compact peer list into 6-byte records, preserving order.
pub fn parse_compact_peers(data: &[u8]) -> Result<Vec<CompactPeer>, TrackerError> {
    if data.len() % COMPACT_PEER_LEN != 0 {
        return Err(TrackerError::InvalidResponse(format!(
            "compact peer list length {} is not a multiple of {}",
            data.len(),
            COMPACT_PEER_LEN
        )));
    }

    Ok(data
        .chunks_exact(COMPACT_PEER_LEN)
        .map(|chunk| {
            let mut record = [0u8; COMPACT_PEER_LEN];
            record.copy_from_slice(chunk);
            CompactPeer::from_v4_bytes(&record)
        })
        .collect())
}

/// Decodes the body of an HTTP announce response.
///
/// Only the compact peer list form is accepted. The body is decoded strictly
/// with `decoder`, so its nesting limit applies.
pub fn parse_announce_response(
    body: &[u8],
    decoder: &Decoder,
) -> Result<AnnounceResponse, TrackerError> {
    let value = decoder.decode(body)?;
    let dict = value.as_dict().ok_or_else(|| {
        TrackerError::InvalidResponse(format!("expected dict, got {}", value.kind()))
    })?;

    if let Some(failure) = dict.get(b"failure reason".as_slice()) {
        let reason = failure
            .as_bytes()
            .map(|b| String::from_utf8_lossy(b).into_owned())
            .unwrap_or_default();
        return Err(TrackerError::Failure(reason));
    }

    let peers = match dict.get(b"peers".as_slice()) {
        None => return Err(TrackerError::InvalidResponse("missing peers".into())),
        Some(peers) => {
            let bytes = peers.as_bytes().ok_or_else(|| {
                TrackerError::InvalidResponse(format!(
                    "peers is a {}, expected a compact byte string",
                    peers.kind()
                ))
            })?;
            parse_compact_peers(bytes)?
        }
    };

    let int_field = |key: &[u8]| {
        dict.get(key)
            .and_then(|v| v.as_integer())
            .and_then(|v| u32::try_from(v).ok())
    };

    Ok(AnnounceResponse {
        interval: int_field(b"interval"),
        min_interval: int_field(b"min interval"),
        complete: int_field(b"complete"),
        incomplete: int_field(b"incomplete"),
        warning_message: dict
            .get(b"warning message".as_slice())
            .and_then(|v| v.as_str())
            .map(String::from),
        peers,
    })
}
