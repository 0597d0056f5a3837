use super::error::TrackerError;
use super::response::{parse_announce_response, AnnounceResponse};
use crate::bencode::Decoder;
use crate::constants::USER_AGENT;
use crate::metainfo::InfoHash;
use crate::peer::PeerId;
use reqwest::Client;
use std::fmt::Write as _;
use tracing::{debug, trace};

/// An HTTP tracker endpoint.
///
/// Requests are issued one at a time and are not retried. No request timeout
/// is configured. Response bodies are decoded with the default nesting limit
/// unless [`HttpTracker::with_decoder`] sets another.
pub struct HttpTracker {
    client: Client,
    url: String,
    decoder: Decoder,
}

impl HttpTracker {
    pub fn new(url: &str) -> Result<Self, TrackerError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(TrackerError::InvalidUrl(url.to_string()));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(TrackerError::Http)?;

        Ok(Self {
            client,
            url: url.to_string(),
            decoder: Decoder::new(),
        })
    }

    pub fn with_decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Announces to the tracker and returns the peers it hands out.
    ///
    /// Always requests the compact peer list.
    ///
    /// # Errors
    ///
    /// Fails with [`TrackerError`] if the request fails, the tracker answers
    /// with a non-success status or a `failure reason`, or the body is not a
    /// bencoded dictionary with a compact `peers` string.
    pub async fn announce(
        &self,
        info_hash: &InfoHash,
        peer_id: &PeerId,
        port: u16,
        uploaded: u64,
        downloaded: u64,
        left: u64,
    ) -> Result<AnnounceResponse, TrackerError> {
        let url = build_announce_url(
            &self.url, info_hash, peer_id, port, uploaded, downloaded, left,
        );
        debug!(url = %url, "announcing to tracker");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        trace!(len = body.len(), "tracker response body");

        let announce = parse_announce_response(&body, &self.decoder)?;
        debug!(
            peers = announce.peers.len(),
            interval = ?announce.interval,
            "tracker announce complete"
        );

        Ok(announce)
    }
}

/// Builds the GET URL for an announce request.
///
/// The info hash is binary, so every one of its bytes is written as a `%xx`
/// triplet; the peer id gets regular query escaping.
///
/// ```
/// use bitlet::metainfo::InfoHash;
/// use bitlet::peer::PeerId;
/// use bitlet::tracker::build_announce_url;
///
/// let url = build_announce_url(
///     "http://tracker.example/announce",
///     &InfoHash::from([0x41; 20]),
///     &PeerId::from_bytes(b"-BL0001-bitletclient").unwrap(),
///     6881,
///     0,
///     0,
///     1024,
/// );
/// assert!(url.starts_with("http://tracker.example/announce?peer_id=-BL0001-bitletclient&port=6881"));
/// assert!(url.ends_with(&format!("&compact=1&info_hash={}", "%41".repeat(20))));
/// ```
pub fn build_announce_url(
    announce: &str,
    info_hash: &InfoHash,
    peer_id: &PeerId,
    port: u16,
    uploaded: u64,
    downloaded: u64,
    left: u64,
) -> String {
    let separator = if announce.contains('?') { '&' } else { '?' };

    format!(
        "{}{}peer_id={}&port={}&uploaded={}&downloaded={}&left={}&compact=1&info_hash={}",
        announce,
        separator,
        query_escape(peer_id.as_bytes()),
        port,
        uploaded,
        downloaded,
        left,
        percent_encode_all(info_hash.as_bytes())
    )
}

pub(super) fn percent_encode_all(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 3), |mut s, b| {
        let _ = write!(s, "%{:02x}", b);
        s
    })
}

pub(super) fn query_escape(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.' || b == b'~' {
                format!("{}", b as char)
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect()
}

