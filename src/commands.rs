use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bitlet::bencode::Value;
use bitlet::metainfo::hex_encode;
use bitlet::tracker::HttpTracker;
use bitlet::{ClientConfig, Metainfo};
use clap::Subcommand;
use tokio::net::TcpStream;
use tracing::info;

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a bencoded value and print it as JSON
    Decode { value: String },

    /// Print the tracker, length, info hash and piece hashes of a torrent
    Info { torrent: PathBuf },

    /// Ask the torrent's tracker for peers
    Peers { torrent: PathBuf },

    /// Perform the BitTorrent handshake with a peer
    Handshake { torrent: PathBuf, peer: SocketAddr },
}

pub async fn handle_command(command: Commands, config: &ClientConfig) -> anyhow::Result<()> {
    match command {
        Commands::Decode { value } => {
            let decoded = config
                .decoder()
                .decode(value.as_bytes())
                .context("decode bencoded value")?;
            println!("{}", to_json(&decoded));
        }

        Commands::Info { torrent } => {
            let torrent = load_torrent(&torrent, config)?;

            println!("Tracker URL: {}", torrent.announce());
            println!("Length: {}", torrent.total_length());
            println!("Info Hash: {}", torrent.info_hash());
            println!("Piece Length: {}", torrent.piece_length());
            println!("Piece Hashes:");
            for hash in torrent.piece_hashes() {
                println!("{}", hex_encode(hash));
            }
        }

        Commands::Peers { torrent } => {
            let torrent = load_torrent(&torrent, config)?;
            let tracker = HttpTracker::new(torrent.announce())
                .context("create tracker client")?
                .with_decoder(config.decoder());

            let response = tracker
                .announce(
                    &torrent.info_hash(),
                    &config.peer_id,
                    config.port,
                    0,
                    0,
                    torrent.total_length(),
                )
                .await
                .context("query tracker")?;

            if let Some(warning) = &response.warning_message {
                info!(%warning, "tracker warning");
            }

            for peer in &response.peers {
                println!("{}", peer);
            }
        }

        Commands::Handshake { torrent, peer } => {
            let torrent = load_torrent(&torrent, config)?;

            let mut stream = TcpStream::connect(peer)
                .await
                .with_context(|| format!("connect to {}", peer))?;
            info!(%peer, "connected");

            let remote = bitlet::handshake(&mut stream, &torrent.info_hash(), &config.peer_id)
                .await
                .with_context(|| format!("handshake with {}", peer))?;

            println!("Peer ID: {}", remote.to_hex());
        }
    }

    Ok(())
}

fn load_torrent(path: &Path, config: &ClientConfig) -> anyhow::Result<Metainfo> {
    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let value = config
        .decoder()
        .decode(&data)
        .with_context(|| format!("decode {}", path.display()))?;
    Metainfo::from_value(value).with_context(|| format!("parse {}", path.display()))
}

/// Renders a decoded value for display: byte strings become (lossy UTF-8)
/// strings and dictionaries become objects with their keys in byte order.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Bytes(b) => serde_json::Value::String(String::from_utf8_lossy(b).into_owned()),
        Value::List(l) => serde_json::Value::Array(l.iter().map(to_json).collect()),
        Value::Dict(d) => serde_json::Value::Object(
            d.iter()
                .map(|(k, v)| (String::from_utf8_lossy(k).into_owned(), to_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitlet::decode;

    #[test]
    fn test_to_json() {
        let value = decode(b"d3:bar4:spam3:fooi42ee").unwrap();
        assert_eq!(to_json(&value).to_string(), r#"{"bar":"spam","foo":42}"#);

        let value = decode(b"l5:helloi-52eli1eee").unwrap();
        assert_eq!(to_json(&value).to_string(), r#"["hello",-52,[1]]"#);
    }
}
