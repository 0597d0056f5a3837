//! bitlet CLI
//!
//! `decode`, `info`, `peers` and `handshake` commands over the bitlet library.

mod commands;

use anyhow::anyhow;
use bitlet::bencode::DEFAULT_MAX_DEPTH;
use bitlet::constants::DEFAULT_PORT;
use bitlet::{ClientConfig, PeerId};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bitlet", version)]
#[command(about = "Inspect torrents, query trackers and handshake with peers")]
struct Cli {
    /// Port reported to the tracker
    #[arg(long, global = true, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// 20-character peer id (defaults to the bitlet client tag)
    #[arg(long, global = true)]
    peer_id: Option<String>,

    /// Maximum bencode nesting depth accepted from input
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: commands::Commands,
}

impl Cli {
    fn config(&self) -> anyhow::Result<ClientConfig> {
        let peer_id = match &self.peer_id {
            Some(id) => PeerId::from_bytes(id.as_bytes())
                .ok_or_else(|| anyhow!("peer id must be exactly 20 bytes, got {}", id.len()))?,
            None => PeerId::client(),
        };

        Ok(ClientConfig {
            peer_id,
            port: self.port,
            max_depth: self.max_depth,
        })
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config()?;
    commands::handle_command(cli.command, &config).await
}
