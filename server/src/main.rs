use anyhow::{Context, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use wheelhouse_server::{Api, AppState, ServerConfig};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host interface to bind (default: localhost).
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Path of the persisted statistics document.
    #[arg(long)]
    data_path: PathBuf,

    /// Plain-text song ID list shown on the dashboard (optional).
    #[arg(long)]
    playlist_path: Option<PathBuf>,
}

fn build_config(args: &Args) -> Result<ServerConfig> {
    if args.data_path.as_os_str().is_empty() {
        anyhow::bail!("data_path must not be empty");
    }
    Ok(ServerConfig {
        data_path: args.data_path.clone(),
        playlist_path: args.playlist_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_fields() {
        let args = Args::parse_from([
            "server",
            "--data-path",
            "/var/data/casino_data.json",
            "--playlist-path",
            "songs.txt",
        ]);
        let config = build_config(&args).expect("config should parse");
        assert_eq!(config.data_path, PathBuf::from("/var/data/casino_data.json"));
        assert_eq!(config.playlist_path, Some(PathBuf::from("songs.txt")));
    }

    #[test]
    fn rejects_empty_data_path() {
        let args = Args::parse_from(["server", "--data-path", ""]);
        let err = build_config(&args).unwrap_err();
        assert!(
            err.to_string().contains("data_path"),
            "unexpected error: {err}"
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing();

    let config = build_config(&args)?;
    let state = Arc::new(AppState::new(config));

    // Load once up front so first-run migration output lands in the log
    // before traffic arrives.
    let doc = state.load_document().await;
    info!(
        wheel_spins = doc.wheel_summary().spins,
        odds_evens_bets = doc.odds_evens_summary().spins,
        "stats document loaded"
    );

    let api = Api::new(state);
    let app = api.router();

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("axum server error")?;

    Ok(())
}
