use clap::Parser;
use mcutils::config::Config;
use mcutils::{Outcome, Platform};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;

/// Probes the API with a server and a player lookup and prints the decoded records.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The hostname of the server to look up.
    #[arg(long, env, default_value = "aetheria.cc")]
    host: String,
    /// The platform of the server (java or bedrock).
    #[arg(long, env, default_value = "java")]
    platform: Platform,
    /// The username or unique id of the player to look up.
    #[arg(long, env, default_value = "ImFascinated")]
    player: String,
}

/// Initializes the probe and runs both lookups.
///
/// This aggregates the configuration, initializes the logging and starts a tokio runtime. This is
/// only a thin-wrapper around the mcutils crate.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse the arguments and configuration
    let args = Args::parse();
    let config = Config::new()?;

    // initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_filter(config.log_filter.clone().into_inner()),
        )
        .init();

    let client = config.client()?;
    info!(endpoint = client.endpoint(), "built client");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (server, player) = tokio::join!(
                client.fetch_server(args.platform, &args.host),
                client.fetch_player(&args.player),
            );
            print_outcome("server", server?)?;
            print_outcome("player", player?)?;
            Ok::<(), Box<dyn std::error::Error>>(())
        })
}

fn print_outcome<T: Serialize>(
    kind: &str,
    outcome: Outcome<T>,
) -> Result<(), Box<dyn std::error::Error>> {
    match outcome {
        Outcome::Success(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Outcome::Failure(error) => {
            warn!(kind, code = error.code, message = %error.message, "lookup failed")
        }
    }
    Ok(())
}
