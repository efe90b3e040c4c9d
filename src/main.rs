// src/main.rs
//! GPS Status Monitor - terminal client for GPS demo servers

use anyhow::Context;
use clap::{Parser, Subcommand};
use gps_status_monitor::{server, GpsMonitor, MonitorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the server and show the status board (default)
    Watch {
        /// Server base URL, e.g. http://localhost:8080
        #[arg(short, long)]
        url: Option<String>,
        /// Milliseconds between polls
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_ms: Option<u64>,
        /// Persist the given options to the config file
        #[arg(long)]
        save: bool,
    },
    /// Run the demo server with simulated data
    Serve {
        #[arg(short, long)]
        address: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut config = MonitorConfig::load().context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Watch {
        url: None,
        interval_ms: None,
        save: false,
    }) {
        Command::Watch {
            url,
            interval_ms,
            save,
        } => {
            if let Some(url) = url {
                config.update_server(url);
            }
            if let Some(interval_ms) = interval_ms {
                config.update_interval(interval_ms);
            }
            if save {
                config.save().context("failed to save configuration")?;
            }

            let monitor = GpsMonitor::new(config).context("invalid configuration")?;
            monitor.run().await.context("monitor failed")?;
        }
        Command::Serve { address, port } => {
            let address = address.unwrap_or_else(|| config.serve_address.clone());
            let port = port.unwrap_or(config.serve_port);
            config.update_serve(address, port);

            println!(
                "Starting HTTP server on http://{}:{} ...",
                config.serve_address, config.serve_port
            );
            server::serve(&config).await.context("server failed")?;
            println!("HTTP server stopped.");
        }
        Command::Config => {
            let path = MonitorConfig::config_path()?;
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
