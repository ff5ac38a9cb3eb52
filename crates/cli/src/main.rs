//! # Rootwalk
//!
//! A minimal recursive DNS resolver: accepts client queries over UDP and
//! resolves address records by walking the delegation chain from the root
//! servers, caching what it finds along the way.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use rootwalk_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Minimal recursive DNS resolver")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind the UDP listener to
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to bind the UDP listener to
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        bind = %config.server.bind_address,
        port = config.server.port,
        root_hints = config.dns.root_hints.len(),
        "Configuration loaded"
    );

    let services = di::DnsServices::build(&config)?;

    server::start_dns_server(&config, services.handler).await
}
