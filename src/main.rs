//! DNS proxy startup.
//!
//! Loads the configuration file, resolves the set of upstream resolvers and
//! reports it. Any configuration error stops startup.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dns_proxy::config::load_config;
use dns_proxy::observability::logging::init_logging;

/// Resolve DNS proxy configuration into a resolver registry.
#[derive(Parser, Debug)]
#[command(name = "dns-proxy")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML).
    #[arg(short, long, default_value = "dnscrypt-proxy.toml")]
    config: PathBuf,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the resolved settings as JSON.
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!(config_file = %args.config.display(), "dns-proxy starting");

    let settings = match load_config(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Unable to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        listen_addresses = ?settings.listen_addresses,
        proto = %settings.main_proto,
        timeout = ?settings.timeout,
        servers = settings.registry.len(),
        "Configuration loaded"
    );
    for server in &settings.registry {
        tracing::info!(
            server = %server.name,
            address = %server.stamp.server_addr(),
            provider = %server.stamp.provider_name(),
            "Resolver registered"
        );
    }

    if args.print {
        match serde_json::to_string_pretty(&settings) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!(error = %e, "Unable to serialize settings");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
