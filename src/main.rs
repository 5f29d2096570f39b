use std::env;
use std::process::exit;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use relay_bootstrap::bootstrap::structs::database_bootstrapper::DatabaseBootstrapper;
use relay_bootstrap::config::structs::configuration::Configuration;
use relay_bootstrap::logging::setup_logging;
use relay_bootstrap::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    let warnings = config.apply_env_overrides(|key| env::var(key).ok());
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE CONFIG] {}", error);
        exit(101);
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(101);
    }
    for warning in warnings {
        warn!("[CONFIG] {}", warning);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let connector = match DatabaseBootstrapper::from_configuration(&config).run().await {
                Ok(connector) => connector,
                Err(error) => {
                    error!("[BOOT] Database bootstrap failed: {}", error);
                    exit(1);
                }
            };
            info!("[BOOT] Database ready, press CTRL-C to shut down");

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for the shutdown signal: {}", error);
            }

            info!("Shutdown request received, shutting down...");
            if let Err(error) = connector.close().await {
                error!("[BOOT] {}", error);
            }
            info!("Server shutting down completed");
            Ok(())
        })
}
