// file: src/main.rs
// version: 1.1.0
// guid: 7c20e9b5-4d81-4f36-a5c0-92e6d1f78a43

//! Terraform driver - main entry point

use clap::Parser;
use terraform_driver::{
    cli::{args::Cli, args::Commands, commands},
    logging::logger,
    Result,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    let config = commands::load_config(cli.config.as_deref())?;

    let shutdown_signal = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, shutting down...");
    };

    let command_future = async {
        match cli.command {
            Commands::Install { version, install_dir, base_url, skip_verify } => {
                commands::install_command(&config, version, install_dir, base_url, skip_verify)
                    .await
            }
            Commands::Init { chdir, upgrade, reconfigure, migrate_state, backend_config } => {
                commands::init_command(
                    &config,
                    chdir,
                    upgrade,
                    reconfigure,
                    migrate_state,
                    backend_config,
                )
                .await
            }
            Commands::Plan { chdir, destroy, targets, vars, var_file, out, json } => {
                commands::plan_command(
                    &config, chdir, destroy, targets, vars, var_file, out, json,
                )
                .await
            }
            Commands::Apply { chdir, plan_file, json } => {
                commands::apply_command(&config, chdir, plan_file, json).await
            }
            Commands::Show { chdir, plan_file, json } => {
                commands::show_command(&config, chdir, plan_file, json).await
            }
            Commands::Check => commands::check_command(&config).await,
        }
    };

    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
