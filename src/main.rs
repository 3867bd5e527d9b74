// file: src/main.rs
// version: 1.2.0
// guid: 20d7f4a9-6e31-4b85-9c02-d58e1b7a63c4

//! GameBeam launcher - main entry point

use clap::Parser;
use gamebeam::{
    cli::args::{Cli, ClientCommands, CodeCommands, Commands, ConfigCommands, HostCommands},
    cli::commands,
    config::{default_config_path, ConfigStore},
    logging::logger,
    Result,
};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut store = ConfigStore::load(config_path);

    match cli.command {
        Commands::Host { command } => match command {
            HostCommands::Install { dir } => commands::host_install(&mut store, dir).await,
            HostCommands::Start { path } => commands::host_start(&store, path),
            HostCommands::Status { watch, interval } => {
                commands::host_status(&store, watch, interval).await
            }
            HostCommands::SendPin { pin, user, password } => {
                commands::host_send_pin(&store, pin, user, password).await
            }
            HostCommands::SetCreds { username, password } => {
                commands::host_set_creds(&mut store, username, password).await
            }
            HostCommands::WebUi => {
                commands::host_web_ui();
                Ok(())
            }
        },
        Commands::Client { command } => match command {
            ClientCommands::Install { dir } => commands::client_install(&mut store, dir).await,
            ClientCommands::Launch {
                target,
                resolution,
                fps,
                bitrate,
                no_vsync,
                app,
                path,
            } => commands::client_launch(
                &store, target, resolution, fps, bitrate, no_vsync, app, path,
            ),
            ClientCommands::Gui { path } => commands::client_gui(&store, path),
        },
        Commands::Code { command } => match command {
            CodeCommands::Encode { ip } => {
                commands::code_encode(ip);
                Ok(())
            }
            CodeCommands::Decode { code } => commands::code_decode(code),
        },
        Commands::Ip => {
            commands::show_ip();
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Get { key } => commands::config_get(&store, key),
            ConfigCommands::Set { key, value } => commands::config_set(&mut store, key, value),
            ConfigCommands::List => {
                commands::config_list(&store);
                Ok(())
            }
            ConfigCommands::Path => {
                commands::config_path(&store);
                Ok(())
            }
        },
    }
}
