// file: src/cli/args.rs
// version: 1.2.0
// guid: d16e83b7-4f92-4c05-ba28-579c06e3d8f4

//! Command line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gamebeam")]
#[command(about = "Install, pair, and launch the Sunshine host and Moonlight client")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file location
    #[arg(long, global = true, env = "GAMEBEAM_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the Sunshine host service on this machine
    Host {
        #[command(subcommand)]
        command: HostCommands,
    },

    /// Manage the Moonlight client on this machine
    Client {
        #[command(subcommand)]
        command: ClientCommands,
    },

    /// Encode or decode shareable connection codes
    Code {
        #[command(subcommand)]
        command: CodeCommands,
    },

    /// Show this machine's LAN address and its connection code
    Ip,

    /// Read or edit launcher configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum HostCommands {
    /// Download and install the latest portable Sunshine release
    Install {
        /// Installation directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Start the Sunshine service
    Start {
        /// Explicit executable path, beating configured and well-known paths
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Check whether the Sunshine admin endpoint is reachable
    Status {
        /// Keep polling instead of checking once
        #[arg(long)]
        watch: bool,

        /// Poll interval in seconds
        #[arg(long, default_value = "5")]
        interval: u64,
    },

    /// Submit a pairing PIN to the Sunshine admin API
    SendPin {
        /// PIN displayed by the Moonlight client
        pin: String,

        /// Admin username, overriding the configured one
        #[arg(short, long)]
        user: Option<String>,

        /// Admin password, overriding the configured one
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Initialize Sunshine's admin credentials and remember them
    SetCreds {
        username: String,
        password: String,
    },

    /// Print the Sunshine admin web UI address
    WebUi,
}

#[derive(Subcommand)]
pub enum ClientCommands {
    /// Download and install the latest portable Moonlight release
    Install {
        /// Installation directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Start a streaming session against a host
    Launch {
        /// Connection code or literal host address
        target: String,

        #[arg(long, default_value = "1920x1080")]
        resolution: String,

        #[arg(long, default_value = "60")]
        fps: u32,

        /// Bitrate in kbps
        #[arg(long, default_value = "20000")]
        bitrate: u32,

        #[arg(long)]
        no_vsync: bool,

        /// Application to stream
        #[arg(long, default_value = "Desktop")]
        app: String,

        /// Explicit executable path, beating configured and well-known paths
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Open the Moonlight GUI for interactive pairing
    Gui {
        /// Explicit executable path, beating configured and well-known paths
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CodeCommands {
    /// Encode an IP address into a connection code
    Encode { ip: String },

    /// Decode a connection code back to an IP address
    Decode { code: String },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value
    Get { key: String },

    /// Set one configuration value
    Set { key: String, value: String },

    /// List all configuration entries
    List,

    /// Print the configuration file location
    Path,
}
