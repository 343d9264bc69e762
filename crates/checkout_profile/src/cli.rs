use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "checkout-profile", version, about = "Checkout profile form tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Mask a tax id and report whether its checksum holds
    Document { raw: String },
    /// Replay a JSON script of form input against loopback services
    Replay {
        script: PathBuf,
        /// Directory holding config.toml / config.json5
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
}
