mod cli;
mod replay;

use checkout_profile::FormConfig;
use checkout_profile::validation::{is_valid_document, mask_document, unmask_document};
use clap::Parser;
use color_eyre::Result;
use serde_json::json;

use crate::cli::{Cli, Cmd};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    checkout_profile::logging::init()?;

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Document { raw } => {
            let out = json!({
                "masked": mask_document(&raw),
                "digits": unmask_document(&raw),
                "valid": is_valid_document(&raw),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Cmd::Replay { script, config_dir } => {
            let config = FormConfig::load(config_dir.as_deref())?;
            let report = replay::run(&script, &config).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
