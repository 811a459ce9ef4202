//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard for first-time configuration, or
//! removes the existing configuration with `--delete`. The application
//! works without any configuration at all; this command only exists to
//! change the defaults.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Handles configuration setup with an interactive wizard, or
/// configuration removal when `--delete` is used.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
