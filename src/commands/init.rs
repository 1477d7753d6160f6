//! Store configuration command.
//!
//! Runs a short interactive wizard for the connection string, database and
//! collection, and saves the answers to `config.json`. With `--delete` the
//! file is removed instead and the defaults apply again.

use crate::libs::config::{Config, StoreConfig};
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the configuration command.
///
/// `current` is the fully resolved store configuration, used to pre-fill the prompts.
pub fn cmd(init_args: InitArgs, current: StoreConfig) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_print!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    Config::init(current)?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
