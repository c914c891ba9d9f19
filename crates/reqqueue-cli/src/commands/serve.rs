//! Command server
//!
//! Usage: reqqueue serve --file <PATH> [--addr <HOST:PORT>]

use super::DEFAULT_ADDR;
use anyhow::Context;
use clap::Args;
use reqqueue_core::{CommandRunner, EmploymentRequest};
use reqqueue_engine::EmploymentRequestCommands;
use reqqueue_remote::Server;
use reqqueue_store::QueueStorage;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Backing file for the queue (created if absent)
    #[arg(long, env = "REQQUEUE_FILE")]
    pub file: PathBuf,

    /// Address to listen on
    #[arg(long, env = "REQQUEUE_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
}

pub fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let storage = QueueStorage::<EmploymentRequest>::open(&args.file)?;
    let queue = storage
        .read()
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    let runner = CommandRunner::new(EmploymentRequestCommands::new(storage), queue);

    let mut server = Server::bind(args.addr.as_str(), runner)
        .with_context(|| format!("failed to listen on {}", args.addr))?;
    println!("Listening on {}", server.local_addr()?);

    server.serve()?;
    Ok(())
}
