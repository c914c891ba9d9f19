//! Remote session
//!
//! Usage: reqqueue connect [--addr <HOST:PORT>]

use super::DEFAULT_ADDR;
use crate::repl;
use anyhow::Context;
use clap::Args;
use reqqueue_core::{Evaluator, Grammar};
use reqqueue_remote::{RemoteRunner, TcpConnection};

#[derive(Debug, Args)]
pub struct ConnectArgs {
    /// Server address
    #[arg(long, env = "REQQUEUE_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
}

pub fn execute(args: ConnectArgs) -> anyhow::Result<()> {
    let connection = TcpConnection::connect(args.addr.as_str())
        .with_context(|| format!("cannot reach {}", args.addr))?;
    let mut runner =
        RemoteRunner::connect(connection).context("failed to fetch the command catalog")?;

    let grammar = Grammar::build(&runner.descriptors(), Some(runner.schema()));
    repl::run(&mut runner, &grammar)
}
