//! Local session
//!
//! Usage: reqqueue local --file <PATH>

use crate::repl;
use anyhow::Context;
use clap::Args;
use reqqueue_core::{CommandRunner, EmploymentRequest, Evaluator, Grammar, Record};
use reqqueue_engine::EmploymentRequestCommands;
use reqqueue_store::QueueStorage;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LocalArgs {
    /// Backing file for the queue (created if absent)
    #[arg(long, env = "REQQUEUE_FILE")]
    pub file: PathBuf,
}

pub fn execute(args: LocalArgs) -> anyhow::Result<()> {
    let storage = QueueStorage::<EmploymentRequest>::open(&args.file)?;
    let queue = storage
        .read()
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let mut runner = CommandRunner::new(EmploymentRequestCommands::new(storage), queue);
    let grammar = Grammar::build(
        &runner.descriptors(),
        Some(&EmploymentRequest::argument_schema()),
    );

    repl::run(&mut runner, &grammar)
}
