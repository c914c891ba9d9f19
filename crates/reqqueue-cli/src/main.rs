//! reqqueue CLI
//!
//! Interactive front end for the employment request queue, run locally,
//! served over TCP, or driven from a server.

use clap::{Parser, Subcommand, ValueEnum};
use reqqueue_core::logging_facility::{self, Profile};

mod commands;
mod repl;

#[derive(Debug, Parser)]
#[command(name = "reqqueue")]
#[command(about = "reqqueue - priority queue of employment requests", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, env = "REQQUEUE_LOG", value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the command set in this process against a backing file
    Local(commands::local::LocalArgs),
    /// Serve the command set over TCP
    Serve(commands::serve::ServeArgs),
    /// Run commands on a server
    Connect(commands::connect::ConnectArgs),
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging_facility::init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Local(args) => commands::local::execute(args),
        Commands::Serve(args) => commands::serve::execute(args),
        Commands::Connect(args) => commands::connect::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
