//! Tournament CLI: one command per invocation against the JSON record store.
//! Run with: cargo run --bin tournament -- <command> [args]
//! The store path defaults to ./db.json; override with --db or env TOURNAMENT_DB.

use clap::{CommandFactory, Parser};
use pool_tournament::persistence::{self, DEFAULT_DB_PATH};
use pool_tournament::{
    execute, format_proposal, parse_confirmation, Command, ProposedPairing, TournamentError,
};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "tournament")]
#[command(about = "Swiss pairing for a spirit vs witch tournament", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path of the JSON record store
    #[arg(long, global = true, env = "TOURNAMENT_DB", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let cli = Cli::parse();

    let mut standings = match persistence::load(&cli.db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {}", cli.db.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut rng = rand::thread_rng();
    match execute(&mut standings, &cli.command, &mut rng, ask_confirmation) {
        Ok(outcome) => {
            print!("{}", outcome.message);
            if outcome.dirty {
                if let Err(e) = persistence::save(&cli.db, &standings) {
                    eprintln!("Failed to save {}: {}", cli.db.display(), e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(TournamentError::InvalidArgument(msg)) => {
            eprintln!("{}", msg);
            if let Err(e) = Cli::command().print_help() {
                log::warn!("Could not print usage: {}", e);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Show the proposal and block on a y/n answer from stdin.
fn ask_confirmation(proposal: &ProposedPairing) -> bool {
    println!("{}", format_proposal(proposal));
    println!("Validate pairing? (y/n)");
    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => parse_confirmation(&answer),
        Err(e) => {
            log::warn!("Could not read confirmation: {}", e);
            false
        }
    }
}
