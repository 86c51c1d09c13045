//! Spirit vs witch Swiss tournament: library with standings, pairing engine and commands.

pub mod commands;
pub mod logic;
pub mod models;
pub mod persistence;

pub use commands::{execute, parse_confirmation, Command, Outcome};
pub use logic::{
    format_pairing, format_proposal, format_results, generate_pairing, parse_id_list,
    parse_winner_tokens,
};
pub use models::{Matchup, PlayerId, Pool, ProposedPairing, Standings, TournamentError};
pub use persistence::StoreError;
