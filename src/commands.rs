//! Commands exposed to the CLI. Each returns printable text plus a dirty flag
//! telling the caller whether the record store must be saved.

use crate::logic::{
    format_pairing, format_results, generate_pairing, parse_id_list, parse_winner_tokens,
};
use crate::models::{Pool, ProposedPairing, Standings, TournamentError};
use clap::Subcommand;
use rand::Rng;

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Register players in a pool, e.g. `spirit 12,345,23`
    InitializePool {
        #[arg(ignore_case = true)]
        pool: Pool,
        /// Comma-separated player ids
        ids: String,
    },
    /// Record winners of the current round, e.g. `12w,14w,73w`
    SetResults {
        /// Comma-separated ids, each followed by a one-character marker
        results: String,
    },
    /// Remove players from the tournament, e.g. `12,32`
    DropPlayer {
        /// Comma-separated player ids
        ids: String,
    },
    /// Generate a new pairing and ask for confirmation
    Pairing,
    /// Print the current pairing
    PrintPairing,
    /// Print the current leaderboard
    PrintResults,
}

/// What a command produced: text for the user and whether state changed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Outcome {
    pub dirty: bool,
    pub message: String,
}

impl Outcome {
    fn clean(message: impl Into<String>) -> Self {
        Self {
            dirty: false,
            message: message.into(),
        }
    }

    fn changed(dirty: bool, message: impl Into<String>) -> Self {
        Self {
            dirty,
            message: message.into(),
        }
    }
}

/// Run one command against `standings`.
///
/// For [`Command::Pairing`], `confirm` is shown the proposal and decides
/// whether it is committed; a rejected proposal leaves `standings` untouched.
/// An incomplete round is reported in the message rather than as an error.
pub fn execute<R, C>(
    standings: &mut Standings,
    command: &Command,
    rng: &mut R,
    confirm: C,
) -> Result<Outcome, TournamentError>
where
    R: Rng + ?Sized,
    C: FnOnce(&ProposedPairing) -> bool,
{
    match command {
        Command::InitializePool { pool, ids } => {
            let ids = parse_id_list(ids);
            let added = standings.initialize_pool(*pool, &ids)?;
            Ok(Outcome::changed(
                added > 0,
                format!("Added {} player(s) to the {} pool\n", added, pool),
            ))
        }
        Command::SetResults { results } => {
            let winners = parse_winner_tokens(results)?;
            let recorded = standings.record_results(&winners);
            let mut message = format!("Recorded {} result(s)\n", recorded);
            let missing = standings.missing_results();
            if missing > 0 {
                message.push_str(&format!("{} result(s) still missing\n", missing));
            }
            Ok(Outcome::changed(recorded > 0, message))
        }
        Command::DropPlayer { ids } => {
            let mut dropped = Vec::new();
            for id in parse_id_list(ids) {
                if standings.drop_player(&id) {
                    dropped.push(id.to_string());
                }
            }
            let message = if dropped.is_empty() {
                "No players dropped\n".to_string()
            } else {
                format!("Dropped: {}\n", dropped.join(" "))
            };
            Ok(Outcome::changed(!dropped.is_empty(), message))
        }
        Command::Pairing => match generate_pairing(standings, rng) {
            Err(e @ TournamentError::IncompleteRound { .. }) => {
                Ok(Outcome::clean(format!("{}\n", e)))
            }
            Err(e) => Err(e),
            Ok(proposal) => {
                if confirm(&proposal) {
                    standings.confirm_pairing(proposal);
                    Ok(Outcome::changed(
                        true,
                        format!("Pairing confirmed for round {}\n", standings.round()),
                    ))
                } else {
                    Ok(Outcome::clean("Pairing discarded\n"))
                }
            }
        },
        Command::PrintPairing => Ok(Outcome::clean(format_pairing(standings))),
        Command::PrintResults => Ok(Outcome::clean(format_results(standings))),
    }
}

/// Only `y` (any case, surrounding whitespace ignored) accepts a pairing.
pub fn parse_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_accepts_only_y() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation(" Y "));
        assert!(!parse_confirmation("yes"));
        assert!(!parse_confirmation(""));
        assert!(!parse_confirmation("n"));
    }
}
