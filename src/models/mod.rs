//! Data structures for the tournament: players, pools, pairings, standings.

mod pairing;
mod player;
mod standings;

pub use pairing::{Matchup, ProposedPairing};
pub use player::{PlayerId, Pool};
pub use standings::{Standings, TournamentError};
