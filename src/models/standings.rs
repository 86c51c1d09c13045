//! Standings: pools, scores, opponent history and the current round.

use crate::models::pairing::{Matchup, ProposedPairing};
use crate::models::player::{PlayerId, Pool};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Bad pool name, malformed command arguments, or a setup action after the start.
    InvalidArgument(String),
    /// The current round still has matches without a recorded winner.
    IncompleteRound { missing: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            TournamentError::IncompleteRound { missing } => {
                write!(f, "Cannot generate new pairing, missing {} result(s)", missing)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Full tournament state as persisted in the record store.
///
/// Field names on disk follow the historical `db.json` layout, so `scores` is
/// stored as `results` and `history` as `players`. Every field defaults, which
/// lets an empty object load as a fresh tournament.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standings {
    pub spirit_pool: Vec<PlayerId>,
    pub witch_pool: Vec<PlayerId>,
    /// Win count per registered player.
    #[serde(rename = "results")]
    pub scores: BTreeMap<PlayerId, u32>,
    /// Opponents each player has already faced. Kept symmetric.
    #[serde(rename = "players")]
    pub history: BTreeMap<PlayerId, BTreeSet<PlayerId>>,
    /// Active round: spirit -> witch.
    pub current_pairing: BTreeMap<PlayerId, PlayerId>,
    /// Players who won their match in the active round.
    pub current_winners: BTreeSet<PlayerId>,
    /// Players whose score went up this round. Unlike `current_winners`, a
    /// drop never removes the surviving winner from here.
    pub credited_this_round: BTreeSet<PlayerId>,
    /// Number of confirmed pairings; 0 until the tournament starts.
    pub round: u32,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self, pool: Pool) -> &[PlayerId] {
        match pool {
            Pool::Spirit => &self.spirit_pool,
            Pool::Witch => &self.witch_pool,
        }
    }

    fn pool_mut(&mut self, pool: Pool) -> &mut Vec<PlayerId> {
        match pool {
            Pool::Spirit => &mut self.spirit_pool,
            Pool::Witch => &mut self.witch_pool,
        }
    }

    /// Which pool `id` belongs to, if any.
    pub fn pool_of(&self, id: &PlayerId) -> Option<Pool> {
        if self.spirit_pool.contains(id) {
            Some(Pool::Spirit)
        } else if self.witch_pool.contains(id) {
            Some(Pool::Witch)
        } else {
            None
        }
    }

    /// Current win count; unknown players count as 0.
    pub fn score(&self, id: &PlayerId) -> u32 {
        self.scores.get(id).copied().unwrap_or(0)
    }

    pub fn scores(&self) -> &BTreeMap<PlayerId, u32> {
        &self.scores
    }

    /// Opponents already faced by `id`; `None` when the player has no history entry.
    pub fn opponents(&self, id: &PlayerId) -> Option<&BTreeSet<PlayerId>> {
        self.history.get(id)
    }

    /// True if `a` and `b` met in a confirmed round. Checks both directions so
    /// a half-written history from an older store still blocks the rematch.
    pub fn has_faced(&self, a: &PlayerId, b: &PlayerId) -> bool {
        let faced = |x: &PlayerId, y: &PlayerId| self.history.get(x).is_some_and(|s| s.contains(y));
        faced(a, b) || faced(b, a)
    }

    pub fn current_pairing(&self) -> &BTreeMap<PlayerId, PlayerId> {
        &self.current_pairing
    }

    pub fn current_winners(&self) -> &BTreeSet<PlayerId> {
        &self.current_winners
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// True once the first pairing has been confirmed.
    pub fn is_started(&self) -> bool {
        self.round > 0
    }

    /// Matches of the active round still waiting for a winner.
    pub fn missing_results(&self) -> usize {
        self.current_pairing
            .len()
            .saturating_sub(self.current_winners.len())
    }

    /// The match of the active round that `id` plays in.
    pub fn current_match_of(&self, id: &PlayerId) -> Option<Matchup> {
        self.current_pairing
            .iter()
            .map(|(s, w)| Matchup::new(s.clone(), w.clone()))
            .find(|m| m.involves(id))
    }

    /// Register players in a pool with zero score and empty history.
    ///
    /// Players already in the pool keep their score and history. Fails once the
    /// tournament has started, or if a player already belongs to the other pool.
    /// Returns how many players were newly added.
    pub fn initialize_pool(
        &mut self,
        pool: Pool,
        ids: &[PlayerId],
    ) -> Result<usize, TournamentError> {
        if self.is_started() {
            return Err(TournamentError::InvalidArgument(
                "Cannot initialize an already started tournament".to_string(),
            ));
        }
        if ids.is_empty() {
            return Err(TournamentError::InvalidArgument(format!(
                "no player ids given for the {} pool",
                pool
            )));
        }
        let other = self.pool(pool.opposite());
        if let Some(clash) = ids.iter().find(|id| other.contains(id)) {
            return Err(TournamentError::InvalidArgument(format!(
                "player {} is already in the {} pool",
                clash,
                pool.opposite()
            )));
        }

        let mut added = 0;
        for id in ids {
            if self.pool(pool).contains(id) {
                continue;
            }
            self.pool_mut(pool).push(id.clone());
            self.scores.entry(id.clone()).or_insert(0);
            self.history.entry(id.clone()).or_default();
            added += 1;
        }
        log::info!("Registered {} new player(s) in the {} pool", added, pool);
        Ok(added)
    }

    /// Record match winners for the active round.
    ///
    /// A player already credited this round is ignored, so repeated input never
    /// scores twice, even after their opponent was dropped.
    ///
    /// This is stricter than crediting any id: unregistered ids, players
    /// outside the active pairing and the opponent of an existing winner are
    /// skipped with a warning instead of scoring.
    /// Returns how many winners were newly recorded.
    pub fn record_results(&mut self, winners: &[PlayerId]) -> usize {
        let mut recorded = 0;
        for id in winners {
            if self.current_winners.contains(id) || self.credited_this_round.contains(id) {
                continue;
            }
            if self.pool_of(id).is_none() {
                log::warn!("Ignoring result for unknown player {}", id);
                continue;
            }
            if !self.current_pairing.is_empty() {
                match self.current_match_of(id) {
                    None => {
                        log::warn!("Ignoring result for {}: not in the current pairing", id);
                        continue;
                    }
                    Some(m) => {
                        let opponent = if m.spirit == *id { &m.witch } else { &m.spirit };
                        if self.current_winners.contains(opponent) {
                            log::warn!(
                                "Ignoring result for {}: {} already won that match",
                                id,
                                opponent
                            );
                            continue;
                        }
                    }
                }
            }
            *self.scores.entry(id.clone()).or_insert(0) += 1;
            self.current_winners.insert(id.clone());
            self.credited_this_round.insert(id.clone());
            recorded += 1;
        }
        if recorded > 0 {
            log::info!("Recorded {} result(s) for round {}", recorded, self.round);
        }
        recorded
    }

    /// Remove a player from pools, scores, history (including other players'
    /// opponent sets) and the active pairing. Returns false if nothing referenced `id`.
    pub fn drop_player(&mut self, id: &PlayerId) -> bool {
        let before = (self.spirit_pool.len(), self.witch_pool.len());
        self.spirit_pool.retain(|p| p != id);
        self.witch_pool.retain(|p| p != id);
        let mut changed = before != (self.spirit_pool.len(), self.witch_pool.len());

        changed |= self.scores.remove(id).is_some();
        changed |= self.history.remove(id).is_some();
        for opponents in self.history.values_mut() {
            changed |= opponents.remove(id);
        }

        if let Some(m) = self.current_match_of(id) {
            self.current_pairing.remove(&m.spirit);
            self.current_winners.remove(&m.spirit);
            self.current_winners.remove(&m.witch);
            changed = true;
        }
        changed |= self.current_winners.remove(id);
        changed |= self.credited_this_round.remove(id);

        if changed {
            log::info!("Dropped player {}", id);
        }
        changed
    }

    /// Commit a proposal: it becomes the active round, winners reset, the round
    /// counter advances and every match is written to both players' history.
    pub fn confirm_pairing(&mut self, proposal: ProposedPairing) {
        self.current_pairing.clear();
        for m in proposal.matches {
            self.history
                .entry(m.spirit.clone())
                .or_default()
                .insert(m.witch.clone());
            self.history
                .entry(m.witch.clone())
                .or_default()
                .insert(m.spirit.clone());
            self.current_pairing.insert(m.spirit, m.witch);
        }
        self.current_winners.clear();
        self.credited_this_round.clear();
        self.round += 1;
        log::info!(
            "Confirmed pairing for round {} ({} match(es))",
            self.round,
            self.current_pairing.len()
        );
    }
}
