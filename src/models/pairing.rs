//! Matchups and the proposed (not yet confirmed) pairing for a round.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// A single cross-pool match: one spirit against one witch.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub spirit: PlayerId,
    pub witch: PlayerId,
}

impl Matchup {
    pub fn new(spirit: impl Into<PlayerId>, witch: impl Into<PlayerId>) -> Self {
        Self {
            spirit: spirit.into(),
            witch: witch.into(),
        }
    }

    /// True if `id` plays in this match.
    pub fn involves(&self, id: &PlayerId) -> bool {
        &self.spirit == id || &self.witch == id
    }
}

/// Output of the pairing engine. Holds nothing the store has committed to:
/// dropping it is how a proposal is rejected.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProposedPairing {
    /// Matches in the order the engine created them.
    pub matches: Vec<Matchup>,
    /// Players left in overflow after the lowest score group.
    pub unpaired: Vec<PlayerId>,
}

impl ProposedPairing {
    /// Every player that appears in a match, spirits and witches alike.
    pub fn participants(&self) -> impl Iterator<Item = &PlayerId> {
        self.matches.iter().flat_map(|m| [&m.spirit, &m.witch])
    }
}
