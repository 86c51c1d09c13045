//! Pairing engine: score-bucketed greedy matching of spirits against witches.

use crate::models::{Matchup, PlayerId, Pool, ProposedPairing, Standings, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Propose the next round's pairing. Nothing in `standings` changes; pass the
/// result to [`Standings::confirm_pairing`] to commit it, or drop it to reject.
///
/// 1. Refuse while the active round has matches without a winner.
/// 2. Bucket players by score and walk the buckets from the highest score down.
/// 3. Each bucket's players plus the overflow from the bucket above are split by
///    pool and both sides shuffled.
/// 4. Spirits are popped one at a time and take the first witch they have not
///    faced yet; a spirit with no such witch goes to overflow, as do any witches
///    left over once the spirits run out.
/// 5. Whatever overflows past the last bucket is reported as unpaired.
///
/// `rng` drives the shuffles; pass a seeded generator for reproducible output.
pub fn generate_pairing<R: Rng + ?Sized>(
    standings: &Standings,
    rng: &mut R,
) -> Result<ProposedPairing, TournamentError> {
    if !standings.current_pairing().is_empty() {
        let missing = standings.missing_results();
        if missing > 0 {
            return Err(TournamentError::IncompleteRound { missing });
        }
    }

    let mut groups: BTreeMap<u32, Vec<PlayerId>> = BTreeMap::new();
    for (id, &score) in standings.scores() {
        groups.entry(score).or_default().push(id.clone());
    }

    let mut proposal = ProposedPairing::default();
    let mut overflow: Vec<PlayerId> = Vec::new();

    for (score, mut working) in groups.into_iter().rev() {
        working.append(&mut overflow);

        let (mut spirits, mut witches) = split_by_pool(standings, working);
        spirits.shuffle(rng);
        witches.shuffle(rng);

        while let Some(spirit) = spirits.pop() {
            match witches.iter().position(|w| !standings.has_faced(&spirit, w)) {
                Some(i) => {
                    let witch = witches.remove(i);
                    proposal.matches.push(Matchup { spirit, witch });
                }
                None => overflow.push(spirit),
            }
        }
        overflow.append(&mut witches);

        log::debug!(
            "Score group {}: {} match(es) so far, {} carried over",
            score,
            proposal.matches.len(),
            overflow.len()
        );
    }

    proposal.unpaired = overflow;
    Ok(proposal)
}

/// Split players into (spirits, witches). Players in neither pool are skipped.
fn split_by_pool(standings: &Standings, players: Vec<PlayerId>) -> (Vec<PlayerId>, Vec<PlayerId>) {
    let mut spirits = Vec::new();
    let mut witches = Vec::new();
    for id in players {
        match standings.pool_of(&id) {
            Some(Pool::Spirit) => spirits.push(id),
            Some(Pool::Witch) => witches.push(id),
            None => log::warn!("Player {} has a score but no pool; leaving out of pairing", id),
        }
    }
    (spirits, witches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ids(list: &[&str]) -> Vec<PlayerId> {
        list.iter().map(|v| PlayerId::from(*v)).collect()
    }

    fn standings(spirits: &[&str], witches: &[&str]) -> Standings {
        let mut s = Standings::new();
        s.initialize_pool(Pool::Spirit, &ids(spirits)).unwrap();
        s.initialize_pool(Pool::Witch, &ids(witches)).unwrap();
        s
    }

    #[test]
    fn higher_scores_are_paired_together_first() {
        let mut s = standings(&["1", "2"], &["3", "4"]);
        s.scores.insert("1".into(), 1);
        s.scores.insert("3".into(), 1);

        for seed in 0..16 {
            let p = generate_pairing(&s, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert!(p.matches.contains(&Matchup::new("1", "3")));
            assert!(p.matches.contains(&Matchup::new("2", "4")));
            assert!(p.unpaired.is_empty());
        }
    }

    #[test]
    fn overflow_joins_the_next_group() {
        // 1 and 3 lead but already met; both fall through to the 0-win group,
        // where 2 and 4 have played each other too.
        let mut s = standings(&["1", "2"], &["3", "4"]);
        s.scores.insert("1".into(), 1);
        s.scores.insert("3".into(), 1);
        s.history.get_mut(&PlayerId::from("1")).unwrap().insert("3".into());
        s.history.get_mut(&PlayerId::from("3")).unwrap().insert("1".into());
        s.history.get_mut(&PlayerId::from("2")).unwrap().insert("4".into());
        s.history.get_mut(&PlayerId::from("4")).unwrap().insert("2".into());

        let p = generate_pairing(&s, &mut StdRng::seed_from_u64(3)).unwrap();
        let mut got = p.matches.clone();
        got.sort_by(|a, b| a.spirit.cmp(&b.spirit));
        assert_eq!(got, vec![Matchup::new("1", "4"), Matchup::new("2", "3")]);
        assert!(p.unpaired.is_empty());
    }

    #[test]
    fn player_without_pool_is_left_out() {
        let mut s = standings(&["1"], &["2"]);
        s.scores.insert("ghost".into(), 0);
        let p = generate_pairing(&s, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(p.matches, vec![Matchup::new("1", "2")]);
        assert!(p.unpaired.is_empty());
    }
}
