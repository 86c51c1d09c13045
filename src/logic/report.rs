//! Text reports: current pairing, leaderboard, and a proposal awaiting confirmation.

use crate::models::{ProposedPairing, Standings};

/// The active round, one match per line, with the winner once recorded.
pub fn format_pairing(standings: &Standings) -> String {
    if standings.current_pairing().is_empty() {
        return "No current pairing\n".to_string();
    }
    let mut out = format!("Pairing round {}:\n", standings.round());
    for (spirit, witch) in standings.current_pairing() {
        out.push_str(&format!("{}\tvs\t{}", spirit, witch));
        let winners = standings.current_winners();
        if let Some(w) = [spirit, witch].into_iter().find(|p| winners.contains(*p)) {
            out.push_str(&format!("\t winner={}", w));
        }
        out.push('\n');
    }
    out
}

/// Leaderboard, most victories first; ties keep id order.
pub fn format_results(standings: &Standings) -> String {
    if standings.scores().is_empty() {
        return "No results yet\n".to_string();
    }
    let mut rows: Vec<_> = standings.scores().iter().collect();
    rows.sort_by(|(a_id, a), (b_id, b)| b.cmp(a).then_with(|| a_id.cmp(b_id)));
    rows.into_iter()
        .map(|(id, score)| format!("{}:\t{} victories\n", id, score))
        .collect()
}

/// A freshly generated pairing, including the compact `AvB` line used for
/// pasting into the external bracket site.
pub fn format_proposal(proposal: &ProposedPairing) -> String {
    let mut out = String::from("New pairing:\n");
    for m in &proposal.matches {
        out.push_str(&format!("{}\tvs\t{}\n", m.spirit, m.witch));
    }
    out.push('\n');
    if !proposal.unpaired.is_empty() {
        let names: Vec<String> = proposal.unpaired.iter().map(|p| p.to_string()).collect();
        out.push_str(&format!("Players without pairing: {}\n\n", names.join(" ")));
    }
    out.push_str("Pairing for toornament:\n");
    let compact: Vec<String> = proposal
        .matches
        .iter()
        .map(|m| format!("{}v{}", m.spirit, m.witch))
        .collect();
    out.push_str(&compact.join(" "));
    out.push('\n');
    out
}
