//! Decoding of comma-separated command arguments.

use crate::models::{PlayerId, TournamentError};

/// Split `"12, 32,,7"` into ids; blanks are skipped.
pub fn parse_id_list(values: &str) -> Vec<PlayerId> {
    values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(PlayerId::from)
        .collect()
}

/// Decode winner tokens such as `"12w,14w"`: the last character of each token
/// is the result marker and is stripped to recover the id.
pub fn parse_winner_tokens(values: &str) -> Result<Vec<PlayerId>, TournamentError> {
    values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            chars.next_back();
            let id = chars.as_str();
            if id.is_empty() {
                Err(TournamentError::InvalidArgument(format!(
                    "result `{}` has no player id before its marker",
                    token
                )))
            } else {
                Ok(PlayerId::from(id))
            }
        })
        .collect()
}
