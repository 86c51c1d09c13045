//! Tournament business logic: argument decoding, pairing, reports.

mod input;
mod pairing;
mod report;

pub use input::{parse_id_list, parse_winner_tokens};
pub use pairing::generate_pairing;
pub use report::{format_pairing, format_proposal, format_results};
