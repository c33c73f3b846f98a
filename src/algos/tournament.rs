use crate::domain::model::MatchRecord;
use std::collections::HashMap;

pub const WIN_POINTS: i64 = 1;

// Time: O(n) | Space: O(k), n rounds over k distinct players.
// The leader only changes on a strictly greater score, so the earlier of two
// tied players keeps the title.
pub fn season_winner(rounds: &[MatchRecord]) -> Option<String> {
    let mut scores: HashMap<&str, i64> = HashMap::new();
    let mut leader: Option<String> = None;

    for round in rounds {
        let winner = if round.host_won {
            round.host.as_str()
        } else {
            round.guest.as_str()
        };

        let new_score = {
            let entry = scores.entry(winner).or_insert(0);
            *entry += WIN_POINTS;
            *entry
        };

        let leading_score = leader
            .as_deref()
            .and_then(|name| scores.get(name))
            .copied()
            .unwrap_or(0);

        if new_score > leading_score {
            leader = Some(winner.to_string());
        }
    }

    leader
}
