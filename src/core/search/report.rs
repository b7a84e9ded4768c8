use super::fuzzy::Score;
use super::rank::{RankedMatch, Ranker};
use serde::{Serialize, Serializer};

/// One ranked candidate as printed by the non-interactive listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub text: String,
    #[serde(serialize_with = "serialize_score")]
    pub score: Score,
    pub positions: Vec<usize>,
}

impl MatchReport {
    pub fn build<S: AsRef<str>>(
        ranker: &mut Ranker,
        query: &str,
        candidates: &[S],
        matches: &[RankedMatch],
    ) -> Vec<Self> {
        matches
            .iter()
            .filter_map(|entry| {
                let text = candidates.get(entry.index)?.as_ref();
                Some(Self {
                    text: text.to_string(),
                    score: entry.score,
                    positions: ranker.positions(query, text, entry.score),
                })
            })
            .collect()
    }
}

pub fn format_score(score: Score) -> String {
    if score.is_finite() {
        format!("({score:5.2})")
    } else if score > 0.0 {
        "(  inf)".to_string()
    } else {
        "( -inf)".to_string()
    }
}

// JSON has no infinities; the sentinels are written as strings instead.
fn serialize_score<S: Serializer>(score: &Score, serializer: S) -> Result<S::Ok, S::Error> {
    if score.is_finite() {
        serializer.serialize_f64(*score)
    } else if *score > 0.0 {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}
