pub mod fuzzy;
pub mod rank;
pub mod report;

pub use fuzzy::{Matcher, SCORE_MAX, SCORE_MIN, Score, has_match};
pub use rank::{RankedMatch, Ranker};
pub use report::MatchReport;
