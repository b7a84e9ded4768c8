use super::fuzzy::{Matcher, SCORE_MIN, Score, has_match};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch {
    /// Position of the candidate in the original input.
    pub index: usize,
    pub score: Score,
}

/// Filters and orders candidates for a query. Nothing is cached between
/// calls; only the scoring buffers are reused.
#[derive(Debug, Default, Clone)]
pub struct Ranker {
    matcher: Matcher,
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank<S: AsRef<str>>(&mut self, query: &str, candidates: &[S]) -> Vec<RankedMatch> {
        if query.is_empty() {
            // The scorer treats an empty needle as a non-match, but an empty
            // query must still list everything in input order.
            return (0..candidates.len())
                .map(|index| RankedMatch { index, score: 0.0 })
                .collect();
        }

        let matcher = &mut self.matcher;
        let mut matches = candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| has_match(query, candidate.as_ref()))
            .map(|(index, candidate)| RankedMatch {
                index,
                score: matcher.score(query, candidate.as_ref()),
            })
            .collect::<Vec<_>>();

        // Stable: equal scores keep input order.
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches
    }

    /// Highlight positions for a ranked entry; empty when there is nothing
    /// meaningful to highlight.
    pub fn positions(&mut self, query: &str, candidate: &str, score: Score) -> Vec<usize> {
        if query.is_empty() || score == SCORE_MIN {
            return Vec::new();
        }
        self.matcher.positions(query, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::fuzzy::{MATCH_MAX_LEN, SCORE_MAX};

    fn texts<'a>(candidates: &'a [&'a str], matches: &[RankedMatch]) -> Vec<&'a str> {
        matches.iter().map(|m| candidates[m.index]).collect()
    }

    #[test]
    fn empty_query_keeps_every_candidate_in_input_order() {
        let candidates = ["zeta", "alpha", "mid"];
        let matches = Ranker::new().rank("", &candidates);
        assert_eq!(texts(&candidates, &matches), vec!["zeta", "alpha", "mid"]);
        assert!(matches.iter().all(|m| m.score == 0.0));
    }

    #[test]
    fn tighter_prefix_matches_rank_first() {
        let candidates = ["apricot", "apple", "apply"];
        let matches = Ranker::new().rank("ap", &candidates);
        assert_eq!(texts(&candidates, &matches), vec!["apple", "apply", "apricot"]);
    }

    #[test]
    fn non_matching_candidates_are_dropped() {
        let candidates = ["src/main.rs", "Cargo.toml", "src/lib.rs"];
        let matches = Ranker::new().rank("srs", &candidates);
        assert_eq!(texts(&candidates, &matches), vec!["src/lib.rs", "src/main.rs"]);
    }

    #[test]
    fn exact_match_outranks_everything() {
        let candidates = ["foobar", "foo", "foo/bar"];
        let matches = Ranker::new().rank("FOO", &candidates);
        assert_eq!(matches[0].index, 1);
        assert_eq!(matches[0].score, SCORE_MAX);
    }

    #[test]
    fn oversized_candidates_sink_to_the_bottom() {
        let long = format!("a{}", "x".repeat(MATCH_MAX_LEN));
        let candidates = [long.as_str(), "xa"];
        let matches = Ranker::new().rank("a", &candidates);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].index, 1);
        assert_eq!(matches[1].score, SCORE_MIN);
    }

    #[test]
    fn ranking_is_deterministic() {
        let candidates = ["a/b/c", "abc", "a-b-c", "xaxbxc", "ABC.txt"];
        let mut ranker = Ranker::new();
        let first = ranker.rank("abc", &candidates);
        let second = ranker.rank("abc", &candidates);
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_candidates_stay_distinct() {
        let candidates = ["same", "same"];
        let matches = Ranker::new().rank("sm", &candidates);
        assert_eq!(matches.iter().map(|m| m.index).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn positions_are_skipped_for_empty_query_and_unscored_entries() {
        let mut ranker = Ranker::new();
        assert!(ranker.positions("", "abc", 0.0).is_empty());
        assert!(ranker.positions("a", "abc", SCORE_MIN).is_empty());
        assert_eq!(ranker.positions("ac", "abc", 0.5), vec![0, 2]);
    }
}
