use crate::core::search::{RankedMatch, Ranker, Score};

pub const DEFAULT_VISIBLE_ROWS: usize = 10;

/// A ranked entry as it appears in the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleMatch<'a> {
    pub text: &'a str,
    pub score: Score,
    pub selected: bool,
}

/// Query, ranked list and cursor for one picking session.
///
/// The selected index always stays below `min(visible_rows, matches.len())`
/// (or at 0 when nothing matches).
#[derive(Debug, Clone)]
pub struct SelectionState {
    candidates: Vec<String>,
    query: String,
    matches: Vec<RankedMatch>,
    selected: usize,
    visible_rows: usize,
    ranker: Ranker,
}

impl SelectionState {
    pub fn new(candidates: Vec<String>, visible_rows: usize) -> Self {
        let mut state = Self {
            candidates,
            query: String::new(),
            matches: Vec::new(),
            selected: 0,
            visible_rows: visible_rows.max(1),
            ranker: Ranker::new(),
        };
        state.refilter();
        state
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self.refilter();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[RankedMatch] {
        &self.matches
    }

    pub fn candidate(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(String::as_str)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn insert_char(&mut self, ch: char) {
        self.query.push(ch);
        self.refilter();
    }

    pub fn delete_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.selection_limit());
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.matches
            .get(self.selected)
            .and_then(|entry| self.candidate(entry.index))
    }

    pub fn visible_matches(&self) -> Vec<VisibleMatch<'_>> {
        self.matches
            .iter()
            .take(self.visible_rows)
            .enumerate()
            .filter_map(|(row, entry)| {
                Some(VisibleMatch {
                    text: self.candidate(entry.index)?,
                    score: entry.score,
                    selected: row == self.selected,
                })
            })
            .collect()
    }

    fn selection_limit(&self) -> usize {
        self.visible_rows
            .min(self.matches.len())
            .saturating_sub(1)
    }

    fn refilter(&mut self) {
        self.matches = self.ranker.rank(&self.query, &self.candidates);
        self.selected = 0;
    }
}
