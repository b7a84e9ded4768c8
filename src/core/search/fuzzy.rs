//! fzy-style scoring: a two-matrix dynamic program that finds the best
//! alignment of a needle inside a haystack under gap penalties and
//! positional bonuses.

pub type Score = f64;

pub const SCORE_MIN: Score = f64::NEG_INFINITY;
pub const SCORE_MAX: Score = f64::INFINITY;

pub const SCORE_GAP_LEADING: Score = -0.005;
pub const SCORE_GAP_TRAILING: Score = -0.005;
pub const SCORE_GAP_INNER: Score = -0.01;
pub const SCORE_MATCH_CONSECUTIVE: Score = 1.0;
pub const SCORE_MATCH_SLASH: Score = 0.9;
pub const SCORE_MATCH_WORD: Score = 0.8;
pub const SCORE_MATCH_CAPITAL: Score = 0.7;
pub const SCORE_MATCH_DOT: Score = 0.6;

/// Haystacks longer than this (in chars) are never scored.
pub const MATCH_MAX_LEN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shortcut {
    NoMatch,
    Exact,
    Compute,
}

/// Scratch space for scoring. Keeping one `Matcher` alive across calls lets
/// the matrices be reused instead of reallocated per candidate.
#[derive(Debug, Default, Clone)]
pub struct Matcher {
    needle: Vec<char>,
    haystack: Vec<char>,
    bonus: Vec<Score>,
    // Row-major n x m. `d[i*m + j]`: needle[i] matched exactly at j.
    d: Vec<Score>,
    // Best score for needle[..=i] within haystack[..=j].
    m: Vec<Score>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&mut self, needle: &str, haystack: &str) -> Score {
        match self.prepare(needle, haystack) {
            Shortcut::NoMatch => SCORE_MIN,
            Shortcut::Exact => SCORE_MAX,
            Shortcut::Compute => {
                self.compute();
                self.m.last().copied().unwrap_or(SCORE_MIN)
            }
        }
    }

    /// Haystack char index consumed by each needle char in the best alignment.
    ///
    /// Unscoreable pairs (empty input, oversized haystack) yield all zeros,
    /// one entry per needle char.
    pub fn positions(&mut self, needle: &str, haystack: &str) -> Vec<usize> {
        match self.prepare(needle, haystack) {
            Shortcut::NoMatch => vec![0; self.needle.len()],
            Shortcut::Exact => (0..self.needle.len()).collect(),
            Shortcut::Compute => {
                self.compute();
                self.trace_back()
            }
        }
    }

    fn prepare(&mut self, needle: &str, haystack: &str) -> Shortcut {
        self.needle.clear();
        self.needle.extend(needle.chars().map(fold));

        self.haystack.clear();
        self.bonus.clear();
        let mut last = '/';
        for ch in haystack.chars() {
            self.haystack.push(fold(ch));
            self.bonus.push(bonus_for(last, ch));
            last = ch;
        }

        let (n, m) = (self.needle.len(), self.haystack.len());
        if n == 0 || m == 0 {
            return Shortcut::NoMatch;
        }
        if n == m {
            // Same length: either identical (case-insensitively) or not a
            // subsequence at all.
            return if self.needle == self.haystack {
                Shortcut::Exact
            } else {
                Shortcut::NoMatch
            };
        }
        if m > MATCH_MAX_LEN {
            return Shortcut::NoMatch;
        }
        Shortcut::Compute
    }

    fn compute(&mut self) {
        let (n, m) = (self.needle.len(), self.haystack.len());
        self.d.clear();
        self.d.resize(n * m, SCORE_MIN);
        self.m.clear();
        self.m.resize(n * m, SCORE_MIN);

        for i in 0..n {
            let gap = if i == n - 1 {
                SCORE_GAP_TRAILING
            } else {
                SCORE_GAP_INNER
            };
            let mut prev = SCORE_MIN;

            for j in 0..m {
                let at = i * m + j;
                if self.needle[i] == self.haystack[j] {
                    let score = if i == 0 {
                        j as Score * SCORE_GAP_LEADING + self.bonus[j]
                    } else if j > 0 {
                        let diag = at - m - 1;
                        (self.m[diag] + self.bonus[j])
                            .max(self.d[diag] + SCORE_MATCH_CONSECUTIVE)
                    } else {
                        SCORE_MIN
                    };
                    self.d[at] = score;
                    prev = score.max(prev + gap);
                } else {
                    self.d[at] = SCORE_MIN;
                    prev += gap;
                }
                self.m[at] = prev;
            }
        }
    }

    fn trace_back(&self) -> Vec<usize> {
        let (n, m) = (self.needle.len(), self.haystack.len());
        let mut positions = vec![0; n];
        let mut match_required = false;
        let mut j = m;

        for i in (0..n).rev() {
            while j > 0 {
                j -= 1;
                let at = i * m + j;
                let d = self.d[at];
                if d != SCORE_MIN && (match_required || d == self.m[at]) {
                    // Stay on a consecutive run if this cell was reached by extending one.
                    match_required =
                        i > 0 && j > 0 && d == self.d[at - m - 1] + SCORE_MATCH_CONSECUTIVE;
                    positions[i] = j;
                    break;
                }
            }
        }

        positions
    }
}

pub fn score(needle: &str, haystack: &str) -> Score {
    Matcher::new().score(needle, haystack)
}

pub fn positions(needle: &str, haystack: &str) -> Vec<usize> {
    Matcher::new().positions(needle, haystack)
}

/// Whether every needle char occurs in the haystack, in order, ignoring case.
pub fn has_match(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars().map(fold);
    needle
        .chars()
        .map(fold)
        .all(|wanted| rest.any(|ch| ch == wanted))
}

pub fn indices_to_ranges(indices: &[usize]) -> Vec<(usize, usize)> {
    let Some((&first, tail)) = indices.split_first() else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut start = first;
    let mut prev = first;

    for &idx in tail {
        if idx == prev + 1 {
            prev = idx;
            continue;
        }
        ranges.push((start, prev + 1));
        start = idx;
        prev = idx;
    }

    ranges.push((start, prev + 1));
    ranges
}

fn fold(ch: char) -> char {
    if ch.is_ascii() {
        ch.to_ascii_lowercase()
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}

fn bonus_for(last: char, ch: char) -> Score {
    match last {
        '/' => SCORE_MATCH_SLASH,
        '-' | '_' | ' ' => SCORE_MATCH_WORD,
        '.' => SCORE_MATCH_DOT,
        _ if last.is_lowercase() && ch.is_uppercase() => SCORE_MATCH_CAPITAL,
        _ => 0.0,
    }
}
