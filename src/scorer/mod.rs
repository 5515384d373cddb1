//! Fuzzy scoring of a subject against a prepared query.
//!
//! Scoring tries, in order:
//!
//! 1. an exact acronym, every query char aligned to a word start;
//! 2. an exact (case-insensitive) substring, preferring one that starts a word;
//! 3. a dynamic program over subject chars `i` and query chars `j`, keeping one
//!    row of best scores and one row of consecutive-run scores.
//!
//! The dynamic program gives up once too many subject chars in a row fail to
//! improve the alignment (the miss budget), which bounds the cost of long
//! subjects that match poorly.

pub(crate) mod acronym;
pub(crate) mod boundary;
pub(crate) mod pattern;

use crate::options::Options;
use crate::query::Query;
use crate::subject::{Subject, SubjectBuf};

use acronym::score_acronyms;
use boundary::{is_word_end, is_word_start};
use pattern::{score_character, score_consecutives, score_exact, score_pattern, score_size};

/// Relevance of a subject; `0` means no match
pub type Score = u64;

/// The miss budget is this fraction of the query length, plus [`MISS_SLACK`]
const MISS_COEFF: f64 = 0.75;
const MISS_SLACK: usize = 5;

/// Something that scores subjects against a prepared query
pub trait ScoreProvider: Send + Sync {
    /// Score `subject` against `query`; `0` means no match
    fn score(&self, subject: &str, query: &Query, options: &Options) -> Score;
}

/// Plain fuzzy scorer, treating the subject as an opaque string
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzyScorer;

impl ScoreProvider for FuzzyScorer {
    fn score(&self, subject: &str, query: &Query, options: &Options) -> Score {
        if !(options.allow_errors || is_subsequence(subject, query)) {
            return 0;
        }
        let buf = SubjectBuf::new(subject);
        to_score(compute_score(&buf.as_subject(), query))
    }
}

/// The scorer selected by `options.use_path_scoring`
pub fn provider_for(options: &Options) -> &'static dyn ScoreProvider {
    if options.use_path_scoring {
        &crate::path::PathScorer
    } else {
        &FuzzyScorer
    }
}

/// Whether the query core occurs in `subject` as a case-insensitive subsequence.
///
/// Cheap rejection test run before scoring: a `false` here means the subject
/// scores `0` unless `allow_errors` is set.
pub fn is_subsequence(subject: &str, query: &Query) -> bool {
    if subject.is_empty() {
        return false;
    }
    let mut chars = subject.chars();
    query
        .core_lower()
        .iter()
        .zip(query.core_upper())
        .all(|(&lower, &upper)| chars.any(|c| c == lower || c == upper))
}

#[inline]
pub(crate) fn to_score(raw: f64) -> Score {
    raw.ceil() as Score
}

/// Unrounded score of `subject` against `query`
pub(crate) fn compute_score(subject: &Subject, query: &Query) -> f64 {
    let n = query.len();
    let m = subject.len();

    let acronym = score_acronyms(subject, query);
    if acronym.count == n {
        return score_exact(n, m, acronym.score, acronym.pos);
    }

    if let Some(pos) = locate_exact(subject, query) {
        return score_exact_match(subject, query, pos);
    }

    align(subject, query, acronym.score, |_| ()) * score_size(n as f64, m as f64)
}

/// Position of the query as a case-insensitive substring of the subject.
///
/// When the first occurrence does not start a word but the next one does, the
/// next one is used.
pub(crate) fn locate_exact(subject: &Subject, query: &Query) -> Option<usize> {
    let pos = subject.find_lower(query.lower(), 0)?;
    if is_word_start(pos, subject) {
        return Some(pos);
    }
    match subject.find_lower(query.lower(), pos + 1) {
        Some(next) if is_word_start(next, subject) => Some(next),
        _ => Some(pos),
    }
}

fn score_exact_match(subject: &Subject, query: &Query, pos: usize) -> f64 {
    let n = query.len();
    let start = is_word_start(pos, subject);
    let same_case = query
        .chars()
        .iter()
        .zip(&subject.chars[pos..pos + n])
        .filter(|(q, s)| q == s)
        .count();
    let end = is_word_end(pos + n - 1, subject);
    score_exact(n, subject.len(), score_pattern(n, n, same_case, start, end), pos as f64)
}

/// Run the alignment dynamic program and return its best (unscaled) score.
///
/// `on_match` sees every subject index where a query char matched and the
/// alignment was still running, in ascending order (an index may repeat when
/// several query chars match it).
pub(crate) fn align<F>(subject: &Subject, query: &Query, acronym: f64, mut on_match: F) -> f64
where
    F: FnMut(usize),
{
    let n = query.len();
    let lower = query.lower();
    let miss_budget = (MISS_COEFF * n as f64).ceil() as usize + MISS_SLACK;
    let mut miss_left = miss_budget;

    let mut score_row = vec![0.0f64; n];
    let mut csc_row = vec![0.0f64; n];
    // consecutive runs are cleared once per stretch of chars absent from the query
    let mut csc_should_rebuild = true;

    for i in 0..subject.len() {
        let si = subject.lower[i];
        if !query.has_char(si) {
            if csc_should_rebuild {
                csc_row.fill(0.0);
                csc_should_rebuild = false;
            }
            continue;
        }

        let mut score = 0.0f64;
        let mut score_diag = 0.0;
        let mut csc_diag = 0.0;
        let mut record_miss = true;
        csc_should_rebuild = true;

        for j in 0..n {
            let score_up = score_row[j];
            if score_up > score {
                score = score_up;
            }

            let mut csc_score = 0.0;
            if lower[j] == si {
                let start = is_word_start(i, subject);
                csc_score = if csc_diag > 0.0 {
                    csc_diag
                } else {
                    score_consecutives(subject, query, i, j, start)
                };
                let aligned = score_diag + score_character(i, start, acronym, csc_score);

                if aligned > score {
                    score = aligned;
                    miss_left = miss_budget;
                } else {
                    // at most one miss per subject char
                    if record_miss {
                        miss_left -= 1;
                        if miss_left == 0 {
                            return score.max(score_row[n - 1]);
                        }
                    }
                    record_miss = false;
                }

                on_match(i);
            }

            score_diag = score_up;
            csc_diag = csc_row[j];
            csc_row[j] = csc_score;
            score_row[j] = score;
        }
    }

    score_row[n - 1]
}
