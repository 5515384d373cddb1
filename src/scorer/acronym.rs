//! Acronym alignment: query chars matched against word starts, in order.

use crate::query::Query;
use crate::scorer::boundary::{is_separator, is_word_start};
use crate::scorer::pattern::score_pattern;
use crate::subject::Subject;

/// Subjects longer than this many times the query never count as a full-word acronym
const ACRONYM_LENGTH_CAP: usize = 12;

/// Outcome of an acronym alignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Acronym {
    /// Pattern quality of the aligned word starts
    pub score: f64,
    /// Mean subject index of the aligned word starts
    pub pos: f64,
    /// Aligned word starts plus matched separators
    pub count: usize,
}

impl Acronym {
    pub const EMPTY: Acronym = Acronym {
        score: 0.0,
        pos: 0.1,
        count: 0,
    };
}

/// Walk the acronym alignment, calling `hit` with every aligned subject index.
///
/// Returns `(word_starts, separators, same_case, sum_pos)`.
fn align<F>(subject: &Subject, query: &Query, mut hit: F) -> (usize, usize, usize, usize)
where
    F: FnMut(usize),
{
    let chars = query.chars();
    let lower = query.lower();
    let m = subject.len();

    let mut count = 0;
    let mut sep_count = 0;
    let mut same_case = 0;
    let mut sum_pos = 0;
    let mut next = 0;

    for (j, &qc) in lower.iter().enumerate() {
        if is_separator(qc) {
            // a separator in the query must show up next in the subject, word start or not
            match (next..m).find(|&i| subject.lower[i] == qc) {
                Some(i) => {
                    sep_count += 1;
                    hit(i);
                    next = i + 1;
                    continue;
                }
                None => break,
            }
        }

        match (next..m).find(|&i| subject.lower[i] == qc && is_word_start(i, subject)) {
            Some(i) => {
                if chars[j] == subject.chars[i] {
                    same_case += 1;
                }
                sum_pos += i;
                count += 1;
                hit(i);
                next = i + 1;
            }
            None => break,
        }
    }

    (count, sep_count, same_case, sum_pos)
}

/// Score `query` as an acronym of `subject`
pub(crate) fn score_acronyms(subject: &Subject, query: &Query) -> Acronym {
    let n = query.len();
    if subject.len() <= 1 || n <= 1 {
        return Acronym::EMPTY;
    }

    let (count, sep_count, same_case, sum_pos) = align(subject, query, |_| ());
    if count < 2 {
        return Acronym::EMPTY;
    }

    let full_word = count == n && is_acronym_full_word(subject, n, count);
    Acronym {
        score: score_pattern(count, n, same_case, true, full_word),
        pos: sum_pos as f64 / count as f64,
        count: count + sep_count,
    }
}

/// Subject indices of a complete acronym alignment, `None` if the query does not fully align
pub(crate) fn acronym_positions(subject: &Subject, query: &Query) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(query.len());
    let (count, sep_count, ..) = align(subject, query, |i| positions.push(i));
    (count + sep_count == query.len()).then_some(positions)
}

/// Whether the subject has no more word starts than the acronym aligned
fn is_acronym_full_word(subject: &Subject, query_len: usize, aligned: usize) -> bool {
    if subject.len() > ACRONYM_LENGTH_CAP * query_len {
        return false;
    }
    (0..subject.len())
        .filter(|&i| is_word_start(i, subject))
        .nth(aligned)
        .is_none()
}
