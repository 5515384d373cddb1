//! Matched char positions, for highlighting.
//!
//! The positions come from the same stages as the score: an exact acronym,
//! an exact substring, or the alignment dynamic program (every subject index
//! where a query char matched before the alignment stopped). Path-like
//! subjects are matched twice, as a whole and by basename, and the two sets
//! are merged.

use crate::options::Options;
use crate::query::Query;
use crate::scorer::acronym::{acronym_positions, score_acronyms};
use crate::scorer::{align, is_subsequence, locate_exact};
use crate::subject::{Subject, SubjectBuf, rfind_char};

/// Ascending char indices of `subject` matched by `query`, empty when it does not match
///
/// ```
/// use pathrank::prelude::*;
///
/// let query = Query::new("abc", &Options::default()).unwrap();
/// assert_eq!(match_positions("axbycz", &query, &Options::default()), [0, 2, 4]);
/// ```
pub fn match_positions(subject: &str, query: &Query, options: &Options) -> Vec<usize> {
    if !(options.allow_errors || is_subsequence(subject, query)) {
        return Vec::new();
    }

    let buf = SubjectBuf::new(subject);
    let subject = buf.as_subject();
    let matches = compute_match(&subject, query, 0);

    if matches.is_empty() || !subject.contains(options.path_separator) {
        return matches;
    }

    match basename_match(&subject, query, options.path_separator) {
        Some(base) => merge_matches(&matches, &base),
        None => matches,
    }
}

/// Positions matched inside `subject`, shifted by `offset`
fn compute_match(subject: &Subject, query: &Query, offset: usize) -> Vec<usize> {
    let n = query.len();

    let acronym = score_acronyms(subject, query);
    if acronym.count == n {
        // the aligned word starts and separators themselves, not a run around their mean
        let positions = acronym_positions(subject, query).unwrap_or_default();
        return positions.into_iter().map(|i| i + offset).collect();
    }

    if let Some(pos) = locate_exact(subject, query) {
        return (pos + offset..pos + offset + n).collect();
    }

    let mut matches: Vec<usize> = Vec::new();
    align(subject, query, acronym.score, |i| {
        let i = i + offset;
        if matches.last() != Some(&i) {
            matches.push(i);
        }
    });
    matches
}

/// Match against the trailing `query.depth() + 1` path segments of `subject`
fn basename_match(subject: &Subject, query: &Query, sep: char) -> Option<Vec<usize>> {
    let end = subject.chars.iter().rposition(|&c| c != sep)?;
    let mut base_pos = rfind_char(subject.chars, sep, end as isize)?;
    for _ in 0..query.depth() {
        base_pos = rfind_char(subject.chars, sep, base_pos as isize - 1)?;
    }

    let start = base_pos + 1;
    Some(compute_match(&subject.slice(start..end + 1), query, start))
}

/// Sorted union of two ascending position lists
fn merge_matches(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
