//! Score building blocks shared by the exact, acronym and alignment paths.

use crate::query::Query;
use crate::scorer::boundary::is_word_end;
use crate::subject::Subject;

/// Weight of a word-aligned match
pub(crate) const WORD_MATCH_WEIGHT: f64 = 150.0;

/// Matches before this position get a quadratic bonus
const POSITION_BONUS_WINDOW: f64 = 20.0;

/// Length difference at which the size factor halves
const TAU_SIZE: f64 = 150.0;

/// Quality of a run of `count` matched chars out of a query of `len` chars.
///
/// `same_case` counts matched chars whose case was preserved; `start`/`end`
/// tell whether the run is aligned with a word start/end.
pub(crate) fn score_pattern(count: usize, len: usize, same_case: usize, start: bool, end: bool) -> f64 {
    let mut size = count;
    let mut bonus = 6;

    if same_case == count {
        bonus += 2;
    }
    if start {
        bonus += 3;
    }
    if end {
        bonus += 1;
    }

    if count == len {
        // the whole query as a single word
        if start {
            size += if same_case == len { 2 } else { 1 };
        }
        if end {
            bonus += 1;
        }
    }

    (same_case + size * (size + bonus)) as f64
}

/// Bonus for matching at `pos`, favouring the first few chars of the subject
pub(crate) fn score_position(pos: f64) -> f64 {
    if pos < POSITION_BONUS_WINDOW {
        let sc = POSITION_BONUS_WINDOW - pos;
        100.0 + sc * sc
    } else {
        (100.0 + POSITION_BONUS_WINDOW - pos).max(0.0)
    }
}

/// Decay for a difference between lengths `n` and `m`
pub(crate) fn score_size(n: f64, m: f64) -> f64 {
    TAU_SIZE / (TAU_SIZE + (m - n).abs())
}

/// Score of an exact (substring or acronym) match of an `n` char query in an `m` char subject
pub(crate) fn score_exact(n: usize, m: usize, quality: f64, pos: f64) -> f64 {
    2.0 * n as f64 * (WORD_MATCH_WEIGHT * quality + score_position(pos)) * score_size(n as f64, m as f64)
}

/// Score of matching query char `j` on subject char `i`
pub(crate) fn score_character(i: usize, start: bool, acronym: f64, consecutive: f64) -> f64 {
    let position = score_position(i as f64);
    if start {
        position + WORD_MATCH_WEIGHT * (acronym.max(consecutive) + 10.0)
    } else {
        position + WORD_MATCH_WEIGHT * consecutive
    }
}

/// Score of the run of consecutive matches starting at subject `i`, query `j`.
///
/// The caller guarantees that `subject.lower[i] == query.lower()[j]`.
pub(crate) fn score_consecutives(subject: &Subject, query: &Query, i: usize, j: usize, start: bool) -> f64 {
    let chars = query.chars();
    let lower = query.lower();
    let limit = (subject.len() - i).min(chars.len() - j);

    let mut same_case = usize::from(chars[j] == subject.chars[i]);
    let mut size = 1;
    while size < limit && lower[j + size] == subject.lower[i + size] {
        if chars[j + size] == subject.chars[i + size] {
            same_case += 1;
        }
        size += 1;
    }

    if size == 1 {
        return (1 + 2 * same_case) as f64;
    }

    score_pattern(size, chars.len(), same_case, start, is_word_end(i + size - 1, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::subject::SubjectBuf;

    #[test]
    fn pattern_quality() {
        // 2 chars, case kept, not aligned: 2 + 2 * (2 + 8)
        assert_eq!(score_pattern(2, 5, 2, false, false), 22.0);
        // whole query, word aligned both sides, case kept: size bumped by 2
        assert_eq!(score_pattern(3, 3, 3, true, true), 3.0 + 5.0 * (5.0 + 13.0));
        // case changed: size bumped by 1 only
        assert_eq!(score_pattern(3, 3, 0, true, false), 4.0 * (4.0 + 9.0));
    }

    #[test]
    fn position_bonus() {
        assert_eq!(score_position(0.0), 500.0);
        assert_eq!(score_position(19.0), 101.0);
        assert_eq!(score_position(20.0), 100.0);
        assert_eq!(score_position(50.0), 70.0);
        assert_eq!(score_position(500.0), 0.0);
    }

    #[test]
    fn size_factor() {
        assert_eq!(score_size(3.0, 3.0), 1.0);
        assert_eq!(score_size(0.0, 150.0), 0.5);
        assert_eq!(score_size(150.0, 0.0), 0.5);
    }

    #[test]
    fn character_score_prefers_word_starts() {
        assert!(score_character(3, true, 0.0, 1.0) > score_character(3, false, 0.0, 1.0));
        assert_eq!(score_character(30, false, 0.0, 2.0), 90.0 + 300.0);
        assert_eq!(score_character(30, true, 5.0, 2.0), 90.0 + 150.0 * 15.0);
    }

    #[test]
    fn consecutive_runs() {
        let query = Query::new("bar", &Options::default()).unwrap();

        let buf = SubjectBuf::new("xbz");
        // single char run, case kept
        assert_eq!(score_consecutives(&buf.as_subject(), &query, 1, 0, false), 3.0);

        let buf = SubjectBuf::new("foo_bar");
        let expected = score_pattern(3, 3, 3, true, true);
        assert_eq!(score_consecutives(&buf.as_subject(), &query, 4, 0, true), expected);

        let buf = SubjectBuf::new("fooBArz");
        // 'B' and 'A' differ in case, the run ends mid-word
        let expected = score_pattern(3, 3, 1, true, false);
        assert_eq!(score_consecutives(&buf.as_subject(), &query, 3, 0, true), expected);
    }
}
