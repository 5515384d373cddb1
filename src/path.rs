//! Path-aware scoring.
//!
//! A path subject is scored as a whole, then the score is blended with a
//! score of its basename alone. The fewer directories the subject has, the more
//! weight the basename gets. An optional bonus rewards subjects whose file
//! extension matches the query's.

use crate::options::Options;
use crate::query::Query;
use crate::scorer::pattern::score_size;
use crate::scorer::{ScoreProvider, compute_score, is_subsequence, to_score};
use crate::subject::{Subject, SubjectBuf, rfind_char};
use crate::Score;

/// Directory count at which the basename weight halves
const TAU_DEPTH: f64 = 20.0;

/// Weight of the basename length against the depth penalty
const FILE_COEFF: f64 = 2.5;

/// How many earlier `.` are tried when the last suffix shares nothing with the query extension
const EXTENSION_MAX_DEPTH: usize = 2;

/// Scorer for path-like subjects
#[derive(Debug, Default, Clone, Copy)]
pub struct PathScorer;

impl ScoreProvider for PathScorer {
    fn score(&self, subject: &str, query: &Query, options: &Options) -> Score {
        if !(options.allow_errors || is_subsequence(subject, query)) {
            return 0;
        }
        let buf = SubjectBuf::new(subject);
        let subject = buf.as_subject();
        let full = compute_score(&subject, query);
        to_score(score_path(&subject, query, full, options))
    }
}

/// Blend the full-path score of `subject` with the score of its basename
fn score_path(subject: &Subject, query: &Query, full_path_score: f64, options: &Options) -> f64 {
    if full_path_score == 0.0 {
        return 0.0;
    }

    let sep = options.path_separator;
    let Some(end) = subject.chars.iter().rposition(|&c| c != sep) else {
        // only separators: no basename, the full-path score is returned unblended
        return full_path_score;
    };

    let base_pos = rfind_char(subject.chars, sep, end as isize);
    let file_length = end as f64 - base_pos.map_or(-1.0, |p| p as f64);

    let mut full_path_score = full_path_score;
    let mut ext_adjust = 1.0;
    if options.use_extension_bonus {
        ext_adjust += extension_score(
            subject.lower,
            query.extension_chars(),
            base_pos.map_or(-1, |p| p as isize),
            end as isize,
            EXTENSION_MAX_DEPTH,
        );
        full_path_score *= ext_adjust;
    }

    let Some(base_pos) = base_pos else {
        return full_path_score;
    };

    // how many directories the query can reach into, walking left from the basename
    let mut depth_penalty = 0usize;
    let mut cursor = Some(base_pos);
    while let Some(pos) = cursor {
        if depth_penalty >= query.depth() {
            break;
        }
        depth_penalty += 1;
        cursor = rfind_char(subject.chars, sep, pos as isize - 1);
    }

    let base_path_score = ext_adjust * compute_score(&subject.slice(base_pos + 1..end + 1), query);

    let alpha = 0.5 * TAU_DEPTH / (TAU_DEPTH + count_dir(subject.chars, end + 1, sep) as f64);
    alpha * base_path_score
        + (1.0 - alpha) * full_path_score * score_size(depth_penalty as f64, FILE_COEFF * file_length)
}

/// Number of directory levels in `path[..end]`: separator runs after any leading separators
pub(crate) fn count_dir(path: &[char], end: usize, sep: char) -> usize {
    let path = &path[..end.min(path.len())];
    let start = path.iter().take_while(|&&c| c == sep).count();
    path[start..]
        .windows(2)
        .filter(|w| w[0] != sep && w[1] == sep)
        .count()
}

/// Text after the last `.`, empty when there is none
pub(crate) fn extension_of(text: &[char]) -> &[char] {
    match text.iter().rposition(|&c| c == '.') {
        Some(pos) => &text[pos + 1..],
        None => &[],
    }
}

/// How well the extension ending at `end` (after `start`) matches `ext`, in `[0, 1]`.
///
/// Suffixes shorter than `ext` get partial credit; a suffix sharing no char
/// position with `ext` is retried at the previous `.`, at most `max_depth` times.
fn extension_score(candidate: &[char], ext: &[char], start: isize, end: isize, max_depth: usize) -> f64 {
    if ext.is_empty() {
        return 0.0;
    }

    let Some(pos) = rfind_char(candidate, '.', end) else {
        return 0.0;
    };
    if pos as isize <= start {
        return 0.0;
    }

    let ext_len = ext.len() as f64;
    let ext_pos = pos + 1;
    let len = end - ext_pos as isize + 1;

    if (len as f64) < ext_len {
        return 0.9 * len as f64 / ext_len;
    }

    let matched = candidate[ext_pos..]
        .iter()
        .zip(ext)
        .filter(|(c, e)| c == e)
        .count();

    if matched == 0 && max_depth > 0 {
        return 0.9 * extension_score(candidate, ext, start, pos as isize - 1, max_depth - 1);
    }

    matched as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::FuzzyScorer;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn query(q: &str) -> Query {
        Query::new(q, &Options::default()).unwrap()
    }

    fn path_score(subject: &str, q: &str, options: &Options) -> Score {
        PathScorer.score(subject, &query(q), options)
    }

    fn ext_score(candidate: &str, ext: &str) -> f64 {
        let candidate = chars(candidate);
        extension_score(&candidate, &chars(ext), -1, candidate.len() as isize - 1, EXTENSION_MAX_DEPTH)
    }

    #[test]
    fn directory_count() {
        assert_eq!(count_dir(&chars("a/b/c"), 5, '/'), 2);
        assert_eq!(count_dir(&chars("/a/b"), 4, '/'), 1);
        assert_eq!(count_dir(&chars("a//b///c"), 8, '/'), 2);
        assert_eq!(count_dir(&chars("a/b/"), 4, '/'), 2);
        assert_eq!(count_dir(&chars("a/b/c"), 3, '/'), 1);
        assert_eq!(count_dir(&chars("abc"), 0, '/'), 0);
        assert_eq!(count_dir(&chars("a\\b"), 3, '\\'), 1);
    }

    #[test]
    fn extension() {
        assert_eq!(extension_of(&chars("main.rs")), chars("rs"));
        assert_eq!(extension_of(&chars("a.tar.gz")), chars("gz"));
        assert!(extension_of(&chars("main")).is_empty());
    }

    #[test]
    fn extension_scores() {
        assert_eq!(ext_score("main.rs", "rs"), 1.0);
        assert_eq!(ext_score("main.rs", ""), 0.0);
        assert_eq!(ext_score("main", "rs"), 0.0);
        // one of two chars in place
        assert_eq!(ext_score("main.rb", "rs"), 0.5);
        // shorter suffix than the query extension
        assert_eq!(ext_score("main.r", "rs"), 0.45);
        // nothing in common with ".map", retry at ".js"
        assert_eq!(ext_score("app.js.map", "js"), 0.9);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(path_score("src/main.rs", "xyz", &Options::default()), 0);
    }

    #[test]
    fn no_separator_is_plain_score() {
        let options = Options::default();
        assert_eq!(
            path_score("index.ts", "idx", &options),
            FuzzyScorer.score("index.ts", &query("idx"), &options)
        );
    }

    #[test]
    fn basename_match_is_not_penalized() {
        let options = Options::default();
        let path = path_score("src/index.ts", "idx", &options);
        let plain = FuzzyScorer.score("src/index.ts", &query("idx"), &options);
        assert!(path >= plain, "path={path} plain={plain}");
    }

    #[test]
    fn basename_beats_directory() {
        let options = Options::default();
        let in_basename = path_score("lib/foo/model.rs", "model", &options);
        let in_directory = path_score("lib/model/foo.rs", "model", &options);
        assert!(in_basename > in_directory, "{in_basename} > {in_directory}");
    }

    #[test]
    fn extension_bonus() {
        let plain = Options::default();
        let bonus = Options {
            use_extension_bonus: true,
            ..Default::default()
        };
        let without = path_score("src/main.rs", "main.rs", &plain);
        let with = path_score("src/main.rs", "main.rs", &bonus);
        assert!(with > without, "{with} > {without}");
        assert_eq!(
            path_score("src/main.go", "mai", &bonus),
            path_score("src/main.go", "mai", &plain)
        );
    }

    #[test]
    fn only_separators() {
        let options = Options {
            allow_errors: true,
            ..Default::default()
        };
        assert_eq!(
            path_score("///", "/", &options),
            FuzzyScorer.score("///", &query("/"), &options)
        );
    }

    #[test]
    fn custom_separator() {
        let options = Options {
            path_separator: '\\',
            ..Default::default()
        };
        let windows = path_score("lib\\foo\\model.rs", "model", &options);
        let unix = path_score("lib\\foo\\model.rs", "model", &Options::default());
        assert_ne!(windows, unix);
        assert!(windows > 0);
    }
}
