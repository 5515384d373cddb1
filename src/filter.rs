//! Rank a list of candidates against a query.
//!
//! Candidates that do not match are dropped, the rest are stably sorted by
//! descending score and truncated to `max_results`. `max_inners` stops the
//! scan early once that many candidates have matched.

use std::borrow::Cow;

use crate::error::Result;
use crate::options::Options;
use crate::query::Query;
use crate::scorer::{Score, provider_for};

/// A value with a string that can be scored
///
/// Every `AsRef<str>` type is a candidate. Other types implement `text`
/// themselves, returning `None` when they have nothing to score.
pub trait Candidate {
    /// The string to score, `None` to skip this candidate
    fn text(&self) -> Option<Cow<'_, str>>;
}

impl<T: AsRef<str> + ?Sized> Candidate for T {
    fn text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

/// A candidate together with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored<T> {
    /// The candidate
    pub item: T,
    /// Its score, always positive
    pub score: Score,
}

/// Matching `candidates`, best first
///
/// ```
/// use pathrank::prelude::*;
///
/// let found = filter(&["apple", "app", "banana"], "app", &Options::default()).unwrap();
/// assert_eq!(found, [&"app", &"apple"]);
/// ```
pub fn filter<'a, T: Candidate>(candidates: &'a [T], query: &str, options: &Options) -> Result<Vec<&'a T>> {
    Ok(project(filter_scored(candidates, query, options)?))
}

/// Like [`filter`], extracting the scored string with `accessor`
pub fn filter_with<'a, T, F>(candidates: &'a [T], query: &str, options: &Options, accessor: F) -> Result<Vec<&'a T>>
where
    F: Fn(&T) -> Option<&str>,
{
    let scored = scan(candidates, query, options, |item| accessor(item).map(Cow::Borrowed))?;
    Ok(project(scored))
}

/// Matching `candidates` with their scores, best first
pub fn filter_scored<'a, T: Candidate>(
    candidates: &'a [T],
    query: &str,
    options: &Options,
) -> Result<Vec<Scored<&'a T>>> {
    scan(candidates, query, options, |item| item.text())
}

/// Parallel [`filter_scored`]; the result is the same as the sequential one.
///
/// With `max_inners` set, which candidates are kept depends on scan order, so
/// the scan stays sequential.
#[cfg(feature = "parallel")]
pub fn par_filter<'a, T>(candidates: &'a [T], query: &str, options: &Options) -> Result<Vec<Scored<&'a T>>>
where
    T: Candidate + Sync,
{
    use rayon::prelude::*;

    if options.max_inners.is_some() {
        return filter_scored(candidates, query, options);
    }

    let query = Query::resolve(query, options)?;
    let provider = provider_for(options);
    trace!("par_filter start, total: {}", candidates.len());

    let matched: Vec<Scored<&T>> = candidates
        .par_iter()
        .filter_map(|item| {
            let text = item.text().filter(|text| !text.is_empty())?;
            let score = provider.score(&text, &query, options);
            (score > 0).then_some(Scored { item, score })
        })
        .collect();

    trace!("par_filter stop, total matched: {}", matched.len());
    Ok(finish(matched, options))
}

fn scan<'a, T, F>(candidates: &'a [T], query: &str, options: &Options, text_of: F) -> Result<Vec<Scored<&'a T>>>
where
    F: Fn(&'a T) -> Option<Cow<'a, str>>,
{
    let query = Query::resolve(query, options)?;
    let provider = provider_for(options);
    let mut spots_left = options.max_inners.filter(|&n| n > 0);
    trace!("filter start, total: {}", candidates.len());

    let mut matched = Vec::new();
    for item in candidates {
        let Some(text) = text_of(item).filter(|text| !text.is_empty()) else {
            continue;
        };

        let score = provider.score(&text, &query, options);
        if score == 0 {
            continue;
        }
        matched.push(Scored { item, score });

        if let Some(left) = spots_left.as_mut() {
            *left -= 1;
            if *left == 0 {
                trace!("filter stopped early after {} matches", matched.len());
                break;
            }
        }
    }

    trace!("filter stop, total matched: {}", matched.len());
    Ok(finish(matched, options))
}

fn finish<T>(mut matched: Vec<Scored<T>>, options: &Options) -> Vec<Scored<T>> {
    matched.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(max) = options.max_results {
        matched.truncate(max);
    }
    matched
}

fn project<T>(scored: Vec<Scored<T>>) -> Vec<T> {
    scored.into_iter().map(|scored| scored.item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionsBuilder;

    const FRUITS: [&str; 3] = ["apple", "app", "application"];

    #[test]
    fn keeps_matches_best_first() {
        let found = filter(&FRUITS, "app", &Options::default()).unwrap();
        assert_eq!(found, [&"app", &"apple", &"application"]);
    }

    #[test]
    fn scores_are_descending() {
        let found = filter_scored(&FRUITS, "app", &Options::default()).unwrap();
        assert_eq!(found.len(), 3);
        assert!(found.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(found.iter().all(|s| s.score > 0));
    }

    #[test]
    fn max_results_truncates() {
        let options = OptionsBuilder::default().max_results(2).build().unwrap();
        let found = filter(&FRUITS, "app", &options).unwrap();
        assert_eq!(found, [&"app", &"apple"]);
    }

    #[test]
    fn max_inners_stops_the_scan() {
        let options = OptionsBuilder::default().max_inners(1).build().unwrap();
        // only "apple" was scanned before the stop
        assert_eq!(filter(&FRUITS, "app", &options).unwrap(), [&"apple"]);

        let candidates = ["xyz", "apple", "xyz", "app"];
        let options = OptionsBuilder::default().max_inners(2).build().unwrap();
        assert_eq!(filter(&candidates, "app", &options).unwrap(), [&"app", &"apple"]);
    }

    #[test]
    fn non_matches_are_dropped() {
        let candidates = vec![String::from("banana"), String::from("grape")];
        assert!(filter(&candidates, "app", &Options::default()).unwrap().is_empty());
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(matches!(
            filter(&FRUITS, "", &Options::default()),
            Err(crate::Error::EmptyQuery)
        ));
    }

    #[derive(Debug, PartialEq)]
    struct File {
        name: Option<&'static str>,
    }

    impl Candidate for File {
        fn text(&self) -> Option<Cow<'_, str>> {
            self.name.map(Cow::Borrowed)
        }
    }

    #[test]
    fn custom_candidates_without_text_are_skipped() {
        let files = [File { name: None }, File { name: Some("app.rs") }, File { name: Some("") }];
        let found = filter(&files, "app", &Options::default()).unwrap();
        assert_eq!(found, [&files[1]]);
    }

    #[test]
    fn accessor() {
        let pairs = [(1, "apple"), (2, "banana"), (3, "app")];
        let found = filter_with(&pairs, "app", &Options::default(), |pair| Some(pair.1)).unwrap();
        assert_eq!(found, [&(3, "app"), &(1, "apple")]);
    }

    #[test]
    fn path_scoring_changes_the_ranking() {
        let candidates = ["model/foo.rs", "foo/model.rs"];
        let options = OptionsBuilder::default().use_path_scoring(true).build().unwrap();
        let found = filter(&candidates, "model", &options).unwrap();
        assert_eq!(found[0], &"foo/model.rs");
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let candidates: Vec<String> = (0..500).map(|i| format!("dir{}/file_{i}.rs", i % 7)).collect();
        let options = Options::default();
        let sequential = filter_scored(&candidates, "fi1", &options).unwrap();
        let parallel = par_filter(&candidates, "fi1", &options).unwrap();
        assert_eq!(sequential, parallel);
    }
}
