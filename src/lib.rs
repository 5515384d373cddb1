//! Pathrank scores how well a short query fuzzily matches a longer subject,
//! such as a file path or a label, finds the matched positions and renders a
//! highlighted subject.
//!
//! It is meant to sit behind interactive finders: the query is prepared once
//! per keystroke, then every candidate is scored against it and the list is
//! filtered and ranked.
//!
//! # Examples
//!
//! ```
//! use pathrank::prelude::*;
//!
//! let options = OptionsBuilder::default()
//!     .use_path_scoring(true)
//!     .max_results(2)
//!     .build()
//!     .unwrap();
//!
//! let files = ["src/lib.rs", "src/model/user.rs", "tests/user_model.rs"];
//! let ranked = pathrank::filter(&files, "model", &options).unwrap();
//! assert_eq!(ranked.len(), 2);
//!
//! let marked = pathrank::highlight("src/lib.rs", "lib", &Options::default()).unwrap();
//! assert_eq!(marked, "src/<strong class=\"highlight\">lib</strong>.rs");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::error::{Error, Result};
#[cfg(feature = "parallel")]
pub use crate::filter::par_filter;
pub use crate::filter::{Candidate, Scored, filter, filter_scored, filter_with};
pub use crate::highlight::highlight;
pub use crate::options::{HighlightStyle, Options, OptionsBuilder};
pub use crate::path::PathScorer;
pub use crate::query::Query;
pub use crate::scorer::{FuzzyScorer, Score, ScoreProvider, is_subsequence, provider_for};

mod error;
mod filter;
mod highlight;
pub mod matcher;
pub mod options;
mod path;
pub mod prelude;
mod query;
pub mod scorer;
mod subject;

/// Prepare `query` once for reuse across many calls; fails on an empty query
pub fn prepare_query(query: &str, options: &Options) -> Result<Query> {
    Query::new(query, options)
}

/// Score `subject` against `query`; `0` means no match.
///
/// Path-aware scoring is used when `options.use_path_scoring` is set.
///
/// ```
/// use pathrank::prelude::*;
///
/// let options = Options::default();
/// assert!(pathrank::score("foobar", "bar", &options)? > pathrank::score("foobrr", "bar", &options)?);
/// assert_eq!(pathrank::score("foo", "bar", &options)?, 0);
/// # Ok::<(), pathrank::Error>(())
/// ```
pub fn score(subject: &str, query: &str, options: &Options) -> Result<Score> {
    let prepared = Query::resolve(query, options)?;
    Ok(provider_for(options).score(subject, &prepared, options))
}

/// Ascending char indices of `subject` matched by `query`
pub fn match_indices(subject: &str, query: &str, options: &Options) -> Result<Vec<usize>> {
    let prepared = Query::resolve(query, options)?;
    Ok(matcher::match_positions(subject, &prepared, options))
}
