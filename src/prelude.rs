//! Convenience re-exports of commonly used types.
//!
//! `use pathrank::prelude::*;` brings in the options, the query model and
//! every entry point. The crate `Result` alias is left out so it does not
//! shadow the std one.

#[cfg(feature = "parallel")]
pub use crate::par_filter;
pub use crate::matcher::match_positions;
pub use crate::{
    Candidate, Error, FuzzyScorer, HighlightStyle, Options, OptionsBuilder, PathScorer, Query, Score, ScoreProvider,
    Scored, filter, filter_scored, filter_with, highlight, is_subsequence, match_indices, prepare_query, provider_for,
    score,
};
pub use std::borrow::Cow;
pub use std::sync::Arc;
