//! Error type shared by every entry point that prepares a query.

use thiserror::Error;

use crate::options::OptionsBuilderError;

/// Errors returned by pathrank
#[derive(Error, Debug)]
pub enum Error {
    /// The query string was empty
    #[error("query string can't be empty")]
    EmptyQuery,

    /// A prepared query was passed along with a different query string
    #[error("prepared query {prepared:?} does not match requested query {requested:?}")]
    QueryMismatch {
        /// Raw text of the prepared query
        prepared: String,
        /// Query string passed to the call
        requested: String,
    },

    /// The optional character pattern failed to compile
    #[error("invalid optional character pattern: {0}")]
    InvalidOptionalPattern(#[from] regex::Error),

    /// The options builder rejected its input
    #[error(transparent)]
    Options(#[from] OptionsBuilderError),
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
