//! Configuration options for pathrank.
//!
//! A single [`Options`] value drives scoring, matching, highlighting and
//! filtering. Build it with [`OptionsBuilder`]:
//!
//! ```
//! use pathrank::prelude::*;
//!
//! let options = OptionsBuilder::default()
//!     .use_path_scoring(true)
//!     .max_results(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.path_separator, '/');
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use derive_builder::Builder;
use regex::Regex;

use crate::query::Query;

/// Markers wrapped around matched runs by [`crate::highlight()`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    /// CSS class used to build the default opening tag
    pub class: String,
    /// Opening marker, defaults to `<strong class="{class}">`
    pub open: Option<String>,
    /// Closing marker, defaults to `</strong>`
    pub close: Option<String>,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            class: String::from("highlight"),
            open: None,
            close: None,
        }
    }
}

impl HighlightStyle {
    /// Opening marker, derived from `class` unless set explicitly
    pub fn open_tag(&self) -> Cow<'_, str> {
        match self.open.as_deref() {
            Some(open) if !open.is_empty() => Cow::Borrowed(open),
            _ => Cow::Owned(format!("<strong class=\"{}\">", self.class)),
        }
    }

    /// Closing marker
    pub fn close_tag(&self) -> &str {
        match self.close.as_deref() {
            Some(close) if !close.is_empty() => close,
            _ => "</strong>",
        }
    }
}

/// Options recognized by every pathrank entry point
#[derive(Builder, Debug, Clone)]
#[builder(default)]
pub struct Options {
    //  --- Scoring ---
    /// Skip the quick subsequence rejection and always run the scorer
    pub allow_errors: bool,

    /// Blend a basename score into the full-path score
    pub use_path_scoring: bool,

    /// Multiply path scores by how well the candidate's extension matches the query's
    pub use_extension_bonus: bool,

    /// Directory separator for path-like subjects
    pub path_separator: char,

    /// Characters stripped from the query before the quick subsequence check
    ///
    /// `None` strips space, `_`, `-`, `:`, `/` and `\`.
    #[builder(setter(into))]
    pub optional_chars: Option<Regex>,

    /// Query prepared ahead of time, reused instead of deriving a new one per call
    #[builder(setter(into))]
    pub prepared_query: Option<Arc<Query>>,

    //  --- Highlighting ---
    /// Markers used by [`crate::highlight()`]
    pub highlight: HighlightStyle,

    //  --- Filtering ---
    /// Truncate filter output to at most this many candidates
    #[builder(setter(into))]
    pub max_results: Option<usize>,

    /// Stop scanning once this many candidates have matched
    #[builder(setter(into))]
    pub max_inners: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_errors: false,
            use_path_scoring: false,
            use_extension_bonus: false,
            path_separator: '/',
            optional_chars: None,
            prepared_query: None,
            highlight: HighlightStyle::default(),
            max_results: None,
            max_inners: None,
        }
    }
}

impl OptionsBuilder {
    /// Compile `pattern` and use it as the optional character pattern
    pub fn optional_pattern(&mut self, pattern: &str) -> crate::Result<&mut Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.optional_chars(regex))
    }
}
