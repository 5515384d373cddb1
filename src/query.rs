//! Query preparation.
//!
//! Everything derivable from the raw query is computed once here, so that
//! scoring a long candidate list does not redo it per candidate.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::path::{count_dir, extension_of};
use crate::subject::{lower_char, upper_char};

/// Characters stripped from the query core when no custom pattern is configured
const OPTIONAL_CHARS: [char; 6] = [' ', '_', '-', ':', '/', '\\'];

/// Set of the (lowercase) chars occurring in a query
#[derive(Debug, Clone, Default)]
struct CharSet {
    ascii: u128,
    other: Vec<char>,
}

impl CharSet {
    fn insert(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii |= 1u128 << (ch as u32);
        } else if !self.other.contains(&ch) {
            self.other.push(ch);
        }
    }

    #[inline]
    fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii & (1u128 << (ch as u32)) != 0
        } else {
            self.other.contains(&ch)
        }
    }
}

/// A prepared query
///
/// ```
/// use pathrank::prelude::*;
///
/// let query = Query::new("src/main.rs", &Options::default()).unwrap();
/// assert_eq!(query.depth(), 1);
/// assert_eq!(query.extension(), "rs");
/// assert_eq!(query.core(), "srcmain.rs");
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    raw: String,
    chars: Vec<char>,
    lower: Vec<char>,
    core: Vec<char>,
    core_lower: Vec<char>,
    core_upper: Vec<char>,
    depth: usize,
    extension: Vec<char>,
    present: CharSet,
}

impl Query {
    /// Prepare `query`; fails with [`Error::EmptyQuery`] on an empty string
    pub fn new(query: &str, options: &Options) -> Result<Self> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let chars: Vec<char> = query.chars().collect();
        let lower: Vec<char> = chars.iter().map(|&c| lower_char(c)).collect();

        let core: Vec<char> = match &options.optional_chars {
            Some(re) => re.replace_all(query, "").chars().collect(),
            None => chars.iter().copied().filter(|c| !OPTIONAL_CHARS.contains(c)).collect(),
        };
        let core_lower = core.iter().map(|&c| lower_char(c)).collect();
        let core_upper = core.iter().map(|&c| upper_char(c)).collect();

        let depth = count_dir(&chars, chars.len(), options.path_separator);
        let extension = extension_of(&lower).to_vec();

        let mut present = CharSet::default();
        lower.iter().for_each(|&c| present.insert(c));

        debug!("prepared query {query:?}: depth {depth}, core {} chars", core.len());

        Ok(Self {
            raw: query.to_string(),
            chars,
            lower,
            core,
            core_lower,
            core_upper,
            depth,
            extension,
            present,
        })
    }

    /// The query as given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The query with optional characters removed
    pub fn core(&self) -> String {
        self.core.iter().collect()
    }

    /// Number of directory separators (runs) after any leading ones
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Lowercase text after the last `.`, empty when there is none
    pub fn extension(&self) -> String {
        self.extension.iter().collect()
    }

    /// Number of chars in the query
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: an empty query cannot be prepared
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn lower(&self) -> &[char] {
        &self.lower
    }

    pub(crate) fn core_lower(&self) -> &[char] {
        &self.core_lower
    }

    pub(crate) fn core_upper(&self) -> &[char] {
        &self.core_upper
    }

    pub(crate) fn extension_chars(&self) -> &[char] {
        &self.extension
    }

    /// Whether the lowercase query contains `ch`
    #[inline]
    pub(crate) fn has_char(&self, ch: char) -> bool {
        self.present.contains(ch)
    }

    /// Use the prepared query from `options` when there is one, otherwise prepare `query`.
    pub(crate) fn resolve<'o>(query: &str, options: &'o Options) -> Result<Cow<'o, Query>> {
        match options.prepared_query.as_deref() {
            Some(prepared) if prepared.raw == query => Ok(Cow::Borrowed(prepared)),
            Some(prepared) => Err(Error::QueryMismatch {
                prepared: prepared.raw.clone(),
                requested: query.to_string(),
            }),
            None => Query::new(query, options).map(Cow::Owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::options::OptionsBuilder;

    fn prepare(query: &str) -> Query {
        Query::new(query, &Options::default()).unwrap()
    }

    #[test]
    fn empty_query_is_rejected() {
        assert!(matches!(Query::new("", &Options::default()), Err(Error::EmptyQuery)));
    }

    #[test]
    fn core_strips_optional_chars() {
        let query = prepare("Foo_bar-baz:qux/x\\y z");
        assert_eq!(query.core(), "Foobarbazquxxyz");
        assert_eq!(query.core_lower().iter().collect::<String>(), "foobarbazquxxyz");
        assert_eq!(query.core_upper().iter().collect::<String>(), "FOOBARBAZQUXXYZ");
    }

    #[test]
    fn custom_optional_pattern() {
        let options = OptionsBuilder::default()
            .optional_pattern("[.]")
            .unwrap()
            .build()
            .unwrap();
        let query = Query::new("a.b c", &options).unwrap();
        assert_eq!(query.core(), "ab c");
    }

    #[test]
    fn depth_and_extension() {
        assert_eq!(prepare("main").depth(), 0);
        assert_eq!(prepare("src/main").depth(), 1);
        assert_eq!(prepare("/src//lib/main").depth(), 2);
        assert_eq!(prepare("Main.RS").extension(), "rs");
        assert_eq!(prepare("main").extension(), "");
    }

    #[test]
    fn presence_set_is_lowercase() {
        let query = prepare("aBé");
        assert!(query.has_char('a'));
        assert!(query.has_char('b'));
        assert!(query.has_char('é'));
        assert!(!query.has_char('B'));
        assert!(!query.has_char('z'));
    }

    #[test]
    fn resolve_checks_prepared_query() {
        let prepared = Arc::new(prepare("abc"));
        let options = OptionsBuilder::default()
            .prepared_query(prepared)
            .build()
            .unwrap();
        assert!(matches!(Query::resolve("abc", &options), Ok(Cow::Borrowed(_))));
        assert!(matches!(
            Query::resolve("abd", &options),
            Err(Error::QueryMismatch { .. })
        ));
        assert!(matches!(Query::resolve("", &Options::default()), Err(Error::EmptyQuery)));
    }
}
