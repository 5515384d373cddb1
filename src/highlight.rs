//! Wrap matched runs of a subject in markers.

use crate::error::Result;
use crate::matcher::match_positions;
use crate::options::Options;
use crate::query::Query;

/// `subject` with every maximal run of matched chars wrapped in the configured markers.
///
/// A subject equal to the query is wrapped whole; a subject that does not match
/// is returned unchanged.
///
/// ```
/// use pathrank::prelude::*;
///
/// let options = Options::default();
/// assert_eq!(
///     highlight("foobar", "bar", &options).unwrap(),
///     "foo<strong class=\"highlight\">bar</strong>"
/// );
/// ```
pub fn highlight(subject: &str, query: &str, options: &Options) -> Result<String> {
    let prepared = Query::resolve(query, options)?;
    let open = options.highlight.open_tag();
    let close = options.highlight.close_tag();

    if subject == query {
        return Ok(format!("{open}{subject}{close}"));
    }

    let positions = match_positions(subject, &prepared, options);
    Ok(wrap_runs(subject, &positions, &open, close))
}

/// Wrap the runs of consecutive `positions` (ascending char indices) in `open`/`close`
pub(crate) fn wrap_runs(subject: &str, positions: &[usize], open: &str, close: &str) -> String {
    if positions.is_empty() {
        return subject.to_string();
    }

    let mut out = String::with_capacity(subject.len() + positions.len() * (open.len() + close.len()));
    let mut positions = positions.iter().copied().peekable();
    let mut in_run = false;

    for (i, ch) in subject.chars().enumerate() {
        let matched = positions.next_if_eq(&i).is_some();
        if matched != in_run {
            out.push_str(if matched { open } else { close });
            in_run = matched;
        }
        out.push(ch);
    }
    if in_run {
        out.push_str(close);
    }

    out
}
