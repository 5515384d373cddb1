//! Word boundary classification.
//!
//! A word starts at the beginning of the subject, after a separator, or at a
//! camelCase hump (an uppercase char following a lowercase one). Word ends
//! mirror that looking forward.

use crate::subject::Subject;

#[inline]
pub(crate) fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '.' | '-' | '_' | '/' | '\\')
}

/// Whether `pos` starts a word in `subject`
#[inline]
pub(crate) fn is_word_start(pos: usize, subject: &Subject) -> bool {
    if pos == 0 {
        return true;
    }
    let curr = subject.chars[pos];
    let prev = subject.chars[pos - 1];
    is_separator(prev) || (curr != subject.lower[pos] && prev == subject.lower[pos - 1])
}

/// Whether `pos` ends a word in `subject`
#[inline]
pub(crate) fn is_word_end(pos: usize, subject: &Subject) -> bool {
    if pos + 1 == subject.len() {
        return true;
    }
    let curr = subject.chars[pos];
    let next = subject.chars[pos + 1];
    is_separator(next) || (curr == subject.lower[pos] && next != subject.lower[pos + 1])
}
