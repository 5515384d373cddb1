//! Subject strings as char slices paired with their lowercase projection.
//!
//! Case folding is done per char so that the projection always lines up
//! index-for-index with the original text.

use std::ops::Range;

/// Lowercase projection of a single char
#[inline]
pub(crate) fn lower_char(ch: char) -> char {
    if ch.is_ascii() {
        ch.to_ascii_lowercase()
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}

/// Uppercase projection of a single char
#[inline]
pub(crate) fn upper_char(ch: char) -> char {
    if ch.is_ascii() {
        ch.to_ascii_uppercase()
    } else {
        ch.to_uppercase().next().unwrap_or(ch)
    }
}

/// Owned chars of a subject and their lowercase projection
#[derive(Debug, Clone, Default)]
pub(crate) struct SubjectBuf {
    chars: Vec<char>,
    lower: Vec<char>,
}

impl SubjectBuf {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let lower = chars.iter().map(|&c| lower_char(c)).collect();
        Self { chars, lower }
    }

    pub fn as_subject(&self) -> Subject<'_> {
        Subject {
            chars: &self.chars,
            lower: &self.lower,
        }
    }
}

/// Borrowed view over a subject (or a slice of one, such as its basename)
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject<'a> {
    pub chars: &'a [char],
    pub lower: &'a [char],
}

impl<'a> Subject<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn slice(&self, range: Range<usize>) -> Subject<'a> {
        Subject {
            chars: &self.chars[range.clone()],
            lower: &self.lower[range],
        }
    }

    /// First index `>= from` where `needle` occurs in the lowercase projection
    pub fn find_lower(&self, needle: &[char], from: usize) -> Option<usize> {
        find(self.lower, needle, from)
    }

    /// Whether the original text contains `ch`
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

/// First index `>= from` where `needle` occurs in `haystack`
pub(crate) fn find(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= haystack.len()).then_some(from);
    }
    if from >= haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Last index `<= from` holding `ch`.
///
/// A negative `from` is clamped to zero, so index 0 is still inspected.
pub(crate) fn rfind_char(haystack: &[char], ch: char, from: isize) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }
    let from = from.clamp(0, haystack.len() as isize - 1) as usize;
    haystack[..=from].iter().rposition(|&c| c == ch)
}
