//! Find/replace search state machine for jotpad.
//!
//! Tracks the active search term and the offset of the last match, and moves
//! a "current match" cursor forward or backward through literal,
//! case-sensitive occurrences. Offsets are byte offsets into the document
//! text. Searches do not wrap around either end of the document.

use thiserror::Error;

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// Why a search operation produced no match span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Navigation was requested before any term was set.
    #[error("no active search")]
    NoActiveSearch,
    /// No further occurrence in the requested direction.
    #[error("no more occurrences")]
    NotFound,
}

/// Byte span of a single match: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Match length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a zero-length span (never produced by a non-empty term).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Search state: the active term plus the start offset of the last match.
///
/// The state is `Idle` while the term is empty and `Active` otherwise.
/// `last_index` is not invalidated when the document is edited; a stale
/// offset is tolerated by clamping it into range on the next navigation.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    term: String,
    last_index: Option<usize>,
}

impl SearchState {
    /// Create an idle search state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term and reset the match cursor.
    ///
    /// Callers reject empty input before it gets here (the UI disables
    /// confirmation); an empty term nonetheless degrades to [`clear`].
    ///
    /// [`clear`]: SearchState::clear
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.last_index = None;
    }

    /// Active search term, if any.
    pub fn term(&self) -> Option<&str> {
        if self.term.is_empty() {
            None
        } else {
            Some(&self.term)
        }
    }

    /// Start offset of the last match, if any occurred since `set_term`.
    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Check if a search is active (a non-empty term is set).
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    /// Drop the term and the match cursor, returning to idle.
    pub fn clear(&mut self) {
        self.term.clear();
        self.last_index = None;
    }

    /// Find the next occurrence of the term in `text`.
    ///
    /// The scan resumes after the end of the previous match (occurrences are
    /// non-overlapping), or at the start of the text if nothing matched yet.
    /// On success the match cursor advances; on `NotFound` it stays put.
    pub fn find_next(&mut self, text: &str) -> Result<MatchSpan, SearchError> {
        if !self.is_active() {
            return Err(SearchError::NoActiveSearch);
        }

        let mut from = match self.last_index {
            Some(idx) => idx.saturating_add(self.term.len()),
            None => 0,
        };

        // A stale offset from before a document edit may point past the end
        // or into the middle of a UTF-8 sequence.
        if from > text.len() {
            return Err(SearchError::NotFound);
        }
        while from < text.len() && !text.is_char_boundary(from) {
            from += 1;
        }

        match text[from..].find(&self.term) {
            Some(rel) => {
                let start = from + rel;
                self.last_index = Some(start);
                Ok(MatchSpan {
                    start,
                    end: start + self.term.len(),
                })
            }
            None => Err(SearchError::NotFound),
        }
    }

    /// Find the closest occurrence of the term before the match cursor.
    ///
    /// The match must start strictly before the last match offset; with no
    /// previous match the scan covers the whole text from the end. On
    /// success the match cursor moves back; on `NotFound` it stays put.
    pub fn find_previous(&mut self, text: &str) -> Result<MatchSpan, SearchError> {
        if !self.is_active() {
            return Err(SearchError::NoActiveSearch);
        }

        // The previous match may extend past its own start boundary, so the
        // scan window ends at `last_index - 1 + term.len()`, clamped for
        // stale offsets.
        let mut limit = match self.last_index {
            None => text.len(),
            Some(0) => return Err(SearchError::NotFound),
            Some(idx) => (idx - 1).saturating_add(self.term.len()).min(text.len()),
        };
        while !text.is_char_boundary(limit) {
            limit -= 1;
        }

        match text[..limit].rfind(&self.term) {
            Some(start) => {
                self.last_index = Some(start);
                Ok(MatchSpan {
                    start,
                    end: start + self.term.len(),
                })
            }
            None => Err(SearchError::NotFound),
        }
    }

    /// Navigate one step in the given direction.
    pub fn find(&mut self, text: &str, direction: SearchDirection) -> Result<MatchSpan, SearchError> {
        match direction {
            SearchDirection::Forward => self.find_next(text),
            SearchDirection::Backward => self.find_previous(text),
        }
    }
}

/// Replace every literal, non-overlapping occurrence of `find` in `text`,
/// left to right, and return the new text with the replacement count.
///
/// A count of 0 means `text` is returned unchanged. Replacements never
/// cascade: occurrences of `find` introduced by `replace` are not
/// substituted again. Stateless with respect to [`SearchState`].
pub fn replace_all(text: &str, find: &str, replace: &str) -> (String, usize) {
    if find.is_empty() {
        return (text.to_string(), 0);
    }

    let count = text.matches(find).count();
    if count == 0 {
        return (text.to_string(), 0);
    }

    (text.replace(find, replace), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state_rejects_navigation() {
        let mut state = SearchState::new();
        assert!(!state.is_active());
        assert_eq!(state.find_next("some text"), Err(SearchError::NoActiveSearch));
        assert_eq!(
            state.find_previous("some text"),
            Err(SearchError::NoActiveSearch)
        );
    }

    #[test]
    fn test_find_next_visits_occurrences_in_order() {
        let text = "the cat sat on the mat";
        let mut state = SearchState::new();
        state.set_term("at");

        let first = state.find_next(text).unwrap();
        assert_eq!((first.start, first.end), (5, 7));

        let second = state.find_next(text).unwrap();
        assert_eq!(second.start, 9);

        let third = state.find_next(text).unwrap();
        assert_eq!(third.start, 20);

        // Terminal: no wraparound back to the first occurrence.
        assert_eq!(state.find_next(text), Err(SearchError::NotFound));
        assert_eq!(state.last_index(), Some(20));
    }

    #[test]
    fn test_find_previous_walks_back_without_wrapping() {
        let text = "the cat sat on the mat";
        let mut state = SearchState::new();
        state.set_term("at");

        // No prior match: scan from the end.
        assert_eq!(state.find_previous(text).unwrap().start, 20);
        assert_eq!(state.find_previous(text).unwrap().start, 9);
        assert_eq!(state.find_previous(text).unwrap().start, 5);

        // Reached the first occurrence: terminal for this direction.
        assert_eq!(state.find_previous(text), Err(SearchError::NotFound));
        assert_eq!(state.last_index(), Some(5));
    }

    #[test]
    fn test_direction_reversal_revisits_neighbors() {
        let text = "aba aba aba";
        let mut state = SearchState::new();
        state.set_term("aba");

        assert_eq!(state.find_next(text).unwrap().start, 0);
        assert_eq!(state.find_next(text).unwrap().start, 4);
        assert_eq!(state.find_previous(text).unwrap().start, 0);
        assert_eq!(state.find_next(text).unwrap().start, 4);
    }

    #[test]
    fn test_overlapping_term_advances_past_match_end() {
        let mut state = SearchState::new();
        state.set_term("aa");

        // "aa" occurs at 0 and 1, but the scan resumes after the match end.
        assert_eq!(state.find_next("aaa").unwrap().start, 0);
        assert_eq!(state.find_next("aaa"), Err(SearchError::NotFound));
    }

    #[test]
    fn test_find_previous_allows_match_ending_at_cursor() {
        let mut state = SearchState::new();
        state.set_term("aa");

        // Cursor parked at offset 2; the overlapping match at 1 extends
        // past the cursor and still counts because it starts before it.
        assert_eq!(state.find_next("aaaa").unwrap().start, 0);
        assert_eq!(state.find_next("aaaa").unwrap().start, 2);
        assert_eq!(state.find_previous("aaaa").unwrap().start, 1);
    }

    #[test]
    fn test_set_term_resets_cursor() {
        let text = "one two one two";
        let mut state = SearchState::new();
        state.set_term("one");
        assert_eq!(state.find_next(text).unwrap().start, 0);
        assert_eq!(state.find_next(text).unwrap().start, 8);

        state.set_term("two");
        assert_eq!(state.last_index(), None);
        assert_eq!(state.find_next(text).unwrap().start, 4);
    }

    #[test]
    fn test_empty_term_degrades_to_idle() {
        let mut state = SearchState::new();
        state.set_term("");
        assert!(!state.is_active());
        assert_eq!(state.find_next("anything"), Err(SearchError::NoActiveSearch));
    }

    #[test]
    fn test_stale_offset_past_end_is_tolerated() {
        let mut state = SearchState::new();
        state.set_term("needle");

        let long = "hay needle hay needle";
        assert_eq!(state.find_next(long).unwrap().start, 4);
        assert_eq!(state.find_next(long).unwrap().start, 15);

        // Document shrank underneath the cursor.
        let short = "needle";
        assert_eq!(state.find_next(short), Err(SearchError::NotFound));
        assert_eq!(state.find_previous(short).unwrap().start, 0);
    }

    #[test]
    fn test_stale_offset_mid_char_is_tolerated() {
        let mut state = SearchState::new();
        state.set_term("x");

        // Park the cursor at offset 1, then swap in text where 1 is inside
        // a multi-byte character.
        assert_eq!(state.find_next("x").unwrap().start, 0);
        let text = "déjà x";
        let span = state.find_next(text).unwrap();
        assert_eq!(&text[span.start..span.end], "x");
    }

    #[test]
    fn test_multibyte_term() {
        let text = "naïve naïve";
        let mut state = SearchState::new();
        state.set_term("naïve");

        let first = state.find_next(text).unwrap();
        assert_eq!(first.start, 0);
        let second = state.find_next(text).unwrap();
        assert_eq!(&text[second.start..second.end], "naïve");
        assert_eq!(state.find_next(text), Err(SearchError::NotFound));
    }

    #[test]
    fn test_replace_all_counts_and_substitutes() {
        let (result, count) = replace_all("the cat sat", "at", "XX");
        assert_eq!(result, "the cXX sXX");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_replace_all_miss_leaves_text_unchanged() {
        let (result, count) = replace_all("the cat sat", "dog", "XX");
        assert_eq!(result, "the cat sat");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_replace_all_does_not_cascade() {
        // The replacement contains the needle; only the original
        // occurrences are substituted.
        let (result, count) = replace_all("ab ab", "ab", "abab");
        assert_eq!(result, "abab abab");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_replace_all_non_overlapping() {
        let (result, count) = replace_all("aaa", "aa", "b");
        assert_eq!(result, "ba");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_replace_all_empty_find_is_a_no_op() {
        let (result, count) = replace_all("text", "", "x");
        assert_eq!(result, "text");
        assert_eq!(count, 0);
    }
}
