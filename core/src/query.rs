/// Marks a query word whose documents must be dropped from the results.
pub const MINUS_MARKER: char = '-';

/// A parsed query: plus-terms raise relevance, minus-terms exclude documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: Vec<String>,
    pub minus_words: Vec<String>,
}

impl Query {
    /// Sort a word into the plus or minus partition. A bare `-` becomes an empty minus-term.
    pub(crate) fn push_word(&mut self, word: String) {
        match word.strip_prefix(MINUS_MARKER) {
            Some(rest) => self.minus_words.push(rest.to_owned()),
            None => self.plus_words.push(word),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}
