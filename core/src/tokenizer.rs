/// Word separator. Only the ASCII space splits words; tabs and other whitespace stay inside tokens.
const WORD_SEPARATOR: char = ' ';

/// Split text into words on every single space.
///
/// Consecutive spaces yield empty words and leading/trailing spaces are kept as empty
/// words at the edges, so an empty string produces exactly one empty word.
pub fn split_into_words(text: &str) -> Vec<String> {
    text.split(WORD_SEPARATOR).map(str::to_owned).collect()
}
