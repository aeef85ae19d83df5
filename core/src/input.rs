//! Line-oriented input: stop words, document count, one document per line, then the query.

use crate::builder::SearchServerBuilder;
use crate::config::SearchConfig;
use crate::error::InputError;
use crate::index::DocId;
use crate::search::SearchServer;
use std::io::BufRead;

/// A built server together with the query that followed the corpus.
#[derive(Debug)]
pub struct SearchInput {
    pub server: SearchServer,
    pub query: String,
}

struct LineReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self { Self { reader, line: 0 } }

    /// Next line without its terminator (`\n` or `\r\n`).
    fn next_line(&mut self, expected: &'static str) -> Result<String, InputError> {
        self.line += 1;
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Err(InputError::EndOfInput { line: self.line, expected });
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }
}

/// Read the corpus and query from `reader`, assigning document ids 0..N in line order.
pub fn read_search_input<R: BufRead>(reader: R, config: SearchConfig) -> Result<SearchInput, InputError> {
    let mut lines = LineReader::new(reader);
    let mut builder = SearchServerBuilder::new().with_config(config);

    builder.set_stop_words(&lines.next_line("stop words")?);

    let count_line = lines.next_line("document count")?;
    let document_count: DocId = count_line.trim().parse().map_err(|source| InputError::InvalidDocumentCount {
        line: lines.line,
        value: count_line.clone(),
        source,
    })?;

    for doc_id in 0..document_count {
        let text = lines.next_line("document text")?;
        builder.add_document(doc_id, &text);
    }

    let query = lines.next_line("query")?;
    Ok(SearchInput { server: builder.build(), query })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_line_terminators() {
        let input = "a\r\n1\r\ncat a\r\ncat\r\n";
        let parsed = read_search_input(Cursor::new(input), SearchConfig::default()).unwrap();
        assert_eq!(parsed.query, "cat");
        assert_eq!(parsed.server.document_words(0).unwrap(), ["cat"]);
    }

    #[test]
    fn query_without_trailing_newline() {
        let parsed = read_search_input(Cursor::new("\n0\nfind me"), SearchConfig::default()).unwrap();
        assert_eq!(parsed.server.document_count(), 0);
        assert_eq!(parsed.query, "find me");
    }

    #[test]
    fn count_line_tolerates_surrounding_whitespace() {
        let parsed = read_search_input(Cursor::new("\n 2 \nx\ny\nq\n"), SearchConfig::default()).unwrap();
        assert_eq!(parsed.server.document_count(), 2);
    }
}
