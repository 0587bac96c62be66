//! Greedy word wrap for warning and error bodies.

use textwrap::core::Word;
use textwrap::{fill, Options, WordSeparator, WordSplitter, WrapAlgorithm};

const NO_BREAK_SPACE: char = '\u{a0}';

/// Reflows `text` so no line exceeds `width` columns.
///
/// Breaks on any whitespace except the no-break space and never splits a
/// word, so a token longer than `width` is left intact on a line of its
/// own. Existing line breaks, including blank lines, are kept.
pub fn wrap_body(text: &str, width: usize) -> String {
    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::Custom(find_words))
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);
    fill(text, &options)
}

fn is_break(ch: char) -> bool {
    ch.is_whitespace() && ch != NO_BREAK_SPACE
}

/// Tiles `line` into words, each carrying the whitespace run after it.
fn find_words(line: &str) -> Box<dyn Iterator<Item = Word<'_>> + '_> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut in_whitespace = false;

    for (idx, ch) in line.char_indices() {
        if in_whitespace && !is_break(ch) {
            words.push(split_word(&line[start..idx]));
            start = idx;
        }
        in_whitespace = is_break(ch);
    }
    if start < line.len() {
        words.push(split_word(&line[start..]));
    }

    Box::new(words.into_iter())
}

fn split_word(chunk: &str) -> Word<'_> {
    let text = chunk.trim_end_matches(is_break);
    let mut word = Word::from(text);
    word.whitespace = &chunk[text.len()..];
    word
}
