/// Counts tokens in a piece of text.
pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;
}

/// Counts maximal runs of non-whitespace characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenCounter;

impl TokenCounter for WhitespaceTokenCounter {
    fn count(&self, text: &str) -> usize {
        count_words(text)
    }
}

/// C-locale `isspace`: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
///
/// Unlike [`char::is_ascii_whitespace`] this includes vertical tab. Non-ASCII
/// whitespace is not a separator.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Number of whitespace-delimited tokens in `text`.
///
/// Runs of separators count as one, and leading or trailing separators never
/// start a token. Empty and whitespace-only input yield 0.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut on_space = true;
    for c in text.chars() {
        if is_separator(c) {
            on_space = true;
        } else if on_space {
            count += 1;
            on_space = false;
        }
    }
    count
}
