//! Minitools core: the pure operations behind each utility.
mod echo;
mod rectangle;
mod words;

pub use echo::{echo, echo_argv};
pub use rectangle::Rectangle;
pub use words::{count_words, is_separator, TokenCounter, WhitespaceTokenCounter};
