use minitools_core::{count_words, echo, Rectangle, TokenCounter, WhitespaceTokenCounter};
use tools_logging::{tool_debug, tool_trace};

use crate::Command;

/// Runs `command` and returns what the binary prints, without the newline.
pub fn execute(command: &Command) -> String {
    tool_debug!("dispatching {}", command.name());
    let output = match command {
        Command::Echo { words } => echo(words.as_slice()),
        Command::Wc { text } => count_tokens(&WhitespaceTokenCounter, text).to_string(),
        Command::Rect { width, height } => {
            let rect = Rectangle::with_dimensions(*width, *height);
            rect.area().to_string()
        }
    };
    tool_trace!("{} produced {:?}", command.name(), output);
    output
}

/// Counts tokens across `args` joined by single spaces.
fn count_tokens(counter: &dyn TokenCounter, args: &[String]) -> usize {
    let joined = args.join(" ");
    let total = counter.count(&joined);
    debug_assert_eq!(total, args.iter().map(|a| count_words(a)).sum::<usize>());
    total
}
