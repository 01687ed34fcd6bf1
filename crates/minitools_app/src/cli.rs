use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Miniature text and geometry utilities", long_about = None)]
pub struct Args {
    /// Log level (off, error, warn, info, debug, trace); must precede the command
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the words joined by single spaces
    Echo {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Print the number of whitespace-delimited tokens
    Wc {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Print the area of a rectangle (negative sides are allowed)
    Rect {
        #[arg(long, allow_negative_numbers = true)]
        width: i32,
        #[arg(long, allow_negative_numbers = true)]
        height: i32,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Echo { .. } => "echo",
            Command::Wc { .. } => "wc",
            Command::Rect { .. } => "rect",
        }
    }
}
