/// Joins `words` with single spaces, leaving each word verbatim.
pub fn echo<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.as_ref().len() + 1).sum());
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(word.as_ref());
    }
    out
}

/// Like [`echo`], but `argv[0]` is the program name and is skipped.
pub fn echo_argv<S: AsRef<str>>(argv: &[S]) -> String {
    echo(argv.get(1..).unwrap_or_default())
}
