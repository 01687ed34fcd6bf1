use minitools_core::{echo, echo_argv};
use pretty_assertions::assert_eq;

#[test]
fn no_words_echo_nothing() {
    let words: [&str; 0] = [];
    assert_eq!(echo(&words), "");
}

#[test]
fn words_are_joined_with_single_spaces() {
    assert_eq!(echo(&["hello", "world"]), "hello world");
}

#[test]
fn punctuation_is_kept_verbatim() {
    assert_eq!(echo(&[";"]), ";");
}

#[test]
fn case_is_preserved() {
    assert_eq!(echo(&["HELLO", "WORLD"]), "HELLO WORLD");
}

#[test]
fn owned_strings_are_accepted() {
    let words = vec![String::from("1"), String::from("2")];
    assert_eq!(echo(words.as_slice()), "1 2");
}

#[test]
fn argv_skips_program_name() {
    assert_eq!(echo_argv(&["./c-echo", "hello", "world"]), "hello world");
    assert_eq!(echo_argv(&["./c-echo", "1"]), "1");
    assert_eq!(echo_argv(&["./c-echo", "HELLO", "WORLD"]), "HELLO WORLD");
}

#[test]
fn argv_with_only_program_name_is_empty() {
    assert_eq!(echo_argv(&["./c-echo"]), "");
    let argv: [&str; 0] = [];
    assert_eq!(echo_argv(&argv), "");
}

#[test]
fn whitespace_argument_is_not_trimmed() {
    assert_eq!(echo_argv(&["./c-echo", " "]), " ");
    assert_eq!(echo(&[" a ", "b"]), " a  b");
}
