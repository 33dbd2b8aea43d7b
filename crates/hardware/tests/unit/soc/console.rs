//! Stream Console Tests.

use std::io::Cursor;

use mipsim_core::common::ConsoleError;
use mipsim_core::soc::{Console, StreamConsole};
use pretty_assertions::assert_eq;

fn console(input: &str) -> StreamConsole<Cursor<Vec<u8>>, Vec<u8>> {
    StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn prints_without_separators() {
    let mut con = console("");
    con.print_int(12).unwrap();
    con.print_int(-3).unwrap();
    con.print_str(b" ok\n").unwrap();
    assert_eq!(con.into_output(), b"12-3 ok\n".to_vec());
}

#[test]
fn reads_tokens_across_whitespace() {
    let mut con = console("  1\t2\n\n   -7  \n+4");
    assert_eq!(con.read_int().unwrap(), 1);
    assert_eq!(con.read_int().unwrap(), 2);
    assert_eq!(con.read_int().unwrap(), -7);
    assert_eq!(con.read_int().unwrap(), 4);
    assert!(matches!(con.read_int(), Err(ConsoleError::EndOfInput)));
}

#[test]
fn rejects_out_of_range_integer() {
    let mut con = console("2147483648");
    assert!(matches!(
        con.read_int(),
        Err(ConsoleError::InvalidInteger(token)) if token == "2147483648"
    ));
}

#[test]
fn bad_token_does_not_consume_the_next() {
    let mut con = console("x 5");
    assert!(con.read_int().is_err());
    assert_eq!(con.read_int().unwrap(), 5);
}
