#![allow(non_snake_case)]

use super::*;

#[test]
fn Outcome___from_ok___is_success() {
    let outcome: Outcome<u8, String> = Ok(7).into();

    assert!(outcome.is_success());
    assert!(outcome.error().is_none());
}

#[test]
fn Outcome___from_err___is_failure() {
    let outcome: Outcome<u8, String> = Err("nope".to_string()).into();

    assert!(outcome.is_failure());
    assert_eq!(outcome.error().map(String::as_str), Some("nope"));
}
