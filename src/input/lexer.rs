//! Splits a line of text into calculator input tokens.

use lazy_static::lazy_static;
use regex::Regex;

use super::InputToken;
use crate::error::Result;

lazy_static! {
    /// One token per match. `1/x` and `x²` are tried before single digits
    /// and letters so they are not split apart.
    static ref TOKEN: Regex = Regex::new(
        r"1/x|x²|[0-9]|[A-Za-z]+|\S"
    ).unwrap();
}

/// Tokenize a line such as `"12.5 + 3 ="` or `"9 sqrt"`.
///
/// Digits are emitted one per character, so `12` becomes two digit tokens.
/// The first unrecognised word fails the whole line.
pub fn tokenize(line: &str) -> Result<Vec<InputToken>> {
    TOKEN
        .find_iter(line)
        .map(|m| m.as_str().parse::<InputToken>())
        .collect()
}
