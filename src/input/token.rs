use std::str::FromStr;

use crate::calculator::{BinaryKey, BinaryOperator, Operator, UnaryOperator};
use crate::error::CalcError;

/// One discrete calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A digit `'0'..='9'`.
    Digit(char),
    DecimalPoint,
    Backspace,
    Negate,
    /// Clear only the current entry.
    ClearEntry,
    /// Reset everything.
    Clear,
    Operator(Operator),
}

impl From<Operator> for InputToken {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<BinaryOperator> for InputToken {
    fn from(op: BinaryOperator) -> Self {
        Self::Operator(op.into())
    }
}

impl From<BinaryKey> for InputToken {
    fn from(key: BinaryKey) -> Self {
        Self::Operator(key.into())
    }
}

impl From<UnaryOperator> for InputToken {
    fn from(op: UnaryOperator) -> Self {
        Self::Operator(op.into())
    }
}

impl FromStr for InputToken {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();

        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_digit()
        {
            return Ok(Self::Digit(c));
        }

        match word.to_lowercase().as_str() {
            "." | "dot" => return Ok(Self::DecimalPoint),
            "back" | "backspace" | "undo" | "⌫" => return Ok(Self::Backspace),
            "neg" | "negate" | "reverse" | "±" => return Ok(Self::Negate),
            "ce" | "clearentry" => return Ok(Self::ClearEntry),
            "c" | "clear" | "ac" => return Ok(Self::Clear),
            _ => {}
        }

        word.parse::<Operator>()
            .map(Self::Operator)
            .map_err(|_| CalcError::UnknownToken(word.to_string()))
    }
}
