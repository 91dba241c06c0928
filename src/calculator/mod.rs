//! Keypad calculator core.
//!
//! This module provides:
//! - The evaluation engine and its state
//! - Binary and unary operators
//! - Number parsing, rounding and formatting
//! - A session type that drives a display from input tokens

mod engine;
mod format;
mod operator;
mod session;

pub use engine::{CalculatorState, Engine};
pub use format::{
    DEFAULT_SIGNIFICANT_DIGITS, INFINITY_TEXT, NAN_TEXT, NEG_INFINITY_TEXT, format_number,
    normalize, parse_value, round_significant,
};
pub use operator::{BinaryKey, BinaryOperator, Operator, UnaryOperator};
pub use session::Calculator;
