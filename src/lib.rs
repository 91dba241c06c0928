//! A keypad-style calculator.
//!
//! Input tokens drive an [`Engine`](calculator::Engine) that evaluates
//! strictly left to right, two operands at a time, and projects its state
//! onto a primary and a secondary display.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod input;

pub use calculator::{Calculator, Engine};
pub use config::Config;
pub use display::{Display, DisplaySink, TerminalDisplay};
pub use error::CalcError;
pub use input::{InputToken, tokenize};
