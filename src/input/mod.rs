//! Input tokens and the text lexer that produces them.
//!
//! The engine never sees raw text; front ends turn user gestures into
//! [`InputToken`]s and the session dispatches them.

mod lexer;
mod token;

pub use lexer::tokenize;
pub use token::InputToken;
