//! A calculator wired to a display.

use tracing::debug;

use super::engine::Engine;
use crate::config::Config;
use crate::display::DisplaySink;
use crate::error::Result;
use crate::input::InputToken;

/// One engine plus the display it drives.
///
/// Every dispatched token is followed by a projection into the sink, so the
/// display always mirrors the engine state.
pub struct Calculator<S: DisplaySink> {
    engine: Engine,
    sink: S,
}

impl<S: DisplaySink> Calculator<S> {
    /// Create a calculator in its reset state and show it.
    pub fn new(config: Config, sink: S) -> Self {
        let mut calculator = Self {
            engine: Engine::new(config),
            sink,
        };
        calculator.engine.reset();
        calculator.refresh();
        calculator
    }

    /// Apply one token and refresh the display.
    ///
    /// A rejected token leaves both the engine and the display untouched.
    pub fn dispatch(&mut self, token: InputToken) -> Result<()> {
        debug!(?token, "dispatch");
        match token {
            InputToken::Digit(digit) => self.engine.input_digit(digit)?,
            InputToken::DecimalPoint => self.engine.input_decimal_point(),
            InputToken::Backspace => self.engine.backspace(),
            InputToken::Negate => self.engine.negate(),
            InputToken::ClearEntry => self.engine.clear_entry(),
            InputToken::Clear => self.engine.reset(),
            InputToken::Operator(op) => self.engine.apply(op),
        }
        self.refresh();
        Ok(())
    }

    /// Apply tokens in order, stopping at the first rejected one.
    pub fn dispatch_all<I>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = InputToken>,
    {
        tokens.into_iter().try_for_each(|token| self.dispatch(token))
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn refresh(&mut self) {
        self.engine.project_display().render_to(&mut self.sink);
    }
}
