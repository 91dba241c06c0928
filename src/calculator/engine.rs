//! The calculator's evaluation state machine.
//!
//! Values are kept as decimal text so that the display always mirrors what
//! the user typed. Operators parse that text, compute in `f64` and render the
//! rounded result back to text.

use tracing::{debug, trace, warn};

use super::format::{format_number, normalize, parse_value};
use super::operator::{BinaryKey, BinaryOperator, Operator, UnaryOperator};
use crate::config::Config;
use crate::display::Display;
use crate::error::{CalcError, Result};

/// Complete calculator state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    /// Value being edited or last computed.
    pub current_value: String,
    /// Left operand of the pending binary operation.
    pub previous_value: Option<String>,
    /// Pending binary operation. Set and cleared together with `previous_value`.
    pub pending_operator: Option<BinaryOperator>,
    /// Trace shown on the secondary display; empty hides it.
    pub history: String,
    /// Whether the next digit starts a fresh number.
    pub is_new_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: None,
            pending_operator: None,
            history: String::new(),
            is_new_entry: true,
        }
    }
}

/// Calculator engine owning one [`CalculatorState`].
///
/// Every operation runs to completion on `&mut self`; independent
/// calculators are independent engines.
#[derive(Clone, Debug)]
pub struct Engine {
    state: CalculatorState,
    config: Config,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_value(&self) -> &str {
        &self.state.current_value
    }

    pub fn previous_value(&self) -> Option<&str> {
        self.state.previous_value.as_deref()
    }

    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.state.pending_operator
    }

    pub fn history(&self) -> &str {
        &self.state.history
    }

    pub fn is_new_entry(&self) -> bool {
        self.state.is_new_entry
    }

    /// Reset to the initial state in place.
    pub fn reset(&mut self) {
        trace!("reset");
        self.state = CalculatorState::default();
    }

    /// Enter one digit.
    ///
    /// A new entry replaces the current value; otherwise the digit is
    /// appended, with a lone `"0"` replaced rather than extended. Digits past
    /// the configured cap are ignored.
    pub fn input_digit(&mut self, digit: char) -> Result<()> {
        if !digit.is_ascii_digit() {
            return Err(CalcError::InvalidDigit(digit));
        }

        let state = &mut self.state;
        if state.is_new_entry {
            state.current_value = digit.to_string();
            state.is_new_entry = false;
        } else if state.current_value == "0" {
            state.current_value = digit.to_string();
        } else {
            let digits = state
                .current_value
                .chars()
                .filter(char::is_ascii_digit)
                .count();
            if digits >= self.config.max_digits {
                warn!(max = self.config.max_digits, "digit limit reached, ignoring input");
                return Ok(());
            }
            state.current_value.push(digit);
        }

        trace!(value = %state.current_value, "digit entered");
        Ok(())
    }

    /// Append a decimal point unless the value already has one.
    ///
    /// A non-finite value (`Infinity`, `NaN`) starts a fresh `"0."` instead.
    pub fn input_decimal_point(&mut self) {
        let state = &mut self.state;
        if !parse_value(&state.current_value).is_finite() {
            state.current_value = "0.".to_string();
            state.is_new_entry = false;
            trace!("decimal point replaced non-finite value");
        } else if !state.current_value.contains('.') {
            state.current_value.push('.');
            state.is_new_entry = false;
            trace!(value = %state.current_value, "decimal point entered");
        }
    }

    /// Remove the last character of the current value.
    pub fn backspace(&mut self) {
        let state = &mut self.state;
        let finite = parse_value(&state.current_value).is_finite();

        if finite && state.current_value.chars().count() > 1 {
            state.current_value.pop();
            if state.current_value == "-" {
                state.current_value = "0".to_string();
            }
        } else {
            state.current_value = "0".to_string();
        }

        trace!(value = %state.current_value, "backspace");
    }

    /// Flip the sign of the current value.
    pub fn negate(&mut self) {
        let state = &mut self.state;
        state.current_value = format_number(parse_value(&state.current_value) * -1.0);
        trace!(value = %state.current_value, "negated");
    }

    /// Clear the current entry, keeping any pending operation and history.
    pub fn clear_entry(&mut self) {
        self.state.current_value = "0".to_string();
        self.state.is_new_entry = true;
        trace!("entry cleared");
    }

    /// Press an arithmetic operator or equals.
    ///
    /// A new operator resolves any pending operation first, so `5 + 3 +`
    /// shows `8` before the next operand is entered.
    pub fn apply_binary_operator(&mut self, key: impl Into<BinaryKey>) {
        match key.into() {
            BinaryKey::Equals => {
                let entry = format!(" {} =", self.state.current_value);
                self.state.history.push_str(&entry);
                self.resolve();
            }
            BinaryKey::Operator(op) => {
                if self.state.pending_operator.is_some() {
                    self.resolve();
                }
                let state = &mut self.state;
                state.previous_value = Some(state.current_value.clone());
                state.pending_operator = Some(op);
                state.history = format!("{} {}", state.current_value, op.symbol());
                debug!(operator = op.name(), lhs = %state.current_value, "operator pending");
            }
        }

        self.state.is_new_entry = true;
    }

    /// Apply an instant operator to the current value.
    pub fn apply_unary_operator(&mut self, op: UnaryOperator) {
        let value = parse_value(&self.state.current_value);
        let base = match (&self.state.previous_value, self.state.pending_operator) {
            (Some(previous), Some(_)) => parse_value(previous),
            _ => 1.0,
        };

        let operand = format_number(value);
        if let Some(history) = op.history(&operand) {
            self.state.history = history;
        } else if op == UnaryOperator::Percent && self.config.percent_history {
            self.state.history = format!("{}%", operand);
        }

        let result = op.evaluate(value, base);
        self.state.current_value = normalize(result, self.config.significant_digits);
        self.state.is_new_entry = true;

        debug!(operator = op.name(), operand = %operand, result = %self.state.current_value, "unary operator applied");
    }

    /// Apply an already-parsed operator.
    pub fn apply(&mut self, operator: Operator) {
        match operator {
            Operator::Binary(key) => self.apply_binary_operator(key),
            Operator::Unary(op) => self.apply_unary_operator(op),
        }
    }

    /// Apply an operator by name, e.g. `"add"`, `"÷"`, `"sqrt"` or `"="`.
    ///
    /// Unknown names are rejected without touching the state.
    pub fn apply_operator(&mut self, name: &str) -> Result<()> {
        let operator: Operator = name.parse()?;
        self.apply(operator);
        Ok(())
    }

    /// Project the state onto the primary and secondary displays.
    pub fn project_display(&self) -> Display {
        Display {
            primary: self.state.current_value.clone(),
            secondary: self.state.history.clone(),
            secondary_visible: !self.state.history.is_empty(),
        }
    }

    /// Compute the pending binary operation, if any, into the current value.
    fn resolve(&mut self) {
        let state = &mut self.state;
        let (Some(previous), Some(op)) = (state.previous_value.take(), state.pending_operator.take())
        else {
            return;
        };

        let lhs = parse_value(&previous);
        let rhs = parse_value(&state.current_value);
        let result = op.evaluate(lhs, rhs);
        state.current_value = normalize(result, self.config.significant_digits);

        debug!(
            operator = op.name(),
            lhs = %previous,
            result = %state.current_value,
            "resolved pending operation"
        );
    }
}
