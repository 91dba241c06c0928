//! Binary and unary calculator operators.

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// An arithmetic operator that takes two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Apply the operator to the left and right operands.
    ///
    /// Division by zero is left to IEEE-754 semantics.
    pub fn evaluate(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// Symbol shown in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Canonical operator name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Self::Add),
            "subtract" | "minus" | "-" | "−" => Ok(Self::Subtract),
            "multiply" | "times" | "x" | "*" | "×" => Ok(Self::Multiply),
            "divide" | "/" | "÷" => Ok(Self::Divide),
            _ => Err(CalcError::InvalidOperator(s.to_string())),
        }
    }
}

/// A key on the binary-operator row: an arithmetic operator or equals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryKey {
    Operator(BinaryOperator),
    Equals,
}

impl From<BinaryOperator> for BinaryKey {
    fn from(op: BinaryOperator) -> Self {
        Self::Operator(op)
    }
}

impl FromStr for BinaryKey {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equals" | "equal" | "=" => Ok(Self::Equals),
            _ => s.parse().map(Self::Operator),
        }
    }
}

/// An operator computed instantly from the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Square,
    SquareRoot,
    Reciprocal,
    Percent,
}

impl UnaryOperator {
    /// Apply the operator to `value`.
    ///
    /// `base` is only consulted by [`UnaryOperator::Percent`].
    pub fn evaluate(self, value: f64, base: f64) -> f64 {
        match self {
            Self::Square => value.powi(2),
            Self::SquareRoot => value.sqrt(),
            Self::Reciprocal => 1.0 / value,
            Self::Percent => (base * value) / 100.0,
        }
    }

    /// History line for applying the operator to `operand`, if the operator
    /// records one.
    pub fn history(self, operand: &str) -> Option<String> {
        match self {
            Self::Square => Some(format!("sqr({})", operand)),
            Self::SquareRoot => Some(format!("√({})", operand)),
            Self::Reciprocal => Some(format!("1/({})", operand)),
            Self::Percent => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::SquareRoot => "sqrt",
            Self::Reciprocal => "reciprocal",
            Self::Percent => "percent",
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" | "sqr" | "pow" | "x²" => Ok(Self::Square),
            "squareroot" | "sqrt" | "√" => Ok(Self::SquareRoot),
            "reciprocal" | "fraction" | "inv" | "1/x" => Ok(Self::Reciprocal),
            "percent" | "%" => Ok(Self::Percent),
            _ => Err(CalcError::InvalidOperator(s.to_string())),
        }
    }
}

/// Any operator identifier the input layer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Binary(BinaryKey),
    Unary(UnaryOperator),
}

impl From<BinaryKey> for Operator {
    fn from(key: BinaryKey) -> Self {
        Self::Binary(key)
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op.into())
    }
}

impl From<UnaryOperator> for Operator {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<BinaryKey>()
            .map(Self::Binary)
            .or_else(|_| s.parse::<UnaryOperator>().map(Self::Unary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_evaluation() {
        assert_eq!(BinaryOperator::Add.evaluate(5.0, 3.0), 8.0);
        assert_eq!(BinaryOperator::Subtract.evaluate(5.0, 3.0), 2.0);
        assert_eq!(BinaryOperator::Multiply.evaluate(5.0, 3.0), 15.0);
        assert_eq!(BinaryOperator::Divide.evaluate(6.0, 3.0), 2.0);
        assert!(BinaryOperator::Divide.evaluate(1.0, 0.0).is_infinite());
        assert!(BinaryOperator::Divide.evaluate(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_unary_evaluation() {
        assert_eq!(UnaryOperator::Square.evaluate(4.0, 1.0), 16.0);
        assert_eq!(UnaryOperator::SquareRoot.evaluate(9.0, 1.0), 3.0);
        assert!(UnaryOperator::SquareRoot.evaluate(-1.0, 1.0).is_nan());
        assert_eq!(UnaryOperator::Reciprocal.evaluate(4.0, 1.0), 0.25);
        assert_eq!(UnaryOperator::Percent.evaluate(50.0, 1.0), 0.5);
        assert_eq!(UnaryOperator::Percent.evaluate(10.0, 200.0), 20.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(BinaryOperator::Add.symbol(), "+");
        assert_eq!(BinaryOperator::Subtract.symbol(), "−");
        assert_eq!(BinaryOperator::Multiply.to_string(), "×");
        assert_eq!(BinaryOperator::Divide.to_string(), "÷");
    }

    #[test]
    fn test_unary_history() {
        assert_eq!(UnaryOperator::Square.history("5").as_deref(), Some("sqr(5)"));
        assert_eq!(UnaryOperator::SquareRoot.history("9").as_deref(), Some("√(9)"));
        assert_eq!(UnaryOperator::Reciprocal.history("4").as_deref(), Some("1/(4)"));
        assert_eq!(UnaryOperator::Percent.history("50"), None);
    }

    #[test]
    fn test_parse_operator_names() {
        assert_eq!("add".parse::<Operator>().unwrap(), Operator::from(BinaryOperator::Add));
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::from(BinaryOperator::Divide));
        assert_eq!("=".parse::<Operator>().unwrap(), Operator::from(BinaryKey::Equals));
        assert_eq!("Equals".parse::<Operator>().unwrap(), Operator::from(BinaryKey::Equals));
        assert_eq!("sqrt".parse::<Operator>().unwrap(), Operator::from(UnaryOperator::SquareRoot));
        assert_eq!("1/x".parse::<Operator>().unwrap(), Operator::from(UnaryOperator::Reciprocal));
        assert_eq!("%".parse::<Operator>().unwrap(), Operator::from(UnaryOperator::Percent));
    }

    #[test]
    fn test_parse_invalid_operator() {
        let err = "modulo".parse::<Operator>().unwrap_err();
        assert!(matches!(err, CalcError::InvalidOperator(name) if name == "modulo"));
    }
}
