use log::trace;

use super::operation::{Operation, Relation};
use super::parsefmt::parse;
use super::value::Value;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Operator {
    Arithmetic(Operation),
    Relation(Relation),
}

impl Operator {
    pub fn from_str(s: &str) -> Option<Self> {
        Operation::from_str(s)
            .map(Operator::Arithmetic)
            .or_else(|| Relation::from_str(s).map(Operator::Relation))
    }

    pub fn char(&self) -> &'static str {
        match self {
            Operator::Arithmetic(op) => op.char(),
            Operator::Relation(rel) => rel.char(),
        }
    }
}

/// A single step `left <operator> right`, or a lone value.
#[derive(Clone, Debug, PartialEq)]
pub struct Equation {
    pub left: Value,
    pub operation: Option<Operator>,
    pub right: Option<Value>,
}

impl Equation {
    /// Splits on the first whitespace-separated operator token after the first
    /// token; `1 - -3` subtracts a negative number.
    pub fn parse(text: &str) -> Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let split = tokens
            .iter()
            .enumerate()
            .skip(1)
            .find_map(|(i, t)| Operator::from_str(t).map(|op| (i, op)));

        let Some((i, operation)) = split else {
            return Ok(Self { left: parse(text)?, operation: None, right: None });
        };
        if i + 1 >= tokens.len() {
            return Err(Error::Parse(text.trim().to_owned()));
        }
        Ok(Self {
            left: parse(&tokens[..i].join(" "))?,
            operation: Some(operation),
            right: Some(parse(&tokens[i + 1..].join(" "))?),
        })
    }

    pub fn eval(&self) -> Result<Value> {
        let (Some(operation), Some(right)) = (self.operation, self.right.as_ref()) else {
            return Ok(self.left.clone());
        };
        trace!("eval: {} {} {}", self.left, operation.char(), right);
        match operation {
            Operator::Arithmetic(op) => self.left.apply(op, right),
            Operator::Relation(rel) => self.left.compare(rel, right).map(Value::Bool),
        }
    }

    pub fn display(&self) -> String {
        let mut out = format!("{}", self.left);
        if let (Some(operation), Some(right)) = (self.operation, self.right.as_ref()) {
            out += format!(" {} {}", operation.char(), right).as_str();
        }
        out
    }
}

#[cfg(test)]
use super::rational::Rational;

#[test]
fn parse_test() {
    let eq = Equation::parse("1/3 + 1/6").unwrap();
    assert_eq!(eq.left, Value::Rational(Rational::new(1, 3).unwrap()));
    assert_eq!(eq.operation, Some(Operator::Arithmetic(Operation::Add)));
    assert!(eq.right.is_some());

    let eq = Equation::parse("-3").unwrap();
    assert_eq!(eq.left, Value::from(-3i64));
    assert_eq!(eq.right, None);

    let eq = Equation::parse("[a, b] == [b, a]").unwrap();
    assert_eq!(eq.operation, Some(Operator::Relation(Relation::Eq)));

    assert_eq!(Equation::parse("1 +"), Err(Error::Parse("1 +".to_owned())));
}

#[test]
fn eval_test() {
    let eval = |s: &str| Equation::parse(s).and_then(|eq| eq.eval());
    assert_eq!(eval("1/3 + 1/6"), Ok(Value::Rational(Rational::new(1, 2).unwrap())));
    assert_eq!(eval("2 ** -2"), Ok(Value::Rational(Rational::new(1, 4).unwrap())));
    assert_eq!(eval("2/1 ** -2"), Ok(Value::Rational(Rational::new(1, 4).unwrap())));
    assert_eq!(eval("0/1 ** 0"), Ok(Value::Rational(Rational::new(1, 1).unwrap())));
    assert_eq!(eval("1/2 < 2/3"), Ok(Value::Bool(true)));
    assert_eq!(eval("[a, b, b] == [a, a, b]"), Ok(Value::Bool(true)));
    assert_eq!(eval("1/2 / 0"), Err(Error::DivisionByZero));
    assert_eq!(
        eval("1/2 * abc").unwrap_err().to_string(),
        "unsupported operand type(s) for *: 'Rational' and 'str'"
    );
    assert_eq!(eval("7"), Ok(Value::from(7i64)));
}

#[test]
fn display_test() {
    let eq = Equation::parse("2/4 - [x]").unwrap();
    assert_eq!(eq.display(), "1/2 - Bag(x[1])");
}
