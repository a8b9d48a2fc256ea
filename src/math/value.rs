use std::cmp::Ordering;
use std::fmt;

use num_traits::{ToPrimitive, Zero};

use super::operand::Operand;
use super::operation::{Operation, Relation};
use super::rational::{Part, Rational};
use super::NumComponent;
use crate::bag::Bag;
use crate::error::{Error, Result};

/// A dynamically typed value, as handed over by a script or command line.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(NumComponent),
    Rational(Rational),
    Bool(bool),
    Text(String),
    Bag(Bag<String>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Rational(_) => "Rational",
            Value::Bool(_) => "bool",
            Value::Text(_) => "str",
            Value::Bag(_) => "Bag",
        }
    }

    pub fn as_operand(&self) -> Option<Operand> {
        match self {
            Value::Int(n) => Some(Operand::Int(n.clone())),
            Value::Rational(r) => Some(Operand::Rational(r.clone())),
            _ => None,
        }
    }

    fn unsupported(&self, operation: Operation, rhs: &Value) -> Error {
        Error::UnsupportedOperand {
            op: operation.char(),
            left: self.type_name(),
            right: rhs.type_name(),
        }
    }

    /// Evaluates `self <operation> rhs`.
    pub fn apply(&self, operation: Operation, rhs: &Value) -> Result<Value> {
        match (self, rhs) {
            (Value::Rational(l), _) => match rhs.as_operand() {
                Some(r) => l.apply(operation, &r).map(Value::Rational),
                None if operation == Operation::Pow => Err(Error::NonIntegerPower(rhs.to_string())),
                None => Err(self.unsupported(operation, rhs)),
            },
            (Value::Int(l), Value::Rational(r)) => r
                .apply_reflected(operation, &Operand::Int(l.clone()))
                .map(Value::Rational),
            (Value::Int(l), Value::Int(r)) => apply_int(operation, l, r),
            (Value::Bag(l), Value::Bag(r)) if operation == Operation::Add => Ok(Value::Bag(l + r)),
            _ => Err(self.unsupported(operation, rhs)),
        }
    }

    /// Evaluates `self <relation> rhs`.
    ///
    /// A rational on the left refuses anything but numbers. Bags are only
    /// equal to bags and are never ordered.
    pub fn compare(&self, relation: Relation, rhs: &Value) -> Result<bool> {
        let unorderable = || Error::UnsupportedOperand {
            op: relation.char(),
            left: self.type_name(),
            right: rhs.type_name(),
        };
        match (self, rhs) {
            (Value::Rational(l), _) => rhs
                .as_operand()
                .map(|r| l.compare(relation, &r))
                .ok_or(Error::Unorderable { op: relation.char(), right: rhs.type_name() }),
            (Value::Int(l), Value::Rational(r)) => {
                Ok(r.compare(relation.flip(), &Operand::Int(l.clone())))
            }
            // the rational answers for a non-number on its left, except a bag,
            // which answers equality itself
            (l, Value::Rational(_)) if !matches!(l, Value::Bag(_)) => Err(Error::Unorderable {
                op: relation.flip().char(),
                right: self.type_name(),
            }),
            (Value::Int(l), Value::Int(r)) => Ok(holds(relation, l.cmp(r))),
            (Value::Text(l), Value::Text(r)) => Ok(holds(relation, l.cmp(r))),
            (Value::Bool(l), Value::Bool(r)) => Ok(holds(relation, l.cmp(r))),
            (Value::Bag(l), Value::Bag(r)) => match relation {
                Relation::Eq => Ok(l == r),
                Relation::Ne => Ok(l != r),
                _ => Err(unorderable()),
            },
            _ => match relation {
                Relation::Eq => Ok(false),
                Relation::Ne => Ok(true),
                _ => Err(unorderable()),
            },
        }
    }

    /// Looks up a component of a rational by `0`/`1` or by a prefix of
    /// "numerator"/"denominator".
    pub fn index(&self, key: &Value) -> Result<Value> {
        let Value::Rational(r) = self else {
            return Err(Error::InvalidIndex(key.to_string()));
        };
        let part = match key {
            Value::Int(n) => {
                let index = n.to_i64().ok_or_else(|| Error::InvalidIndex(n.to_string()))?;
                Part::from_index(index)?
            }
            Value::Text(s) => s.parse::<Part>()?,
            _ => return Err(Error::InvalidIndex(key.to_string())),
        };
        Ok(Value::Int(r[part].clone()))
    }
}

fn holds(relation: Relation, ord: Ordering) -> bool {
    match relation {
        Relation::Eq => ord == Ordering::Equal,
        Relation::Ne => ord != Ordering::Equal,
        Relation::Lt => ord == Ordering::Less,
        Relation::Le => ord != Ordering::Greater,
        Relation::Gt => ord == Ordering::Greater,
        Relation::Ge => ord != Ordering::Less,
    }
}

// integer division and negative powers leave the integers
fn apply_int(operation: Operation, l: &NumComponent, r: &NumComponent) -> Result<Value> {
    match operation {
        Operation::Add => Ok(Value::Int(l + r)),
        Operation::Sub => Ok(Value::Int(l - r)),
        Operation::Mul => Ok(Value::Int(l * r)),
        Operation::Div => {
            if r.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(Value::Rational(Rational::integer(l.clone()) / Rational::integer(r.clone())))
        }
        Operation::Pow => {
            let exp = r.to_i32().ok_or_else(|| Error::PowerOutOfRange(r.to_string()))?;
            if exp.is_negative() {
                Rational::integer(l.clone()).pow(exp).map(Value::Rational)
            } else {
                Ok(Value::Int(num_traits::pow(l.clone(), exp as usize)))
            }
        }
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Value::Rational(r)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(NumComponent::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<Bag<String>> for Value {
    fn from(b: Bag<String>) -> Self {
        Value::Bag(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Rational(r) => write!(f, "{r}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bag(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
fn rat(n: i64, d: i64) -> Value {
    Value::Rational(Rational::new(n, d).unwrap())
}

#[test]
fn mixed_arithmetic_test() {
    let half = rat(1, 2);
    let two = Value::from(2i64);
    assert_eq!(half.apply(Operation::Add, &two), Ok(rat(5, 2)));
    assert_eq!(two.apply(Operation::Add, &half), Ok(rat(5, 2)));
    assert_eq!(two.apply(Operation::Sub, &half), Ok(rat(3, 2)));
    assert_eq!(half.apply(Operation::Sub, &two), Ok(rat(-3, 2)));
    assert_eq!(two.apply(Operation::Div, &half), Ok(rat(4, 1)));
    assert_eq!(half.apply(Operation::Pow, &Value::from(-2i64)), Ok(rat(4, 1)));
    assert_eq!(two.apply(Operation::Div, &Value::from(4i64)), Ok(rat(1, 2)));
    assert_eq!(two.apply(Operation::Pow, &Value::from(-1i64)), Ok(rat(1, 2)));
    assert_eq!(two.apply(Operation::Pow, &Value::from(10i64)), Ok(Value::from(1024i64)));
    assert_eq!(half.apply(Operation::Div, &Value::from(0i64)), Err(Error::DivisionByZero));
    assert_eq!(Value::from(0i64).apply(Operation::Div, &half), Ok(rat(0, 1)));
    assert_eq!(half.apply(Operation::Div, &rat(0, 3)), Err(Error::DivisionByZero));
}

#[test]
fn unsupported_operand_test() {
    let half = rat(1, 2);
    let text = Value::from("abc");
    for op in [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div] {
        let err = half.apply(op, &text).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("unsupported operand type(s) for {}: 'Rational' and 'str'", op.char())
        );
        let err = text.apply(op, &half).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("unsupported operand type(s) for {}: 'str' and 'Rational'", op.char())
        );
    }
    assert_eq!(half.apply(Operation::Pow, &text), Err(Error::NonIntegerPower("abc".to_owned())));
    assert_eq!(
        Value::from(2i64).apply(Operation::Pow, &half),
        Err(Error::UnsupportedOperand { op: "**", left: "int", right: "Rational" })
    );
}

#[test]
fn compare_test() {
    let half = rat(1, 2);
    assert_eq!(half.compare(Relation::Lt, &Value::from(1i64)), Ok(true));
    assert_eq!(Value::from(1i64).compare(Relation::Lt, &half), Ok(false));
    assert_eq!(Value::from(1i64).compare(Relation::Gt, &half), Ok(true));
    assert_eq!(rat(4, 2).compare(Relation::Eq, &Value::from(2i64)), Ok(true));
    assert_eq!(Value::from(2i64).compare(Relation::Ge, &Value::from(2i64)), Ok(true));

    let text = Value::from("abc");
    for rel in [Relation::Eq, Relation::Ne, Relation::Lt, Relation::Le, Relation::Gt, Relation::Ge] {
        let err = half.compare(rel, &text).unwrap_err();
        assert_eq!(err.to_string(), format!("unorderable types: Rational() {} str()", rel.char()));
    }

    // with the text on the left the rational still refuses, seen from its side
    assert_eq!(
        text.compare(Relation::Eq, &half),
        Err(Error::Unorderable { op: "==", right: "str" })
    );
    assert_eq!(
        text.compare(Relation::Ne, &half),
        Err(Error::Unorderable { op: "!=", right: "str" })
    );
    assert_eq!(
        text.compare(Relation::Lt, &half).unwrap_err().to_string(),
        "unorderable types: Rational() > str()"
    );
    assert_eq!(
        Value::Bool(true).compare(Relation::Ge, &half),
        Err(Error::Unorderable { op: "<=", right: "bool" })
    );

    // a bag answers equality before the rational is asked
    let bag = Value::Bag(Bag::new());
    assert_eq!(bag.compare(Relation::Eq, &half), Ok(false));
    assert_eq!(bag.compare(Relation::Ne, &half), Ok(true));
}

#[test]
fn bag_value_test() {
    let a = Value::Bag(vec!["x".to_owned(), "y".to_owned()].into());
    let b = Value::Bag(vec!["x".to_owned()].into());
    let Ok(Value::Bag(sum)) = a.apply(Operation::Add, &b) else {
        panic!("bag union failed");
    };
    assert_eq!(sum.count("x"), 2);
    assert_eq!(sum.count("y"), 1);

    assert_eq!(
        a.apply(Operation::Add, &Value::from(1i64)),
        Err(Error::UnsupportedOperand { op: "+", left: "Bag", right: "int" })
    );
    assert_eq!(a.apply(Operation::Sub, &b).unwrap_err().to_string(), "unsupported operand type(s) for -: 'Bag' and 'Bag'");

    // a bag never equals a non-bag, and that is not an error
    assert_eq!(a.compare(Relation::Eq, &Value::from(1i64)), Ok(false));
    assert_eq!(a.compare(Relation::Ne, &Value::from("x")), Ok(true));
    assert_eq!(a.compare(Relation::Eq, &a.clone()), Ok(true));
    assert!(a.compare(Relation::Lt, &b).is_err());
}

#[test]
fn index_test() {
    let r = rat(-3, 4);
    assert_eq!(r.index(&Value::from(0i64)), Ok(Value::from(-3i64)));
    assert_eq!(r.index(&Value::from(1i64)), Ok(Value::from(4i64)));
    assert_eq!(r.index(&Value::from("NUMER")), Ok(Value::from(-3i64)));
    assert_eq!(r.index(&Value::from("den")), Ok(Value::from(4i64)));
    assert_eq!(r.index(&Value::from(2i64)), Err(Error::InvalidIndex("2".to_owned())));
    assert_eq!(r.index(&Value::from("")), Err(Error::InvalidIndex("".to_owned())));
    assert_eq!(r.index(&Value::from("nd")), Err(Error::InvalidIndex("nd".to_owned())));
    assert!(r.index(&rat(1, 2)).is_err());
}
