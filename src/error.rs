use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported operand type(s) for {op}: '{left}' and '{right}'")]
    UnsupportedOperand {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("unorderable types: Rational() {op} {right}()")]
    Unorderable {
        op: &'static str,
        right: &'static str,
    },
    #[error("power({0}) is not of type int")]
    NonIntegerPower(String),
    /// Exponents must fit in an `i32`, even for bases like 0 or 1 whose
    /// powers stay small.
    #[error("power({0}) is out of range")]
    PowerOutOfRange(String),
    #[error("index({0}) is not 0, 1, or a prefix of numerator or denominator")]
    InvalidIndex(String),
    #[error("{0} could not be removed")]
    AbsentElement(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("denominator is zero")]
    ZeroDenominator,
    #[error("could not parse '{0}'")]
    Parse(String),
}

#[test]
fn message_test() {
    let e = Error::UnsupportedOperand { op: "+", left: "Rational", right: "str" };
    assert_eq!(e.to_string(), "unsupported operand type(s) for +: 'Rational' and 'str'");

    let e = Error::Unorderable { op: "<", right: "str" };
    assert_eq!(e.to_string(), "unorderable types: Rational() < str()");

    assert_eq!(Error::AbsentElement("x".to_owned()).to_string(), "x could not be removed");
}
