use std::str::FromStr;

use super::{rational::Rational, value::Value, Num, NumComponent};
use crate::bag::Bag;
use crate::error::{Error, Result};

macro_rules! num {
    ($numer:expr, $denom:expr) => {
        Num::new(NumComponent::from($numer), NumComponent::from($denom))
    };
}

/// Parses one operand: `7`, `-3/4`, `2.5`, `[a, b, a]`, `'quoted'`, or
/// falls back to plain text.
pub fn parse(s: &str) -> Result<Value> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return Ok(Value::Bag(parse_bag(inner)));
    }
    if let Some(text) = unquote(s) {
        return Ok(Value::Text(text.to_owned()));
    }
    if let Ok(int) = NumComponent::from_str(s) {
        return Ok(Value::Int(int));
    }
    if let Some((numer, denom)) = s.split_once('/') {
        return parse_fraction(numer, denom);
    }
    if let Some((int, fract)) = s.split_once('.') {
        if let Some(r) = parse_decimal(int, fract) {
            return Ok(Value::Rational(r));
        }
    }
    Ok(Value::Text(s.to_owned()))
}

fn unquote(s: &str) -> Option<&str> {
    ['\'', '"']
        .iter()
        .find_map(|q| s.strip_prefix(*q).and_then(|s| s.strip_suffix(*q)))
}

fn parse_bag(inner: &str) -> Bag<String> {
    inner
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| unquote(item).unwrap_or(item).to_owned())
        .collect()
}

fn parse_fraction(numer: &str, denom: &str) -> Result<Value> {
    let parse_part = |part: &str| {
        NumComponent::from_str(part.trim()).map_err(|_| Error::Parse(format!("{numer}/{denom}")))
    };
    Ok(Value::Rational(Rational::new(parse_part(numer)?, parse_part(denom)?)?))
}

fn parse_decimal(int: &str, fract: &str) -> Option<Rational> {
    if fract.is_empty() || !fract.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let negative = int.starts_with('-');
    let int = NumComponent::from_str(int).ok()?;
    let fract = Num::new(NumComponent::from_str(fract).ok()?, NumComponent::from(10).pow(fract.len() as u32));
    let magnitude = num!(int.magnitude().clone(), 1) + fract;
    Some(Rational::from_num(if negative { -magnitude } else { magnitude }))
}

#[test]
fn parse_test() {
    assert_eq!(parse("3.14159"), Ok(Value::Rational(Rational::new(314159, 100000).unwrap())));
    assert_eq!(parse("-1.5"), Ok(Value::Rational(Rational::new(-3, 2).unwrap())));
    assert_eq!(parse("0.05"), Ok(Value::Rational(Rational::new(1, 20).unwrap())));
    assert_eq!(parse("-3/6"), Ok(Value::Rational(Rational::new(-1, 2).unwrap())));
    assert_eq!(parse(" 42 "), Ok(Value::from(42i64)));
    assert_eq!(parse("'abc'"), Ok(Value::from("abc")));
    assert_eq!(parse("abc"), Ok(Value::from("abc")));
    assert_eq!(parse("1/0"), Err(Error::ZeroDenominator));
    assert_eq!(parse("1/x"), Err(Error::Parse("1/x".to_owned())));
}

#[test]
fn parse_bag_test() {
    let Ok(Value::Bag(b)) = parse("[a, 'b', a,]") else {
        panic!("not a bag");
    };
    assert_eq!(b.len(), 3);
    assert_eq!(b.count("a"), 2);
    assert_eq!(b.count("b"), 1);

    let Ok(Value::Bag(empty)) = parse("[]") else {
        panic!("not a bag");
    };
    assert!(empty.is_empty());
}
