use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Signed, ToPrimitive, Zero};

use super::operand::Operand;
use super::operation::{Operation, Relation};
use super::{Num, NumComponent};
use crate::error::{Error, Result};

/// An exact fraction, always in lowest terms with a positive denominator.
///
/// Zero is stored as `0/1`. There are no setters: a value is built once and
/// every operation returns a fresh one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational(Num);

/// One of the two stored components, as selected by indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Numerator,
    Denominator,
}

impl Part {
    pub fn from_index(index: i64) -> Result<Self> {
        match index {
            0 => Ok(Part::Numerator),
            1 => Ok(Part::Denominator),
            _ => Err(Error::InvalidIndex(index.to_string())),
        }
    }
}

impl FromStr for Part {
    type Err = Error;

    // any non-empty prefix of either word, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let key = s.to_lowercase();
        if key.is_empty() {
            Err(Error::InvalidIndex(s.to_owned()))
        } else if "numerator".starts_with(&key) {
            Ok(Part::Numerator)
        } else if "denominator".starts_with(&key) {
            Ok(Part::Denominator)
        } else {
            Err(Error::InvalidIndex(s.to_owned()))
        }
    }
}

impl Rational {
    pub fn new(numer: impl Into<NumComponent>, denom: impl Into<NumComponent>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self(Num::new(numer.into(), denom)))
    }

    pub fn integer(n: impl Into<NumComponent>) -> Self {
        Self(Num::from_integer(n.into()))
    }

    pub(crate) fn from_num(n: Num) -> Self {
        Self(n)
    }

    pub fn numer(&self) -> &NumComponent {
        self.0.numer()
    }

    pub fn denom(&self) -> &NumComponent {
        self.0.denom()
    }

    pub fn get(&self, part: Part) -> &NumComponent {
        match part {
            Part::Numerator => self.numer(),
            Part::Denominator => self.denom(),
        }
    }

    pub fn pos(&self) -> Self {
        self.clone()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    pub fn recip(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    pub fn checked_div(&self, rhs: &Rational) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Raises to an integer power. `x ** 0` is `1` for every `x`, zero included;
    /// a negative exponent inverts first.
    pub fn pow(&self, exp: i32) -> Result<Self> {
        match exp.cmp(&0) {
            Ordering::Equal => Ok(Self::one()),
            Ordering::Greater => Ok(self.powu(exp.unsigned_abs())),
            Ordering::Less => Ok(self.recip()?.powu(exp.unsigned_abs())),
        }
    }

    pub(crate) fn powu(&self, exp: u32) -> Self {
        let exp = exp as usize;
        Self(Num::new(
            num_traits::pow(self.numer().clone(), exp),
            num_traits::pow(self.denom().clone(), exp),
        ))
    }

    /// Applies `self <operation> rhs`.
    pub fn apply(&self, operation: Operation, rhs: &Operand) -> Result<Self> {
        match operation {
            Operation::Add => Ok(self + &rhs.to_rational()),
            Operation::Sub => Ok(self - &rhs.to_rational()),
            Operation::Mul => Ok(self * &rhs.to_rational()),
            Operation::Div => self.checked_div(&rhs.to_rational()),
            Operation::Pow => match rhs {
                Operand::Int(n) => {
                    let exp = n.to_i32().ok_or_else(|| Error::PowerOutOfRange(n.to_string()))?;
                    self.pow(exp)
                }
                Operand::Rational(r) => Err(Error::NonIntegerPower(r.to_string())),
            },
        }
    }

    /// Applies `lhs <operation> self`, for when the rational sits on the right.
    pub fn apply_reflected(&self, operation: Operation, lhs: &Operand) -> Result<Self> {
        match (operation, lhs) {
            (Operation::Pow, Operand::Int(_)) => Err(Error::UnsupportedOperand {
                op: operation.char(),
                left: lhs.type_name(),
                right: "Rational",
            }),
            _ => lhs.to_rational().apply(operation, &Operand::Rational(self.clone())),
        }
    }

    /// Equality is exact; the orderings compare the `f64` values of both sides,
    /// so fractions closer together than `f64` can resolve compare as equal.
    pub fn compare(&self, relation: Relation, rhs: &Operand) -> bool {
        let rhs = rhs.to_rational();
        match relation {
            Relation::Eq => *self == rhs,
            Relation::Ne => *self != rhs,
            Relation::Lt => self.to_f64() < rhs.to_f64(),
            Relation::Le => self.to_f64() <= rhs.to_f64(),
            Relation::Gt => self.to_f64() > rhs.to_f64(),
            Relation::Ge => self.to_f64() >= rhs.to_f64(),
        }
    }

    /// Decimal expansion cut off (not rounded) after `digits` fractional places.
    ///
    /// The integer part is the floor of the fraction, so `-7/2` renders as `-4`
    /// with no digits and `-4.50` with two.
    pub fn decimal(&self, digits: usize) -> String {
        let integer_part = self.0.floor().to_integer();
        if digits == 0 {
            return format!("{integer_part}");
        }
        let denom = self.denom();
        let ten = NumComponent::from(10);
        let mut dividend = (self.numer() - &integer_part * denom) * &ten;
        let mut out = format!("{integer_part}.");
        for _ in 0..digits {
            out += format!("{}", &dividend / denom).as_str();
            dividend = (&dividend % denom) * &ten;
        }
        out
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(Num::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(Num::one())
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl From<NumComponent> for Rational {
    fn from(n: NumComponent) -> Self {
        Self::integer(n)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({},{})", self.numer(), self.denom())
    }
}

impl Index<Part> for Rational {
    type Output = NumComponent;

    fn index(&self, part: Part) -> &NumComponent {
        self.get(part)
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.0.is_integer() && *self.numer() == NumComponent::from(*other)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

// `Div` panics on a zero divisor like the underlying ratio type;
// `checked_div` is the fallible form.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }

        impl<'a, 'b> $trait<&'b Rational> for &'a Rational {
            type Output = Rational;

            fn $method(self, rhs: &'b Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }

        impl $trait<NumComponent> for Rational {
            type Output = Rational;

            fn $method(self, rhs: NumComponent) -> Rational {
                Rational(self.0.$method(Num::from_integer(rhs)))
            }
        }

        impl $trait<Rational> for NumComponent {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational(Num::from_integer(self).$method(rhs.0))
            }
        }

        impl $trait<i64> for Rational {
            type Output = Rational;

            fn $method(self, rhs: i64) -> Rational {
                self.$method(NumComponent::from(rhs))
            }
        }

        impl $trait<Rational> for i64 {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                NumComponent::from(self).$method(rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

#[cfg(test)]
macro_rules! rat {
    ($numer:expr, $denom:expr) => {
        Rational::new($numer, $denom).unwrap()
    };
}

#[test]
fn reduce_test() {
    let r = rat!(2, 4);
    assert_eq!((r.numer().clone(), r.denom().clone()), (1.into(), 2.into()));
    assert_eq!(rat!(2, 4), rat!(1, 2));

    let r = rat!(6, -9);
    assert_eq!(format!("{r:?}"), "Rational(-2,3)");

    let r = rat!(-6, -9);
    assert_eq!(format!("{r:?}"), "Rational(2,3)");

    assert_eq!(format!("{:?}", rat!(0, 5)), "Rational(0,1)");
    assert_eq!(format!("{:?}", rat!(0, -5)), "Rational(0,1)");
    assert_eq!(rat!(0, 5), rat!(0, 1));
    assert_eq!(Rational::default(), rat!(0, 1));

    assert_eq!(Rational::new(3, 0), Err(Error::ZeroDenominator));
}

#[test]
fn reduce_invariant_test() {
    for n in -30i64..=30 {
        for d in (-12i64..=12).filter(|d| *d != 0) {
            let r = rat!(n, d);
            assert!(r.denom().is_positive());
            let mut a = r.numer().abs();
            let mut b = r.denom().clone();
            while !b.is_zero() {
                let t = &a % &b;
                a = b;
                b = t;
            }
            assert_eq!(a, NumComponent::one());
        }
    }
}

#[test]
fn arithmetic_test() {
    assert_eq!(rat!(1, 3) + rat!(1, 6), rat!(1, 2));
    assert_eq!(rat!(1, 3) - rat!(1, 2), rat!(-1, 6));
    assert_eq!(rat!(2, 3) * rat!(3, 4), rat!(1, 2));
    assert_eq!(rat!(2, 3) / rat!(4, 3), rat!(1, 2));

    assert_eq!(rat!(1, 2) + 1i64, rat!(3, 2));
    assert_eq!(1i64 + rat!(1, 2), rat!(3, 2));
    assert_eq!(1i64 - rat!(1, 4), rat!(3, 4));
    assert_eq!(rat!(1, 4) - 1i64, rat!(-3, 4));
    assert_eq!(3i64 * rat!(1, 6), rat!(1, 2));
    assert_eq!(2i64 / rat!(4, 3), rat!(3, 2));
    assert_eq!(rat!(4, 3) / 2i64, rat!(2, 3));

    assert_eq!(&rat!(1, 2) + &rat!(1, 2), 1i64);
    assert_eq!(-rat!(1, 2), rat!(-1, 2));
    assert_eq!(rat!(-1, 2).abs(), rat!(1, 2));
    assert_eq!(rat!(-1, 2).pos(), rat!(-1, 2));
}

#[test]
fn division_by_zero_test() {
    assert_eq!(rat!(1, 2).checked_div(&Rational::zero()), Err(Error::DivisionByZero));
    assert_eq!(
        rat!(1, 2).apply(Operation::Div, &Operand::Int(0.into())),
        Err(Error::DivisionByZero)
    );
    assert_eq!(Rational::zero().recip(), Err(Error::DivisionByZero));
}

#[test]
#[should_panic]
fn division_operator_by_zero_test() {
    let _ = rat!(1, 2) / Rational::zero();
}

#[test]
fn pow_test() {
    assert_eq!(rat!(2, 1).pow(-2), Ok(rat!(1, 4)));
    assert_eq!(rat!(2, 3).pow(3), Ok(rat!(8, 27)));
    assert_eq!(rat!(-2, 3).pow(-3), Ok(rat!(-27, 8)));
    // zero to the zero is one here, not undefined
    assert_eq!(Rational::zero().pow(0), Ok(rat!(1, 1)));
    assert_eq!(rat!(7, 9).pow(0), Ok(Rational::one()));
    assert_eq!(Rational::zero().pow(-1), Err(Error::DivisionByZero));
    let huge = NumComponent::from(i64::MAX);
    assert_eq!(
        Rational::one().apply(Operation::Pow, &Operand::Int(huge.clone())),
        Err(Error::PowerOutOfRange(huge.to_string()))
    );

    assert_eq!(
        rat!(1, 2).apply(Operation::Pow, &Operand::Rational(rat!(1, 2))),
        Err(Error::NonIntegerPower("1/2".to_owned()))
    );
}

#[test]
fn compare_test() {
    let half = rat!(1, 2);
    assert!(half.compare(Relation::Lt, &Operand::Rational(rat!(2, 3))));
    assert!(half.compare(Relation::Le, &Operand::Rational(rat!(1, 2))));
    assert!(half.compare(Relation::Gt, &Operand::Int(0.into())));
    assert!(!half.compare(Relation::Ge, &Operand::Int(1.into())));
    assert!(half.compare(Relation::Eq, &Operand::Rational(rat!(2, 4))));
    assert!(half.compare(Relation::Ne, &Operand::Int(1.into())));
    assert!(rat!(4, 2) == 2i64);

    assert!(rat!(1, 3).compare(Relation::Lt, &Operand::Rational(rat!(1, 2))));
    assert!(rat!(1, 2).compare(Relation::Ge, &Operand::Rational(rat!(2, 4))));
}

#[test]
fn float_ordering_precision_test() {
    // these differ by about 1e-36, below what f64 can resolve
    let a = rat!(10i64.pow(18), 10i64.pow(18) + 1);
    let b = rat!(10i64.pow(18) + 1, 10i64.pow(18) + 2);
    assert!(a != b);
    assert!(!a.compare(Relation::Lt, &Operand::Rational(b.clone())));
    assert!(a.compare(Relation::Le, &Operand::Rational(b.clone())));
    assert!(a.compare(Relation::Ge, &Operand::Rational(b.clone())));
    assert!(!a.compare(Relation::Eq, &Operand::Rational(b.clone())));
}

#[test]
fn decimal_test() {
    assert_eq!(rat!(1, 3).decimal(5), "0.33333");
    assert_eq!(rat!(2, 3).decimal(4), "0.6666");
    assert_eq!(rat!(1, 8).decimal(5), "0.12500");
    assert_eq!(rat!(1, 101).decimal(6), "0.009900");
    assert_eq!(rat!(22, 7).decimal(0), "3");
    assert_eq!(rat!(-7, 2).decimal(0), "-4");
    assert_eq!(rat!(-7, 2).decimal(2), "-4.50");
    assert_eq!(rat!(5, 1).decimal(3), "5.000");
}

#[test]
fn index_test() {
    let r = rat!(-3, 4);
    assert_eq!(r[Part::Numerator], NumComponent::from(-3));
    assert_eq!(r.get(Part::from_index(1).unwrap()), &NumComponent::from(4));
    assert_eq!(Part::from_index(2), Err(Error::InvalidIndex("2".to_owned())));

    for key in ["n", "NUM", "Numerator", "numer"] {
        assert_eq!(key.parse::<Part>(), Ok(Part::Numerator));
    }
    for key in ["d", "Denom", "DENOMINATOR"] {
        assert_eq!(key.parse::<Part>(), Ok(Part::Denominator));
    }
    for key in ["", "x", "numerators", "merat"] {
        assert!(key.parse::<Part>().is_err());
    }
}

#[test]
fn render_test() {
    let r = rat!(-8, 29);
    assert_eq!(r.to_string(), "-8/29");
    assert_eq!(format!("{r:?}"), "Rational(-8,29)");
    assert!((rat!(1, 4).to_f64() - 0.25).abs() < f64::EPSILON);
}
