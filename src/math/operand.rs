use super::rational::Rational;
use super::NumComponent;

/// Everything a rational accepts on the other side of an operator.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Rational(Rational),
    Int(NumComponent),
}

impl Operand {
    pub fn to_rational(&self) -> Rational {
        match self {
            Operand::Rational(r) => r.clone(),
            Operand::Int(n) => Rational::integer(n.clone()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Rational(_) => "Rational",
            Operand::Int(_) => "int",
        }
    }
}

impl From<Rational> for Operand {
    fn from(r: Rational) -> Self {
        Operand::Rational(r)
    }
}

impl From<NumComponent> for Operand {
    fn from(n: NumComponent) -> Self {
        Operand::Int(n)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(NumComponent::from(n))
    }
}

#[test]
fn lift_test() {
    let op = Operand::from(3i64);
    assert_eq!(op.type_name(), "int");
    assert_eq!(op.to_rational(), Rational::integer(3));

    let half = Rational::new(1, 2).unwrap();
    assert_eq!(Operand::from(half.clone()).to_rational(), half);
}
