use log::debug;
use num_traits::One;

use super::rational::Rational;
use super::{Num, NumComponent};

// e ~ 1/0! + 1/1! + 1/2! + ... + 1/n!
pub fn compute_e(n: u32) -> Rational {
    let mut answer = Rational::one();
    let mut factorial = NumComponent::one();
    for i in 1..=n {
        factorial *= i;
        answer = answer + Rational::from_num(Num::new(NumComponent::one(), factorial.clone()));
    }
    debug!("compute_e: {n} terms, denominator has {} bits", answer.denom().bits());
    answer
}

// pi = 6 * arcsin(1/2), using Newton's arcsine series:
// arcsin(x) = x + sum (1*3*...*(2i-1)) / (2*4*...*2i) * x^(2i+1) / (2i+1)
pub fn compute_pi(n: u32) -> Rational {
    let x = Rational::from_num(Num::new(1.into(), 2.into()));
    let mut answer = x.clone();
    for i in 1..=n {
        let big = 2 * i + 1;
        let odds: NumComponent = (1..big).step_by(2).map(NumComponent::from).product();
        let evens: NumComponent = (2..big).step_by(2).map(NumComponent::from).product();
        let term = Rational::from_num(Num::new(odds, evens)) * x.powu(big) / NumComponent::from(big);
        answer = answer + term;
    }
    debug!("compute_pi: {n} terms, denominator has {} bits", answer.denom().bits());
    answer * 6i64
}

// digits of pi, used as the reference truncation
#[cfg(test)]
const PI: &str = "3.14159265358979323846264338327950288419716939937510";

#[cfg(test)]
fn matching_prefix(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[test]
fn e_test() {
    assert_eq!(compute_e(0), Rational::one());
    assert_eq!(compute_e(1), Rational::integer(2));
    assert_eq!(compute_e(3), Rational::new(8, 3).unwrap());
    assert_eq!(compute_e(10).decimal(5), "2.71828");
    assert_eq!(compute_e(30).decimal(20), "2.71828182845904523536");
}

#[test]
fn pi_test() {
    assert_eq!(compute_pi(0), Rational::integer(3));
    assert_eq!(compute_pi(1), Rational::new(25, 8).unwrap());
    assert_eq!(compute_pi(40).decimal(20), PI[..22]);
}

#[test]
fn pi_converges_test() {
    let mut last = 0;
    for n in [1, 5, 10, 20, 40] {
        let matched = matching_prefix(&compute_pi(n).decimal(48), PI);
        assert!(matched > last, "{n} terms matched {matched} chars, not more than {last}");
        last = matched;
    }
}
