pub mod equation;
pub mod operand;
pub mod operation;
pub mod parsefmt;
pub mod rational;
pub mod series;
pub mod value;

pub type Num = num_rational::BigRational;
pub type NumComponent = num_bigint::BigInt;
