pub mod bag;
pub mod config;
pub mod error;
pub mod math;

pub use bag::Bag;
pub use error::{Error, Result};
pub use math::rational::{Part, Rational};
pub use math::series::{compute_e, compute_pi};
