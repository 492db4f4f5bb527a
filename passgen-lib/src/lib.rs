pub mod alphabet;
pub mod generator;
pub mod options;
pub mod validation;

pub use zeroize;
