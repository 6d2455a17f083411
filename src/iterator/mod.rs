pub mod generator;
pub mod permute;

pub use generator::{Evaluated, expressions};
pub use permute::permutations;
