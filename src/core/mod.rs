pub mod constants;
pub mod field;
pub mod particle;

pub use constants::*;
pub use field::*;
pub use particle::*;
