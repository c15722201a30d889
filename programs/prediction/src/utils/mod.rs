pub mod outcome;
pub mod price;

pub use outcome::*;
pub use price::*;
