pub mod bet;
pub mod program;
pub mod round;

pub use bet::*;
pub use program::*;
pub use round::*;
