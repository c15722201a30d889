#![allow(ambiguous_glob_reexports)]

pub mod claim;
pub mod end_round;
pub mod initialize;
pub mod lock_round;
pub mod pause_program;
pub mod place_bet;
pub mod start_round;
pub mod unpause_program;
pub mod update_config;

pub use claim::*;
pub use end_round::*;
pub use initialize::*;
pub use lock_round::*;
pub use pause_program::*;
pub use place_bet::*;
pub use start_round::*;
pub use unpause_program::*;
pub use update_config::*;
