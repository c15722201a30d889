use crate::state::Position;
use anchor_lang::prelude::*;

#[event]
pub struct BetPlaced {
    pub bettor: Pubkey,
    pub epoch: u64,
    pub position: Position,
    pub amount: u64,
}

#[event]
pub struct RewardClaimed {
    pub bettor: Pubkey,
    pub epoch: u64,
    pub amount: u64,
}
