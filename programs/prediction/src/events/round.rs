use anchor_lang::prelude::*;

#[event]
pub struct RoundStarted {
    pub epoch: u64,
    pub start_timestamp: i64,
    pub lock_timestamp: i64,
    pub close_timestamp: i64,
}

#[event]
pub struct RoundLocked {
    pub epoch: u64,
    pub price: u64,
}

#[event]
pub struct RoundEnded {
    pub epoch: u64,
    pub price: u64,
    pub reward_base_cal_amount: u64,
    pub reward_amount: u64,
    pub treasury_amount: u64,
}
