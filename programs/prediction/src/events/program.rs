use anchor_lang::prelude::*;

#[event]
pub struct ProgramPaused {
    pub admin: Pubkey,
    pub config: Pubkey,
}

#[event]
pub struct ProgramUnpaused {
    pub admin: Pubkey,
    pub config: Pubkey,
}
