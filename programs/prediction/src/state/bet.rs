use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Bet {
    // --- Identity ---
    pub epoch: u64,     // The epoch of the round this bet belongs to.
    pub round: Pubkey,  // The round this bet is associated with.
    pub bettor: Pubkey, // The address of the player placing the bet.

    // --- Bet Info ---
    pub position: Position, // The directional position taken (Bull or Bear).
    pub amount: u64,        // The amount staked.
    pub claimed: bool,      // Whether the reward has been claimed. Flips exactly once.

    // --- Metadata ---
    pub created_at: i64, // The timestamp when the bet was placed.
    pub bump: u8,        // A bump seed for PDA.
}

/// The two mutually exclusive directional positions a bettor can take.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Position {
    Bull,
    Bear,
}
