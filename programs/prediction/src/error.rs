use anchor_lang::prelude::*;

#[error_code]
pub enum PredictionError {
    // General Program Errors (0x1000 - 0x1999)
    #[msg("Unauthorized action for this account")]
    Unauthorized = 0x1000,

    #[msg("Program is currently paused")]
    ProgramPaused = 0x1001,

    #[msg("Program is already paused")]
    AlreadyPaused = 0x1002,

    #[msg("Program is already active")]
    AlreadyActive = 0x1003,

    #[msg("Arithmetic overflow")]
    Overflow = 0x1004,

    #[msg("Arithmetic underflow")]
    Underflow = 0x1005,

    // Configuration Errors (0x2000 - 0x2999)
    #[msg("Treasury fee basis points exceed the allowed maximum")]
    InvalidTreasuryFee = 0x2000,

    #[msg("Minimum bet amount must be greater than 0")]
    InvalidMinBetAmount = 0x2001,

    #[msg("Operator authorities list is empty or too long")]
    InvalidOperatorAuthorities = 0x2002,

    #[msg("Operator is not authorized")]
    UnauthorizedOperator = 0x2003,

    #[msg("Buffer seconds must be shorter than interval seconds")]
    InvalidRoundTiming = 0x2004,

    // Round Lifecycle Errors (0x3000 - 0x3999)
    #[msg("Round has not reached its lock timestamp yet")]
    RoundNotLockable = 0x3000,

    #[msg("Round can only be locked within the buffer window")]
    LockWindowExpired = 0x3001,

    #[msg("Round lock price has already been set")]
    RoundAlreadyLocked = 0x3002,

    #[msg("Round must be locked before it can be ended")]
    RoundNotLocked = 0x3003,

    #[msg("Round has not reached its close timestamp yet")]
    RoundNotEnded = 0x3004,

    #[msg("Round can only be ended within the buffer window")]
    EndWindowExpired = 0x3005,

    #[msg("Round close price has already been set")]
    RoundAlreadyEnded = 0x3006,

    #[msg("Oracle price must be greater than 0")]
    InvalidOraclePrice = 0x3007,

    #[msg("Error retrieving price from the Pyth oracle")]
    PythError = 0x3008,

    // Betting Errors (0x4000 - 0x4999)
    #[msg("Betting is only open between round start and lock")]
    BettingClosed = 0x4000,

    #[msg("Bet amount is below minimum required")]
    BetBelowMinimum = 0x4001,

    // Settlement & Claim Errors (0x5000 - 0x5999)
    #[msg("Bet is not claimable for this round")]
    NotClaimable = 0x5000,

    #[msg("Reward has already been claimed")]
    AlreadyClaimed = 0x5001,

    #[msg("Round has not been resolved by the oracle yet")]
    RoundNotResolved = 0x5002,

    #[msg("Invalid number of remaining accounts for this claim batch")]
    InvalidClaimAccountsLength = 0x5003,

    #[msg("Invalid round account in claim batch")]
    InvalidRoundAccount = 0x5004,

    #[msg("Invalid bet account in claim batch")]
    InvalidBetAccount = 0x5005,

    #[msg("Invalid vault account in claim batch")]
    InvalidVaultAccount = 0x5006,

    #[msg("Failed to deserialize account data in claim batch")]
    InvalidAccountData = 0x5007,

    #[msg("Failed to serialize account data in claim batch")]
    SerializeError = 0x5008,

    #[msg("Account data buffer is too small")]
    AccountDataTooSmall = 0x5009,

    // Account & Token Errors (0x6000 - 0x6999)
    #[msg("Token mint does not match program configuration")]
    InvalidMint = 0x6000,
}
