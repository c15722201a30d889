use crate::state::{Bet, Position, Round};

/// Derived status of a bet, recomputed from round and bet snapshots.
/// Never persisted; a refresh fully recomputes it from scratch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BetOutcome {
    pub is_active: bool,          // round has not reached its close timestamp
    pub is_awaiting_result: bool, // round closed but the oracle has not set a close price
    pub has_won: Option<bool>,    // None while unresolved
    pub can_claim: bool,          // won and not yet claimed (estimate; see `claimable`)
    pub reward: Option<u64>,      // estimated reward in base units, if won and unclaimed
}

/// Classifies a bet against its round snapshot. Deterministic and
/// side-effect free; `now` is passed in rather than read from a clock so the
/// same function serves the program, off-chain indexers, and tests.
///
/// Malformed round data (zero or absent price fields) classifies as
/// unresolved rather than panicking.
pub fn classify_bet(round: &Round, bet: &Bet, now: i64) -> BetOutcome {
    let lock_price = round.lock_price.filter(|p| *p > 0);
    let close_price = round.close_price.filter(|p| *p > 0);

    let is_active = now < round.close_timestamp;
    let is_awaiting_result = !is_active && close_price.is_none();

    let has_won = match (is_active || is_awaiting_result, lock_price, close_price) {
        (false, Some(lock), Some(close)) => match bet.position {
            Position::Bull => Some(close > lock),
            Position::Bear => Some(close < lock),
        },
        _ => None,
    };

    let can_claim = has_won == Some(true) && !bet.claimed;
    let reward = if can_claim {
        estimate_reward(round, bet)
    } else {
        None
    };

    BetOutcome {
        is_active,
        is_awaiting_result,
        has_won,
        can_claim,
        reward,
    }
}

/// Pro-rata share of the reward pool: stake / winning pool * reward amount.
/// Undefined when the winning pool is empty.
fn estimate_reward(round: &Round, bet: &Bet) -> Option<u64> {
    let pool = match bet.position {
        Position::Bull => round.bull_amount,
        Position::Bear => round.bear_amount,
    };
    if pool == 0 {
        return None;
    }
    let share = (bet.amount as u128)
        .checked_mul(round.reward_amount as u128)?
        .checked_div(pool as u128)?;
    u64::try_from(share).ok()
}

/// Authoritative claim predicate, mirroring the on-chain claim path: the
/// oracle must have resolved the round, the stake must be nonzero and
/// unclaimed, and the position must match the price movement. The
/// classifier's `can_claim` is the fallback estimate when this cannot be
/// evaluated.
pub fn claimable(round: &Round, bet: &Bet) -> bool {
    if !round.oracle_called || bet.amount == 0 || bet.claimed {
        return false;
    }
    let (Some(lock), Some(close)) = (round.lock_price, round.close_price) else {
        return false;
    };
    if lock == 0 || close == 0 {
        return false;
    }
    match bet.position {
        Position::Bull => close > lock,
        Position::Bear => close < lock,
    }
}

/// Aggregate counters over a set of classified bets.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BetStats {
    pub total: u64,
    pub wins: u64,
    pub losses: u64,
    pub active: u64,
    pub claimable: u64,
    pub win_rate_bps: u16, // wins / (wins + losses), in basis points
}

pub fn summarize(outcomes: &[BetOutcome]) -> BetStats {
    let mut stats = BetStats {
        total: outcomes.len() as u64,
        ..Default::default()
    };
    for outcome in outcomes {
        match outcome.has_won {
            Some(true) => stats.wins += 1,
            Some(false) => stats.losses += 1,
            None => {}
        }
        if outcome.is_active {
            stats.active += 1;
        }
        if outcome.can_claim {
            stats.claimable += 1;
        }
    }
    let resolved = stats.wins + stats.losses;
    if resolved > 0 {
        stats.win_rate_bps = (stats.wins * 10_000 / resolved) as u16;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const ETH: u64 = 1_000_000_000; // one whole token in base units
    const CLOSE_TS: i64 = 2_000;

    fn round() -> Round {
        Round {
            epoch: 7,
            start_timestamp: 1_000,
            lock_timestamp: 1_500,
            close_timestamp: CLOSE_TS,
            lock_price: Some(100_0000_0000),
            close_price: Some(120_0000_0000),
            total_amount: 20 * ETH,
            bull_amount: 10 * ETH,
            bear_amount: 10 * ETH,
            reward_base_cal_amount: 10 * ETH,
            reward_amount: 15 * ETH,
            oracle_called: true,
            vault: Pubkey::default(),
            vault_bump: 0,
            total_bets: 2,
            created_at: 1_000,
            bump: 0,
        }
    }

    fn bet(position: Position, amount: u64) -> Bet {
        Bet {
            epoch: 7,
            round: Pubkey::default(),
            bettor: Pubkey::default(),
            position,
            amount,
            claimed: false,
            created_at: 1_100,
            bump: 0,
        }
    }

    #[test]
    fn test_active_round_is_unresolved() {
        let outcome = classify_bet(&round(), &bet(Position::Bull, ETH), CLOSE_TS - 1);
        assert!(outcome.is_active);
        assert!(!outcome.is_awaiting_result);
        assert_eq!(outcome.has_won, None);
        assert!(!outcome.can_claim);
        assert_eq!(outcome.reward, None);
    }

    #[test]
    fn test_closed_round_without_price_awaits_result() {
        let mut r = round();
        r.close_price = None;
        r.oracle_called = false;
        let outcome = classify_bet(&r, &bet(Position::Bull, ETH), CLOSE_TS);
        assert!(!outcome.is_active);
        assert!(outcome.is_awaiting_result);
        assert_eq!(outcome.has_won, None);
        assert!(!outcome.can_claim);
    }

    #[test]
    fn test_zero_close_price_treated_as_awaiting() {
        let mut r = round();
        r.close_price = Some(0);
        let outcome = classify_bet(&r, &bet(Position::Bull, ETH), CLOSE_TS);
        assert!(outcome.is_awaiting_result);
        assert_eq!(outcome.has_won, None);
    }

    #[test]
    fn test_bull_wins_when_close_above_lock() {
        let outcome = classify_bet(&round(), &bet(Position::Bull, ETH), CLOSE_TS);
        assert!(!outcome.is_active);
        assert!(!outcome.is_awaiting_result);
        assert_eq!(outcome.has_won, Some(true));
        assert!(outcome.can_claim);
    }

    #[test]
    fn test_bear_loses_when_close_above_lock() {
        let outcome = classify_bet(&round(), &bet(Position::Bear, ETH), CLOSE_TS);
        assert_eq!(outcome.has_won, Some(false));
        assert!(!outcome.can_claim);
        assert_eq!(outcome.reward, None);
    }

    #[test]
    fn test_flat_round_resolves_both_positions_as_losers() {
        let mut r = round();
        r.close_price = r.lock_price;
        assert_eq!(
            classify_bet(&r, &bet(Position::Bull, ETH), CLOSE_TS).has_won,
            Some(false)
        );
        assert_eq!(
            classify_bet(&r, &bet(Position::Bear, ETH), CLOSE_TS).has_won,
            Some(false)
        );
    }

    #[test]
    fn test_reward_is_pro_rata_share_of_reward_pool() {
        // stake 1, winning pool 10, reward pool 15 -> reward 1.5
        let outcome = classify_bet(&round(), &bet(Position::Bull, ETH), CLOSE_TS);
        assert_eq!(outcome.reward, Some(15 * ETH / 10));
    }

    #[test]
    fn test_claimed_bet_is_not_claimable_regardless_of_outcome() {
        let mut b = bet(Position::Bull, ETH);
        b.claimed = true;
        let outcome = classify_bet(&round(), &b, CLOSE_TS);
        assert_eq!(outcome.has_won, Some(true));
        assert!(!outcome.can_claim);
        assert_eq!(outcome.reward, None);
        assert!(!claimable(&round(), &b));
    }

    #[test]
    fn test_empty_winning_pool_leaves_reward_undefined() {
        let mut r = round();
        r.bull_amount = 0;
        let outcome = classify_bet(&r, &bet(Position::Bull, ETH), CLOSE_TS);
        assert_eq!(outcome.has_won, Some(true));
        assert_eq!(outcome.reward, None);
    }

    #[test]
    fn test_all_zero_round_never_panics() {
        let r = Round {
            epoch: 0,
            start_timestamp: 0,
            lock_timestamp: 0,
            close_timestamp: 0,
            lock_price: Some(0),
            close_price: Some(0),
            total_amount: 0,
            bull_amount: 0,
            bear_amount: 0,
            reward_base_cal_amount: 0,
            reward_amount: 0,
            oracle_called: false,
            vault: Pubkey::default(),
            vault_bump: 0,
            total_bets: 0,
            created_at: 0,
            bump: 0,
        };
        let outcome = classify_bet(&r, &bet(Position::Bear, 0), 1);
        assert_eq!(outcome.has_won, None);
        assert!(!outcome.can_claim);
        assert!(!claimable(&r, &bet(Position::Bear, 0)));
    }

    #[test]
    fn test_claimable_requires_oracle_called() {
        let mut r = round();
        r.oracle_called = false;
        assert!(!claimable(&r, &bet(Position::Bull, ETH)));
        r.oracle_called = true;
        assert!(claimable(&r, &bet(Position::Bull, ETH)));
        assert!(!claimable(&r, &bet(Position::Bear, ETH)));
    }

    #[test]
    fn test_summarize_counts() {
        let r = round();
        let mut awaiting = round();
        awaiting.close_price = None;
        awaiting.oracle_called = false;
        let mut claimed = bet(Position::Bull, ETH);
        claimed.claimed = true;

        let outcomes = [
            classify_bet(&r, &bet(Position::Bull, ETH), CLOSE_TS), // win, claimable
            classify_bet(&r, &claimed, CLOSE_TS),                  // win, already claimed
            classify_bet(&r, &bet(Position::Bear, ETH), CLOSE_TS), // loss
            classify_bet(&r, &bet(Position::Bull, ETH), CLOSE_TS - 1), // active
            classify_bet(&awaiting, &bet(Position::Bull, ETH), CLOSE_TS), // awaiting
        ];
        let stats = summarize(&outcomes);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.claimable, 1);
        assert_eq!(stats.win_rate_bps, 6_666);
    }

    #[test]
    fn test_summarize_empty() {
        let stats = summarize(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.win_rate_bps, 0);
    }
}
