// chainchat-core/core/ledger/src/rewards.rs

use crate::params::EconomicParams;
use crate::types::{ActivityCounters, LedgerError};
use primitive_types::U256;

/// Outcome of a weekly engagement claim. Counter fields carry the
/// pre-reset values the payout was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub posts: u64,
    pub comments: u64,
    pub shares: u64,
    pub payout: U256,
}

/// Seconds until a claim is allowed again; 0 means the claim may proceed.
///
/// `last_claim == 0` is the never-claimed sentinel, so the first claim is
/// always allowed.
pub fn cooldown_remaining(last_claim: u64, cooldown_secs: u64, now: u64) -> u64 {
    if last_claim == 0 {
        return 0;
    }
    last_claim
        .saturating_add(cooldown_secs)
        .saturating_sub(now)
}

/// Weekly payout: `min(posts * reward_per_post + comments *
/// reward_per_comment + shares * reward_per_share, max_weekly_payout)`
pub fn compute_payout(
    counters: &ActivityCounters,
    params: &EconomicParams,
) -> Result<U256, LedgerError> {
    let post_reward = U256::from(counters.posts)
        .checked_mul(params.reward_per_post)
        .ok_or(LedgerError::Overflow)?;
    let comment_reward = U256::from(counters.comments)
        .checked_mul(params.reward_per_comment)
        .ok_or(LedgerError::Overflow)?;
    let share_reward = U256::from(counters.shares)
        .checked_mul(params.reward_per_share)
        .ok_or(LedgerError::Overflow)?;

    let raw = post_reward
        .checked_add(comment_reward)
        .and_then(|sum| sum.checked_add(share_reward))
        .ok_or(LedgerError::Overflow)?;

    Ok(raw.min(params.max_weekly_payout))
}
