// chainchat-core/core/ledger/src/params.rs

use chainchat_primitives::{cct_to_wei, Address};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Economic parameters, owner-mutable at runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicParams {
    /// Cost of a post once the free allowance is exhausted (wei)
    pub post_cost: U256,

    /// Cost of a comment. Reserved: comments are currently free and only
    /// the setter touches this value (see DESIGN.md).
    pub comment_cost: U256,

    /// One-time credit on registration (wei)
    pub signup_bonus: U256,

    /// Free posts granted at registration
    pub free_post_allowance: u64,

    /// Weekly-claim reward per post (wei)
    pub reward_per_post: U256,

    /// Weekly-claim reward per comment (wei)
    pub reward_per_comment: U256,

    /// Weekly-claim reward per share (wei)
    pub reward_per_share: U256,

    /// Immediate reward credited to a post's author per like (wei)
    pub like_reward: U256,

    /// Upper bound on a single weekly payout (wei)
    pub max_weekly_payout: U256,

    /// Seconds between weekly claims
    pub claim_cooldown_secs: u64,

    /// External fungible-token contract backing the vault; recorded
    /// verbatim, never interpreted by the ledger core
    pub token_address: Address,
}

impl Default for EconomicParams {
    fn default() -> Self {
        Self {
            post_cost: cct_to_wei(10),
            comment_cost: cct_to_wei(5),
            signup_bonus: cct_to_wei(100),
            free_post_allowance: 10,
            reward_per_post: cct_to_wei(2),
            reward_per_comment: cct_to_wei(1),
            reward_per_share: cct_to_wei(1),
            like_reward: cct_to_wei(1),
            max_weekly_payout: cct_to_wei(200),
            claim_cooldown_secs: 7 * 86_400, // once per 7 days
            token_address: Address::zero(),
        }
    }
}

/// Genesis account allocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisAccount {
    pub address: Address,
    pub balance: U256,
}

/// Ledger construction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Owner address for admin operations and withdrawal
    pub owner: Address,

    pub params: EconomicParams,

    /// Reward reserve funded at genesis; signup bonuses, like rewards and
    /// weekly payouts draw from it
    pub initial_reserve: U256,

    /// Pre-funded user accounts
    pub genesis_accounts: Vec<GenesisAccount>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            owner: Address::zero(),
            params: EconomicParams::default(),
            // 10,000 CCT rewards pool, matching the reference deployment
            initial_reserve: cct_to_wei(10_000),
            genesis_accounts: Vec::new(),
        }
    }
}
