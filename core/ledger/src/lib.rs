// chainchat-core/core/ledger/src/lib.rs

pub mod clock;
pub mod content;
pub mod events;
pub mod ledger;
pub mod params;
pub mod registry;
pub mod rewards;
pub mod types;
pub mod vault;

pub use clock::{Clock, ManualClock, SystemClock};
pub use content::ContentLedger;
pub use events::LedgerEvent;
pub use ledger::{SharedLedger, SocialLedger};
pub use params::{EconomicParams, GenesisAccount, LedgerConfig};
pub use registry::UserRegistry;
pub use rewards::{compute_payout, cooldown_remaining, ClaimOutcome};
pub use types::{
    ActivityCounters, Comment, LedgerError, Post, PostId, User, UserStats,
};
pub use vault::TokenVault;

pub use chainchat_primitives::{
    cct_to_wei, wei_to_cct, Address, DECIMALS, TOKEN_NAME, TOKEN_SYMBOL,
};
