// chainchat-core/core/ledger/src/types.rs

use chainchat_primitives::Address;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Post identifier. Ids are assigned monotonically and double as the index
/// into the append-only post array.
pub type PostId = u64;

/// Activity accumulated since the user's last weekly claim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounters {
    pub posts: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Lifetime activity stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub posts: u64,
    pub comments: u64,
    pub shares: u64,
    pub likes_given: u64,
}

/// User record.
///
/// `Default` doubles as the "not registered" sentinel: lookups for unknown
/// addresses return an all-default record instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub bio: String,
    pub profile_image_ref: String,
    pub cover_photo_ref: String,
    pub interests: Vec<String>,

    /// Opaque pointer to the off-chain curated feed, never interpreted
    pub feed_ref: String,
    /// Opaque pointer to the off-chain personalization model
    pub model_ref: String,

    pub is_registered: bool,
    pub free_posts_remaining: u64,
    /// 0 = never claimed
    pub last_claim_timestamp: u64,
    pub since_claim: ActivityCounters,
    pub stats: UserStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author: Address,
    /// Opaque content-store identifier, stored verbatim
    pub content_ref: String,
    /// Opaque image identifier, may be empty
    pub image_ref: String,
    pub timestamp: u64,
    pub like_count: u64,
    pub comment_count: u64,
    /// `None` for an original post; `Some(id)` when this post shares `id`
    pub original_post_id: Option<PostId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub commenter: Address,
    pub content: String,
    pub timestamp: u64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("User already registered: {0}")]
    AlreadyRegistered(Address),

    #[error("Username required")]
    EmptyUsername,

    #[error("Content reference required")]
    ContentRequired,

    #[error("Invalid post id: {0}")]
    InvalidPost(PostId),

    #[error("Invalid comment index {index} for post {post_id}")]
    InvalidComment { post_id: PostId, index: u64 },

    #[error("Post {post_id} already liked by {liker}")]
    AlreadyLiked { post_id: PostId, liker: Address },

    #[error("Claim cooldown active: {remaining_secs}s remaining")]
    CooldownActive { remaining_secs: u64 },

    #[error("Unauthorized caller: {0}")]
    Unauthorized(Address),

    #[error("Insufficient balance: need {need}, have {have}")]
    InsufficientBalance { need: U256, have: U256 },

    #[error("Arithmetic overflow")]
    Overflow,
}
