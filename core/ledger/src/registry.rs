// chainchat-core/core/ledger/src/registry.rs

use crate::types::{ActivityCounters, LedgerError, User, UserStats};
use chainchat_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// User table keyed by address.
///
/// Lookups never fail: unknown addresses project to the all-default
/// sentinel record, mirroring storage-mapping semantics. Profile writes
/// from unregistered callers land on that sentinel without flipping
/// `is_registered`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRegistry {
    users: HashMap<Address, User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full record projection; all-default sentinel for unknown addresses
    pub fn get(&self, address: &Address) -> User {
        self.users.get(address).cloned().unwrap_or_default()
    }

    pub fn is_registered(&self, address: &Address) -> bool {
        self.users.get(address).map(|u| u.is_registered).unwrap_or(false)
    }

    /// One-time registration. Counters, allowance and claim state are
    /// reset even if the sentinel record carried earlier profile writes.
    pub fn register(
        &mut self,
        target: Address,
        username: String,
        free_post_allowance: u64,
    ) -> Result<(), LedgerError> {
        if self.is_registered(&target) {
            return Err(LedgerError::AlreadyRegistered(target));
        }
        if username.trim().is_empty() {
            return Err(LedgerError::EmptyUsername);
        }

        let user = self.users.entry(target).or_default();
        user.username = username;
        user.is_registered = true;
        user.free_posts_remaining = free_post_allowance;
        user.last_claim_timestamp = 0;
        user.since_claim = ActivityCounters::default();
        user.stats = UserStats::default();

        info!("Registered user {}", target);
        Ok(())
    }

    pub(crate) fn user_mut(&mut self, address: Address) -> &mut User {
        self.users.entry(address).or_default()
    }

    pub fn edit_profile(
        &mut self,
        address: Address,
        username: String,
        profile_image_ref: String,
        bio: String,
        cover_photo_ref: String,
        interests: Vec<String>,
    ) {
        let user = self.user_mut(address);
        user.username = username;
        user.profile_image_ref = profile_image_ref;
        user.bio = bio;
        user.cover_photo_ref = cover_photo_ref;
        user.interests = interests;
    }

    pub fn set_bio(&mut self, address: Address, bio: String) {
        self.user_mut(address).bio = bio;
    }

    pub fn set_profile_image(&mut self, address: Address, image_ref: String) {
        self.user_mut(address).profile_image_ref = image_ref;
    }

    pub fn set_cover_photo(&mut self, address: Address, cover_ref: String) {
        self.user_mut(address).cover_photo_ref = cover_ref;
    }

    pub fn set_interests(&mut self, address: Address, interests: Vec<String>) {
        self.user_mut(address).interests = interests;
    }

    pub fn set_feed_ref(&mut self, address: Address, feed_ref: String) {
        self.user_mut(address).feed_ref = feed_ref;
    }

    pub fn set_model_ref(&mut self, address: Address, model_ref: String) {
        self.user_mut(address).model_ref = model_ref;
    }

    /// Consume one free post if any remain. Returns whether one was used.
    pub fn consume_free_post(&mut self, address: Address) -> bool {
        let user = self.user_mut(address);
        if user.free_posts_remaining > 0 {
            user.free_posts_remaining -= 1;
            true
        } else {
            false
        }
    }

    pub fn record_post(&mut self, address: Address) {
        let user = self.user_mut(address);
        user.since_claim.posts = user.since_claim.posts.saturating_add(1);
        user.stats.posts = user.stats.posts.saturating_add(1);
    }

    pub fn record_comment(&mut self, address: Address) {
        let user = self.user_mut(address);
        user.since_claim.comments = user.since_claim.comments.saturating_add(1);
        user.stats.comments = user.stats.comments.saturating_add(1);
    }

    pub fn record_share(&mut self, address: Address) {
        let user = self.user_mut(address);
        user.since_claim.shares = user.since_claim.shares.saturating_add(1);
        user.stats.shares = user.stats.shares.saturating_add(1);
    }

    pub fn record_like_given(&mut self, address: Address) {
        let user = self.user_mut(address);
        user.stats.likes_given = user.stats.likes_given.saturating_add(1);
    }
}
