// chainchat-core/core/ledger/src/ledger.rs

use crate::clock::{Clock, SystemClock};
use crate::content::ContentLedger;
use crate::events::LedgerEvent;
use crate::params::{EconomicParams, LedgerConfig};
use crate::registry::UserRegistry;
use crate::rewards::{self, ClaimOutcome};
use crate::types::{ActivityCounters, Comment, LedgerError, Post, PostId, User, UserStats};
use crate::vault::TokenVault;
use chainchat_primitives::Address;
use parking_lot::RwLock;
use primitive_types::U256;
use std::sync::Arc;
use tracing::{debug, info};

/// The authoritative social-content ledger.
///
/// Every public operation is a single `&mut self` call: all preconditions
/// (including the vault precondition for the operation's one transfer) are
/// checked before the first mutation, internal state is finalized before
/// the vault transfer is applied, and one event is appended per successful
/// mutating call. Mutating operations take the caller address explicitly,
/// the way a relay forwards the signer of a meta-transaction.
pub struct SocialLedger {
    owner: Address,
    params: EconomicParams,
    vault: TokenVault,
    registry: UserRegistry,
    content: ContentLedger,
    clock: Arc<dyn Clock>,
    events: Vec<LedgerEvent>,
}

/// Ledger behind a single lock: each operation is one critical section
pub type SharedLedger = Arc<RwLock<SocialLedger>>;

impl SocialLedger {
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn Clock>) -> Result<Self, LedgerError> {
        let mut vault = TokenVault::new();
        vault.fund_reserve(config.initial_reserve)?;
        for account in &config.genesis_accounts {
            vault.mint(account.address, account.balance)?;
        }

        info!(
            "Ledger initialized: owner {}, reserve {}",
            config.owner, config.initial_reserve
        );
        Ok(Self {
            owner: config.owner,
            params: config.params,
            vault,
            registry: UserRegistry::new(),
            content: ContentLedger::new(),
            clock,
            events: Vec::new(),
        })
    }

    pub fn shared(config: LedgerConfig) -> Result<SharedLedger, LedgerError> {
        Ok(Arc::new(RwLock::new(Self::new(config)?)))
    }

    fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// Drain accumulated notifications
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), LedgerError> {
        if caller != self.owner {
            return Err(LedgerError::Unauthorized(caller));
        }
        Ok(())
    }

    // ---- Registration and profile ----

    /// Register `target` once, credit the signup bonus and grant the free
    /// post allowance. `caller` may differ from `target` when a relay
    /// registers on a user's behalf.
    pub fn register_user(
        &mut self,
        caller: Address,
        target: Address,
        username: &str,
    ) -> Result<(), LedgerError> {
        // Checks
        if self.registry.is_registered(&target) {
            return Err(LedgerError::AlreadyRegistered(target));
        }
        if username.trim().is_empty() {
            return Err(LedgerError::EmptyUsername);
        }
        let bonus = self.params.signup_bonus;
        if self.vault.reserve() < bonus {
            return Err(LedgerError::InsufficientBalance {
                need: bonus,
                have: self.vault.reserve(),
            });
        }

        // Effects
        self.registry
            .register(target, username.to_string(), self.params.free_post_allowance)?;

        // Interactions: bonus transfer last
        self.vault.credit(target, bonus)?;

        info!("User {} registered by {}", target, caller);
        self.emit(LedgerEvent::UserRegistered {
            address: target,
            username: username.to_string(),
        });
        Ok(())
    }

    pub fn edit_profile(
        &mut self,
        caller: Address,
        username: &str,
        profile_image_ref: &str,
        bio: &str,
        cover_photo_ref: &str,
        interests: Vec<String>,
    ) -> Result<(), LedgerError> {
        self.registry.edit_profile(
            caller,
            username.to_string(),
            profile_image_ref.to_string(),
            bio.to_string(),
            cover_photo_ref.to_string(),
            interests,
        );
        self.emit(LedgerEvent::ProfileEdited {
            address: caller,
            username: username.to_string(),
        });
        Ok(())
    }

    pub fn set_bio(&mut self, caller: Address, bio: &str) -> Result<(), LedgerError> {
        self.registry.set_bio(caller, bio.to_string());
        self.emit(LedgerEvent::BioUpdated {
            address: caller,
            bio: bio.to_string(),
        });
        Ok(())
    }

    pub fn set_profile_image(&mut self, caller: Address, image_ref: &str) -> Result<(), LedgerError> {
        self.registry.set_profile_image(caller, image_ref.to_string());
        self.emit(LedgerEvent::ProfileImageUpdated {
            address: caller,
            image_ref: image_ref.to_string(),
        });
        Ok(())
    }

    pub fn set_cover_photo(&mut self, caller: Address, cover_ref: &str) -> Result<(), LedgerError> {
        self.registry.set_cover_photo(caller, cover_ref.to_string());
        self.emit(LedgerEvent::CoverImageUpdated {
            address: caller,
            cover_ref: cover_ref.to_string(),
        });
        Ok(())
    }

    pub fn set_user_interests(
        &mut self,
        caller: Address,
        interests: Vec<String>,
    ) -> Result<(), LedgerError> {
        self.registry.set_interests(caller, interests);
        self.emit(LedgerEvent::InterestsUpdated { address: caller });
        Ok(())
    }

    /// Record the off-chain curator's feed pointer; the ref is opaque
    pub fn update_user_feed(&mut self, caller: Address, feed_ref: &str) -> Result<(), LedgerError> {
        self.registry.set_feed_ref(caller, feed_ref.to_string());
        self.emit(LedgerEvent::UserFeedUpdated {
            address: caller,
            feed_ref: feed_ref.to_string(),
        });
        Ok(())
    }

    pub fn update_user_model(
        &mut self,
        caller: Address,
        model_ref: &str,
    ) -> Result<(), LedgerError> {
        self.registry.set_model_ref(caller, model_ref.to_string());
        self.emit(LedgerEvent::UserModelUpdated {
            address: caller,
            model_ref: model_ref.to_string(),
        });
        Ok(())
    }

    // ---- Content ----

    /// Create a post, consuming a free-allowance slot if one remains and
    /// debiting `post_cost` otherwise
    pub fn create_post(
        &mut self,
        caller: Address,
        content_ref: &str,
        image_ref: &str,
    ) -> Result<PostId, LedgerError> {
        // Checks
        if content_ref.trim().is_empty() {
            return Err(LedgerError::ContentRequired);
        }
        let use_free = self.registry.get(&caller).free_posts_remaining > 0;
        if !use_free {
            let have = self.vault.balance_of(&caller);
            if have < self.params.post_cost {
                return Err(LedgerError::InsufficientBalance {
                    need: self.params.post_cost,
                    have,
                });
            }
        }

        // Effects
        let now = self.clock.now();
        let id = self
            .content
            .append_post(caller, content_ref.to_string(), image_ref.to_string(), now)?;
        if use_free {
            self.registry.consume_free_post(caller);
        }
        self.registry.record_post(caller);

        // Interactions
        if !use_free {
            self.vault.debit(caller, self.params.post_cost)?;
        }

        debug!("Post {} created by {} (free: {})", id, caller, use_free);
        self.emit(LedgerEvent::PostCreated {
            author: caller,
            content_ref: content_ref.to_string(),
            image_ref: image_ref.to_string(),
            id,
        });
        Ok(id)
    }

    /// Like a post once, crediting the immediate like reward to its author
    pub fn like_post(&mut self, caller: Address, post_id: PostId) -> Result<(), LedgerError> {
        // Checks
        let author = self.content.post(post_id)?.author;
        if self.content.has_liked(post_id, &caller) {
            return Err(LedgerError::AlreadyLiked {
                post_id,
                liker: caller,
            });
        }
        let reward = self.params.like_reward;
        if self.vault.reserve() < reward {
            return Err(LedgerError::InsufficientBalance {
                need: reward,
                have: self.vault.reserve(),
            });
        }

        // Effects
        self.content.like(post_id, caller)?;
        self.registry.record_like_given(caller);

        // Interactions: the immediate reward pathway, distinct from the
        // weekly batched claim
        self.vault.credit(author, reward)?;

        self.emit(LedgerEvent::PostLiked {
            liker: caller,
            post_id,
        });
        Ok(())
    }

    /// Append a comment. Comments carry no token charge; `comment_cost`
    /// is a reserved parameter (see DESIGN.md).
    pub fn add_comment(
        &mut self,
        caller: Address,
        post_id: PostId,
        content: &str,
    ) -> Result<u64, LedgerError> {
        let now = self.clock.now();
        let index = self
            .content
            .append_comment(post_id, caller, content.to_string(), now)?;
        self.registry.record_comment(caller);

        self.emit(LedgerEvent::CommentAdded {
            commenter: caller,
            post_id,
            content: content.to_string(),
            index,
        });
        Ok(index)
    }

    /// Re-post `post_id` under the caller's authorship
    pub fn share_post(&mut self, caller: Address, post_id: PostId) -> Result<PostId, LedgerError> {
        let now = self.clock.now();
        let new_id = self.content.share(post_id, caller, now)?;
        self.registry.record_share(caller);

        self.emit(LedgerEvent::PostShared {
            sharer: caller,
            original_id: post_id,
            new_id,
        });
        Ok(new_id)
    }

    // ---- Weekly rewards ----

    /// Convert the caller's since-claim counters into a capped payout.
    /// One atomic transition: counters reset, claim timestamp stamped,
    /// payout credited.
    pub fn claim_weekly_engagement_rewards(
        &mut self,
        caller: Address,
    ) -> Result<ClaimOutcome, LedgerError> {
        // Checks
        let now = self.clock.now();
        let user = self.registry.get(&caller);
        let remaining = rewards::cooldown_remaining(
            user.last_claim_timestamp,
            self.params.claim_cooldown_secs,
            now,
        );
        if remaining > 0 {
            return Err(LedgerError::CooldownActive {
                remaining_secs: remaining,
            });
        }
        let counters = user.since_claim;
        let payout = rewards::compute_payout(&counters, &self.params)?;
        if self.vault.reserve() < payout {
            return Err(LedgerError::InsufficientBalance {
                need: payout,
                have: self.vault.reserve(),
            });
        }

        // Effects
        let record = self.registry.user_mut(caller);
        record.since_claim = ActivityCounters::default();
        record.last_claim_timestamp = now;

        // Interactions
        if payout > U256::zero() {
            self.vault.credit(caller, payout)?;
        }

        info!(
            "Claim by {}: {} posts, {} comments, {} shares -> {}",
            caller, counters.posts, counters.comments, counters.shares, payout
        );
        self.emit(LedgerEvent::EngagementRewardsClaimed {
            user: caller,
            posts: counters.posts,
            comments: counters.comments,
            shares: counters.shares,
            amount: payout,
        });
        Ok(ClaimOutcome {
            posts: counters.posts,
            comments: counters.comments,
            shares: counters.shares,
            payout,
        })
    }

    // ---- Admin ----

    pub fn set_costs(
        &mut self,
        caller: Address,
        post_cost: U256,
        comment_cost: U256,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        self.params.post_cost = post_cost;
        self.params.comment_cost = comment_cost;
        info!("Costs updated: post {}, comment {}", post_cost, comment_cost);
        Ok(())
    }

    pub fn set_engagement_rewards(
        &mut self,
        caller: Address,
        reward_per_post: U256,
        reward_per_comment: U256,
        reward_per_share: U256,
        max_weekly_payout: U256,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        self.params.reward_per_post = reward_per_post;
        self.params.reward_per_comment = reward_per_comment;
        self.params.reward_per_share = reward_per_share;
        self.params.max_weekly_payout = max_weekly_payout;
        info!("Engagement rewards updated, cap {}", max_weekly_payout);
        Ok(())
    }

    pub fn set_token_address(&mut self, caller: Address, token: Address) -> Result<(), LedgerError> {
        self.ensure_owner(caller)?;
        self.params.token_address = token;
        info!("Token address set to {}", token);
        Ok(())
    }

    /// Drain the vault's pooled reserve to the owner
    pub fn withdraw_tokens(&mut self, caller: Address) -> Result<U256, LedgerError> {
        self.ensure_owner(caller)?;
        let amount = self.vault.withdraw_all(self.owner)?;
        info!("Owner withdrew {}", amount);
        Ok(amount)
    }

    // ---- Read accessors ----

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn params(&self) -> &EconomicParams {
        &self.params
    }

    pub fn get_user_by_address(&self, address: &Address) -> User {
        self.registry.get(address)
    }

    pub fn get_posts_count(&self) -> u64 {
        self.content.post_count()
    }

    pub fn get_post(&self, id: PostId) -> Result<Post, LedgerError> {
        self.content.post(id).cloned()
    }

    pub fn get_comment(&self, post_id: PostId, index: u64) -> Result<Comment, LedgerError> {
        self.content.comment(post_id, index).cloned()
    }

    pub fn post_comments_count(&self, post_id: PostId) -> Result<u64, LedgerError> {
        self.content.comment_count(post_id)
    }

    pub fn get_free_posts_remaining(&self, address: &Address) -> u64 {
        self.registry.get(address).free_posts_remaining
    }

    pub fn get_user_feed(&self, address: &Address) -> String {
        self.registry.get(address).feed_ref
    }

    pub fn get_user_model(&self, address: &Address) -> String {
        self.registry.get(address).model_ref
    }

    pub fn get_user_interests(&self, address: &Address) -> Vec<String> {
        self.registry.get(address).interests
    }

    pub fn get_user_stats(&self, address: &Address) -> UserStats {
        self.registry.get(address).stats
    }

    pub fn balance_of(&self, address: &Address) -> U256 {
        self.vault.balance_of(address)
    }

    /// The vault's own pooled holding
    pub fn vault_balance(&self) -> U256 {
        self.vault.reserve()
    }
}
