// chainchat-core/core/ledger/src/events.rs

use crate::types::PostId;
use chainchat_primitives::Address;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Notification emitted once per successful mutating operation.
///
/// Events accumulate in the ledger's internal log and are drained by the
/// host (relay, indexer) via `SocialLedger::take_events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    UserRegistered {
        address: Address,
        username: String,
    },
    ProfileEdited {
        address: Address,
        username: String,
    },
    ProfileImageUpdated {
        address: Address,
        image_ref: String,
    },
    BioUpdated {
        address: Address,
        bio: String,
    },
    CoverImageUpdated {
        address: Address,
        cover_ref: String,
    },
    InterestsUpdated {
        address: Address,
    },
    PostCreated {
        author: Address,
        content_ref: String,
        image_ref: String,
        id: PostId,
    },
    PostLiked {
        liker: Address,
        post_id: PostId,
    },
    CommentAdded {
        commenter: Address,
        post_id: PostId,
        content: String,
        index: u64,
    },
    PostShared {
        sharer: Address,
        original_id: PostId,
        new_id: PostId,
    },
    EngagementRewardsClaimed {
        user: Address,
        posts: u64,
        comments: u64,
        shares: u64,
        amount: U256,
    },
    UserFeedUpdated {
        address: Address,
        feed_ref: String,
    },
    UserModelUpdated {
        address: Address,
        model_ref: String,
    },
}
