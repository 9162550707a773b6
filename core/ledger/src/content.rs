// chainchat-core/core/ledger/src/content.rs

use crate::types::{Comment, LedgerError, Post, PostId};
use chainchat_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Append-only post, comment and like store.
///
/// Post ids are indexes into the post array. Likes live in a hash set of
/// (post, liker) pairs for O(1) duplicate detection; entries are never
/// removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentLedger {
    posts: Vec<Post>,
    comments: HashMap<PostId, Vec<Comment>>,
    likes: HashSet<(PostId, Address)>,
}

impl ContentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_count(&self) -> u64 {
        self.posts.len() as u64
    }

    pub fn post(&self, id: PostId) -> Result<&Post, LedgerError> {
        self.posts
            .get(id as usize)
            .ok_or(LedgerError::InvalidPost(id))
    }

    pub fn comment(&self, post_id: PostId, index: u64) -> Result<&Comment, LedgerError> {
        self.post(post_id)?;
        self.comments
            .get(&post_id)
            .and_then(|list| list.get(index as usize))
            .ok_or(LedgerError::InvalidComment { post_id, index })
    }

    pub fn comment_count(&self, post_id: PostId) -> Result<u64, LedgerError> {
        Ok(self.post(post_id)?.comment_count)
    }

    pub fn has_liked(&self, post_id: PostId, liker: &Address) -> bool {
        self.likes.contains(&(post_id, *liker))
    }

    pub fn append_post(
        &mut self,
        author: Address,
        content_ref: String,
        image_ref: String,
        now: u64,
    ) -> Result<PostId, LedgerError> {
        if content_ref.trim().is_empty() {
            return Err(LedgerError::ContentRequired);
        }

        let id = self.posts.len() as u64;
        self.posts.push(Post {
            id,
            author,
            content_ref,
            image_ref,
            timestamp: now,
            like_count: 0,
            comment_count: 0,
            original_post_id: None,
        });
        debug!("Appended post {} by {}", id, author);
        Ok(id)
    }

    /// Record a like. Returns the post's author so the caller can credit
    /// the immediate like reward.
    pub fn like(&mut self, post_id: PostId, liker: Address) -> Result<Address, LedgerError> {
        let author = self.post(post_id)?.author;
        if !self.likes.insert((post_id, liker)) {
            return Err(LedgerError::AlreadyLiked { post_id, liker });
        }

        let post = &mut self.posts[post_id as usize];
        post.like_count = post.like_count.saturating_add(1);
        Ok(author)
    }

    /// Append a comment, returning its per-post index
    pub fn append_comment(
        &mut self,
        post_id: PostId,
        commenter: Address,
        content: String,
        now: u64,
    ) -> Result<u64, LedgerError> {
        self.post(post_id)?;

        let list = self.comments.entry(post_id).or_default();
        let index = list.len() as u64;
        list.push(Comment {
            commenter,
            content,
            timestamp: now,
        });

        let post = &mut self.posts[post_id as usize];
        post.comment_count = post.comment_count.saturating_add(1);
        Ok(index)
    }

    /// Create a share of `post_id` authored by `sharer`. Content and image
    /// refs are copied from the original; returns the new post's id.
    pub fn share(
        &mut self,
        post_id: PostId,
        sharer: Address,
        now: u64,
    ) -> Result<PostId, LedgerError> {
        let original = self.post(post_id)?;
        let content_ref = original.content_ref.clone();
        let image_ref = original.image_ref.clone();

        let id = self.posts.len() as u64;
        self.posts.push(Post {
            id,
            author: sharer,
            content_ref,
            image_ref,
            timestamp: now,
            like_count: 0,
            comment_count: 0,
            original_post_id: Some(post_id),
        });
        debug!("Post {} shared as {} by {}", post_id, id, sharer);
        Ok(id)
    }
}
