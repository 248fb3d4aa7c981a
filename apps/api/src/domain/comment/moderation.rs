//! Read-side moderation gate.
//!
//! The store query already filters on `approved == true`, but the records it
//! returns are re-checked here so an unapproved comment can never reach a
//! public listing, whatever the store hands back.

use super::entity::Comment;

/// Keep only approved comments that belong to `post_id`, oldest first.
///
/// Records without a post reference are trusted to belong to the queried post.
/// The sort is stable, so comments with equal timestamps keep store order.
pub fn visible_for_post(post_id: &str, mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.retain(|comment| {
        comment.approved
            && comment
                .post_id
                .as_deref()
                .is_none_or(|reference| reference == post_id)
    });
    comments.sort_by_key(|comment| comment.created_at);
    comments
}
