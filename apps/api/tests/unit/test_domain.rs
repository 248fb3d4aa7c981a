use chrono::{TimeZone, Utc};
use mosaic_api::domain::{
    comment::{
        entity::{Comment, NewComment},
        moderation::visible_for_post,
        value_objects::{
            AuthorEmail, AuthorName, CommentText, MAX_AUTHOR_NAME_LENGTH,
            MAX_COMMENT_TEXT_LENGTH, MAX_POST_REFERENCE_LENGTH, PostReference,
        },
    },
    post::entity::Slug,
};
use serde_json::json;

#[test]
fn author_name_is_trimmed_and_bounded() {
    let name = AuthorName::new("  Alice  ".to_string()).expect("valid name");
    assert_eq!(name.as_str(), "Alice");
    assert!(AuthorName::new("a".repeat(MAX_AUTHOR_NAME_LENGTH)).is_ok());
    assert!(AuthorName::new("a".repeat(MAX_AUTHOR_NAME_LENGTH + 1)).is_err());
    assert!(AuthorName::new("   ".to_string()).is_err());
}

#[test]
fn comment_text_enforces_length_bounds() {
    assert!(CommentText::new("x".repeat(MAX_COMMENT_TEXT_LENGTH)).is_ok());
    assert!(CommentText::new("x".repeat(MAX_COMMENT_TEXT_LENGTH + 1)).is_err());
    assert!(CommentText::new(String::new()).is_err());
}

#[test]
fn post_reference_enforces_length_bounds() {
    assert!(PostReference::new("p1".to_string()).is_ok());
    assert!(PostReference::new("p".repeat(MAX_POST_REFERENCE_LENGTH + 1)).is_err());
}

#[test]
fn author_email_must_be_an_address() {
    assert!(AuthorEmail::new("alice@example.com".to_string()).is_ok());
    assert!(AuthorEmail::new("alice".to_string()).is_err());
    assert!(AuthorEmail::new("alice@".to_string()).is_err());
}

#[test]
fn slug_accepts_any_editor_value_within_bounds() {
    assert!(Slug::new("hydration-myths-2024".to_string()).is_ok());
    assert_eq!(
        Slug::new("Hydration_101".to_string()).expect("editor slug").as_str(),
        "Hydration_101"
    );
    assert!(Slug::new("a".repeat(200)).is_ok());
    assert!(Slug::new("a".repeat(201)).is_err());
    assert!(Slug::new("  ".to_string()).is_err());
    assert!(Slug::new(String::new()).is_err());
}

#[test]
fn new_comments_start_unapproved() {
    let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let comment = NewComment::pending(
        PostReference::new("p1".to_string()).unwrap(),
        AuthorName::new("Alice".to_string()).unwrap(),
        None,
        CommentText::new("Great post!".to_string()).unwrap(),
        created_at,
    );
    assert!(!comment.approved());
    assert_eq!(comment.created_at(), created_at);
}

#[test]
fn unapproved_or_foreign_comments_are_never_visible() {
    let comments: Vec<Comment> = serde_json::from_value(json!([
        { "_id": "a", "postId": "p1", "authorName": "A", "commentText": "x",
          "createdAt": "2024-03-02T00:00:00Z", "approved": true },
        { "_id": "b", "postId": "p1", "authorName": "B", "commentText": "x",
          "createdAt": "2024-03-01T00:00:00Z", "approved": null },
        { "_id": "c", "postId": "p2", "authorName": "C", "commentText": "x",
          "createdAt": "2024-03-01T00:00:00Z", "approved": true }
    ]))
    .unwrap();

    let visible = visible_for_post("p1", comments);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "a");
}
