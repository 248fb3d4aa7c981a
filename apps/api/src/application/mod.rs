pub mod blog;
pub mod list_comments;
pub mod submit_comment;
