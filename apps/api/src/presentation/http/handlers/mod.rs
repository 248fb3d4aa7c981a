pub mod blog;
pub mod comments;
pub mod health;
