pub mod sanity_comment_repository;
pub mod sanity_post_repository;
