pub mod entity;
pub mod moderation;
pub mod repository;
pub mod value_objects;
