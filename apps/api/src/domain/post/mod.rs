pub mod entity;
pub mod image;
pub mod portable_text;
pub mod repository;
