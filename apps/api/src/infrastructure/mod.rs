pub mod http;
pub mod repositories;
pub mod sanity;
pub mod verification;
