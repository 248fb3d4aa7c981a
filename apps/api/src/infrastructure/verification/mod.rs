pub mod hcaptcha;
pub mod traits;
