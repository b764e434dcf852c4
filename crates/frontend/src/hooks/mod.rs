//! Custom hooks for the popup

pub mod use_signup;
pub mod use_timeout;

pub use use_signup::use_signup;
pub use use_timeout::use_timeout;
