//! HTTP access to the identity endpoint
//!
//! Works on native targets and in the browser, where reqwest is backed by
//! `fetch`.

pub mod client;

pub use client::{IdentityClient, IdentityClientBuilder, error::ClientError};
