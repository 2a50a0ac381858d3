//! User Server client
//!
//! A typed HTTP client for the user API plus the table rendering used by the
//! `user-client` command. Failures are reported to the caller; nothing is
//! substituted for a failed request.

pub mod client;
pub mod render;

pub use client::{ClientError, UserClient};
