//! Core entity definitions for the user directory.
//!
//! The only managed entity is [`User`]. Request payloads for creating and
//! updating users live next to it so that the server and the client agree on
//! the JSON shape.

mod user;

pub use user::*;
