//! Domain types shared across the portfolio backend.

pub mod error;
pub mod slug;
pub mod types;
