#![deny(clippy::dbg_macro)]

pub mod types;
pub mod verification;
