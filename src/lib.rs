//! Weighted draft order randomizer.
//!
//! Participants go into a [`Registry`](registry::Registry) with optional
//! priority (odds for first, or last pick) and a weight.
//! [`compute_draft_order`](draft::compute_draft_order) turns them into an
//! order, [`share`] packs the result into a link, and [`reveal`] schedules
//! showing it pick by pick. [`Session`](session::Session) ties it together
//! for a front end.

pub mod cli;
pub mod config;
pub mod draft;
pub mod error;
pub mod registry;
pub mod reveal;
pub mod session;
pub mod share;

pub use error::{Error, Result};
