//! Domain logic for the vitals service.
//!
//! This crate has no internal dependencies so the API layer, repository
//! layer, and tests can all share it. Nothing here touches the database or
//! the clock; callers pass in everything a computation needs.

pub mod calendar;
pub mod error;
pub mod inbox;
pub mod settings;
pub mod types;
