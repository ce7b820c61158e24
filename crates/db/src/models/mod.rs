//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and replacements
//! - Conversions into the `vitals_core` snapshot types the inbox engine reads

pub mod checkin;
pub mod daily_metric;
pub mod notification;
pub mod profile;
pub mod settings;
pub mod supplement;
pub mod workout;
