//! CLI command implementations.

pub mod delete;
pub mod messages;
pub mod records;
pub mod search;
pub mod status;
