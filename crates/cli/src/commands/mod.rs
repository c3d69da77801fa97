//! CLI command implementations.

pub mod check;
pub mod doctor;
pub mod get;
pub mod show;
