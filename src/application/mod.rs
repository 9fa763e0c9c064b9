//! Use cases: commands that change state, queries that read it, and the
//! ports infrastructure implements for them.
pub mod authorization;
pub mod commands;
pub mod dto;
pub mod error;
pub mod notifications;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;
