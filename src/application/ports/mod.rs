// src/application/ports/mod.rs
pub mod notifier;
pub mod security;
pub mod time;

