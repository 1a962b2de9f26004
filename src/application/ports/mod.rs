// src/application/ports/mod.rs
//! Traits the application services depend on; adapters live in
//! `crate::infrastructure`.
pub mod notify;
pub mod security;
pub mod session_revocation;
pub mod time;
pub mod util;
