// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notify;
pub mod security;
pub mod store;
pub mod time;
pub mod util;

pub use notify::CapturingNotifier;
pub use security::{StrictPasswordHasher, TestTokenManager};
pub use store::MemoryStore;
pub use time::{TickingClock, fixed_now};
pub use util::QueuedSlugGenerator;
