//! Worker tasks that back the runtime orchestration.
//!
//! The store worker is the single owner of the authoritative combat state.

mod store;

pub use store::{Command, DispatchOrigin, StoreWorker};
