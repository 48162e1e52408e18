//! Browser adapters for the domain ports.

pub mod config;
pub mod document;
pub mod services;
pub mod storage;
pub mod timers;

pub use document::DocumentRoot;
pub use storage::{InMemoryStore, LocalStorageStore};
