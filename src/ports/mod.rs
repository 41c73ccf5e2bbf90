//! Ports - Interfaces the domain and application layers depend on.
//!
//! Adapters implement these traits to connect the worksheet to the outside
//! world. The only stateful boundary in this system is the per-session
//! key-value store.

mod state_store;

pub use state_store::{StateStore, StateStoreError};
