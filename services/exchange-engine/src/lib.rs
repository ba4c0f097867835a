//! Exchange Matching Engine
//!
//! Given the inventories of two (or many) users over shared collection sets,
//! determines which items one user can give the other: one side holds the
//! item as surplus, the other still needs it.
//!
//! Two entry operations share one matching core:
//! - [`ExchangeEngine::find_global_exchanges`]: scan all users and all sets
//! - [`ExchangeEngine::find_set_exchanges`]: scan one set's holders
//!
//! **Key invariants:**
//! - Matching is read-only discovery, never reservation
//! - Deterministic output for a fixed input snapshot
//! - The requesting user never appears in their own results
//! - The public operations never fail; every internal error degrades to an
//!   empty result (the cause is logged)

pub mod store;
pub mod index;
pub mod matching;
pub mod assemble;
pub mod engine;

pub use engine::ExchangeEngine;
pub use store::{CollectionStore, ItemFilter, SnapshotStore};
