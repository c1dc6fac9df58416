// Marketplace Ledger
// This module provides the marketplace state machine: token records with
// listing state, collections with collaborator permissions, fee-split
// settlement on sales and the per-owner token index.
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (Token, Collection, FeeConfig, ...)
// - events: Ledger events appended on successful mutations
// - storage: Logical tables and the in-memory store
// - operations: Core operation logic (mint, listing, buy, burn, query)
// - engine: Thread-safe facade serializing mutations over a store

mod engine;
mod error;
mod events;
pub mod operations;
mod storage;
mod types;

pub use engine::*;
pub use error::*;
pub use events::*;
pub use operations::*;
pub use storage::*;
pub use types::*;
