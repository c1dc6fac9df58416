// Marketplace Operations Module
// This module contains the core business logic for marketplace operations.
//
// The operations are designed to be engine-agnostic:
// - Storage access is abstracted via the MarketStore trait
// - The caller identity is passed as a parameter, never ambient state
// - Operations validate and stage everything before the first write, so a
//   failed call leaves the store untouched

mod burn;
mod buy;
mod collection;
mod fee;
mod listing;
mod mint;
mod query;
mod validation;

pub use burn::*;
pub use buy::*;
pub use collection::*;
pub use fee::*;
pub use listing::*;
pub use mint::*;
pub use query::*;
pub use validation::*;

use crate::market::{
    ActorId, Collection, CollectionId, FeeConfig, MarketResult, SaleSettlement, Token, TokenId,
};

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for marketplace operations.
/// The engine provides a concrete backend; tests use the in-memory store.
pub trait MarketStore {
    // Token operations
    fn get_token(&self, id: TokenId) -> Option<Token>;
    fn put_token(&mut self, token: &Token) -> MarketResult<()>;
    fn token_count(&self) -> u64;
    fn allocate_token_id(&mut self) -> MarketResult<TokenId>;

    // Collection operations
    fn get_collection(&self, id: CollectionId) -> Option<Collection>;
    fn put_collection(&mut self, collection: &Collection) -> MarketResult<()>;
    fn allocate_collection_id(&mut self) -> MarketResult<CollectionId>;

    // Fee configuration
    fn fee_config(&self) -> FeeConfig;
    fn set_fee_config(&mut self, config: &FeeConfig) -> MarketResult<()>;

    // Ownership index (derived from token records, never authoritative)
    fn owned_tokens(&self, owner: &ActorId) -> Vec<TokenId>;
    fn owned_count(&self, owner: &ActorId) -> u64;
    fn index_insert(&mut self, owner: &ActorId, id: TokenId) -> MarketResult<()>;
    fn index_remove(&mut self, owner: &ActorId, id: TokenId) -> MarketResult<()>;

    // Accrued sale proceeds per actor
    fn balance(&self, actor: &ActorId) -> u64;

    // Apply a staged sale (token fields, both credits, index move) as a
    // single step; no partial effect may remain on failure
    fn apply_sale(&mut self, settlement: &SaleSettlement) -> MarketResult<()>;
}
