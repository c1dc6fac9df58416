// Query Operations
// This module contains the read-only lookups over tokens, collections and
// the ownership index. Queries never mutate the store.

use crate::market::{ActorId, Collection, CollectionId, MarketError, MarketResult, Token, TokenId};

use super::MarketStore;

// ========================================
// Token Queries
// ========================================

/// Get the current owner of a token
///
/// Burned tokens still report their last owner.
pub fn token_owner<S: MarketStore + ?Sized>(
    storage: &S,
    token_id: TokenId,
) -> MarketResult<ActorId> {
    storage
        .get_token(token_id)
        .map(|token| token.owner)
        .ok_or(MarketError::TokenNotFound)
}

/// Get the metadata URI of a token
///
/// Burned tokens keep answering so provenance stays resolvable.
pub fn token_uri<S: MarketStore + ?Sized>(storage: &S, token_id: TokenId) -> MarketResult<String> {
    storage
        .get_token(token_id)
        .map(|token| token.uri)
        .ok_or(MarketError::TokenNotFound)
}

/// Check whether a token exists and is still in circulation
///
/// Returns false for IDs never minted and for burned tokens.
pub fn token_exists<S: MarketStore + ?Sized>(storage: &S, token_id: TokenId) -> bool {
    storage
        .get_token(token_id)
        .map(|token| !token.burned)
        .unwrap_or(false)
}

/// Get the full token record by ID
pub fn get_token<S: MarketStore + ?Sized>(storage: &S, token_id: TokenId) -> MarketResult<Token> {
    storage
        .get_token(token_id)
        .ok_or(MarketError::TokenNotFound)
}

// ========================================
// Ownership Queries
// ========================================

/// Count the tokens currently owned by an address
pub fn owned_token_count<S: MarketStore + ?Sized>(storage: &S, owner: &ActorId) -> u64 {
    storage.owned_count(owner)
}

/// List the full records of the tokens currently owned by an address
///
/// Order follows acquisition: earliest-held token first.
pub fn tokens_of<S: MarketStore + ?Sized>(storage: &S, owner: &ActorId) -> Vec<Token> {
    storage
        .owned_tokens(owner)
        .into_iter()
        .filter_map(|id| storage.get_token(id))
        .collect()
}

/// Get the credited sale proceeds of an address
pub fn balance_of<S: MarketStore + ?Sized>(storage: &S, owner: &ActorId) -> u64 {
    storage.balance(owner)
}

// ========================================
// Collection Queries
// ========================================

/// Get a collection record by ID
pub fn get_collection<S: MarketStore + ?Sized>(
    storage: &S,
    collection_id: CollectionId,
) -> MarketResult<Collection> {
    storage
        .get_collection(collection_id)
        .ok_or(MarketError::CollectionNotFound)
}

/// List the collaborators of a collection in insertion order
pub fn collection_collaborators<S: MarketStore + ?Sized>(
    storage: &S,
    collection_id: CollectionId,
) -> MarketResult<Vec<ActorId>> {
    let collection = get_collection(storage, collection_id)?;
    Ok(collection.collaborators.into_iter().collect())
}
