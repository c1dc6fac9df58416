// Marketplace Ledger - Storage Layer
// This module defines the logical tables, the in-memory store and the
// snapshot format used for export and restore.
//
// Table Layout:
// - Tokens:       {token_id} => {token}
// - Collections:  {collection_id} => {collection}
// - Fee Config:   {} => {fee_config} (single row)
// - Owner Index:  {owner} => {token_ids} (derived, rebuilt on restore)
// - Balances:     {owner} => {amount}

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::market::{
    ActorId, Collection, CollectionId, FeeConfig, MarketError, MarketResult, MarketStore,
    SaleSettlement, Token, TokenId,
};

// ========================================
// Logical Tables
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, EnumIter, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    // All token records, burned ones included
    // {token_id} => {token}
    Tokens,
    // All collections with their collaborator sets
    // {collection_id} => {collection}
    Collections,
    // Fee collector and rate, single row
    // {} => {fee_config}
    FeeConfig,
    // Reverse lookup from owner to held tokens
    // Derived from Tokens, excluded from snapshots
    // {owner} => {token_ids}
    OwnerIndex,
    // Credited sale proceeds per address
    // {owner} => {amount}
    Balances,
}

// ========================================
// In-Memory Store
// ========================================

/// In-memory storage backend
///
/// Tables are kept in insertion order so listings and exports are
/// deterministic for a given operation history.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    // {token_id} => {token}
    tokens: IndexMap<TokenId, Token>,
    // {collection_id} => {collection}
    collections: IndexMap<CollectionId, Collection>,
    // Fee collector and rate
    fee: FeeConfig,
    // Next IDs to hand out, both start at 1
    next_token_id: u64,
    next_collection_id: u64,
    // {owner} => {token_ids}, insertion order is acquisition order
    owner_index: IndexMap<ActorId, IndexSet<TokenId>>,
    // {owner} => {amount}
    balances: IndexMap<ActorId, u64>,
}

impl MemoryStore {
    /// Create an empty store with the given fee configuration
    pub fn new(fee: FeeConfig) -> Self {
        Self {
            tokens: IndexMap::new(),
            collections: IndexMap::new(),
            fee,
            next_token_id: 1,
            next_collection_id: 1,
            owner_index: IndexMap::new(),
            balances: IndexMap::new(),
        }
    }

    /// Export the persistent tables as a snapshot
    ///
    /// The owner index is derived data and is left out, restore rebuilds it
    /// from the token records.
    pub fn export_snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            tokens: self.tokens.values().cloned().collect(),
            collections: self.collections.values().cloned().collect(),
            fee: self.fee.clone(),
            next_token_id: self.next_token_id,
            next_collection_id: self.next_collection_id,
            balances: self
                .balances
                .iter()
                .map(|(owner, amount)| (owner.clone(), *amount))
                .collect(),
        }
    }

    /// Rebuild a store from a snapshot
    ///
    /// Every record is re-validated and the ID allocators are checked
    /// against the records they must stay ahead of. The rebuilt owner index
    /// lists holdings in token ID order, not original acquisition order.
    pub fn from_snapshot(snapshot: MarketSnapshot) -> MarketResult<Self> {
        snapshot.fee.validate()?;

        let mut tokens = IndexMap::with_capacity(snapshot.tokens.len());
        let mut max_token_id = 0;
        for token in snapshot.tokens {
            token.validate()?;
            max_token_id = max_token_id.max(token.id);
            tokens.insert(token.id, token);
        }
        if snapshot.next_token_id <= max_token_id {
            return Err(MarketError::StorageError);
        }

        let mut collections = IndexMap::with_capacity(snapshot.collections.len());
        let mut max_collection_id = 0;
        for collection in snapshot.collections {
            collection.validate()?;
            max_collection_id = max_collection_id.max(collection.id);
            collections.insert(collection.id, collection);
        }
        if snapshot.next_collection_id <= max_collection_id {
            return Err(MarketError::StorageError);
        }

        let owner_index = rebuild_owner_index(&tokens);

        Ok(Self {
            tokens,
            collections,
            fee: snapshot.fee,
            next_token_id: snapshot.next_token_id,
            next_collection_id: snapshot.next_collection_id,
            owner_index,
            balances: snapshot.balances.into_iter().collect(),
        })
    }
}

impl MarketStore for MemoryStore {
    fn get_token(&self, token_id: TokenId) -> Option<Token> {
        self.tokens.get(&token_id).cloned()
    }

    fn put_token(&mut self, token: &Token) -> MarketResult<()> {
        self.tokens.insert(token.id, token.clone());
        Ok(())
    }

    fn token_count(&self) -> u64 {
        self.tokens.len() as u64
    }

    fn allocate_token_id(&mut self) -> MarketResult<TokenId> {
        let id = self.next_token_id;
        self.next_token_id = id.checked_add(1).ok_or(MarketError::Overflow)?;
        Ok(id)
    }

    fn get_collection(&self, collection_id: CollectionId) -> Option<Collection> {
        self.collections.get(&collection_id).cloned()
    }

    fn put_collection(&mut self, collection: &Collection) -> MarketResult<()> {
        self.collections.insert(collection.id, collection.clone());
        Ok(())
    }

    fn allocate_collection_id(&mut self) -> MarketResult<CollectionId> {
        let id = self.next_collection_id;
        self.next_collection_id = id.checked_add(1).ok_or(MarketError::Overflow)?;
        Ok(id)
    }

    fn fee_config(&self) -> FeeConfig {
        self.fee.clone()
    }

    fn set_fee_config(&mut self, fee: &FeeConfig) -> MarketResult<()> {
        fee.validate()?;
        self.fee = fee.clone();
        Ok(())
    }

    fn owned_tokens(&self, owner: &ActorId) -> Vec<TokenId> {
        self.owner_index
            .get(owner)
            .map(|owned| owned.iter().copied().collect())
            .unwrap_or_default()
    }

    fn owned_count(&self, owner: &ActorId) -> u64 {
        self.owner_index
            .get(owner)
            .map(|owned| owned.len() as u64)
            .unwrap_or(0)
    }

    fn index_insert(&mut self, owner: &ActorId, token_id: TokenId) -> MarketResult<()> {
        self.owner_index
            .entry(owner.clone())
            .or_default()
            .insert(token_id);
        Ok(())
    }

    fn index_remove(&mut self, owner: &ActorId, token_id: TokenId) -> MarketResult<()> {
        if let Some(owned) = self.owner_index.get_mut(owner) {
            owned.shift_remove(&token_id);
        }
        Ok(())
    }

    fn balance(&self, owner: &ActorId) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn apply_sale(&mut self, settlement: &SaleSettlement) -> MarketResult<()> {
        // Step 1: Stage every credited balance before touching any table,
        // so a failed check leaves no partial effect
        let same_account = settlement.seller == settlement.fee_collector;
        let seller_balance = if same_account {
            self.balance(&settlement.seller)
                .checked_add(settlement.seller_amount)
                .and_then(|total| total.checked_add(settlement.fee_amount))
                .ok_or(MarketError::Overflow)?
        } else {
            self.balance(&settlement.seller)
                .checked_add(settlement.seller_amount)
                .ok_or(MarketError::Overflow)?
        };
        let collector_balance = if same_account {
            None
        } else {
            Some(
                self.balance(&settlement.fee_collector)
                    .checked_add(settlement.fee_amount)
                    .ok_or(MarketError::Overflow)?,
            )
        };

        // Step 2: Commit the updated token record
        let token = &settlement.token;
        self.tokens.insert(token.id, token.clone());

        // Step 3: Credit the proceeds
        self.balances
            .insert(settlement.seller.clone(), seller_balance);
        if let Some(balance) = collector_balance {
            self.balances
                .insert(settlement.fee_collector.clone(), balance);
        }

        // Step 4: Move the ownership index entry to the buyer
        if let Some(owned) = self.owner_index.get_mut(&settlement.seller) {
            owned.shift_remove(&token.id);
        }
        self.owner_index
            .entry(token.owner.clone())
            .or_default()
            .insert(token.id);

        Ok(())
    }
}

/// Derive the owner index from the token records
///
/// Burned tokens are skipped, their last owner no longer holds them.
fn rebuild_owner_index(
    tokens: &IndexMap<TokenId, Token>,
) -> IndexMap<ActorId, IndexSet<TokenId>> {
    let mut index: IndexMap<ActorId, IndexSet<TokenId>> = IndexMap::new();
    for token in tokens.values() {
        if token.burned {
            continue;
        }
        index
            .entry(token.owner.clone())
            .or_default()
            .insert(token.id);
    }
    index
}

// ========================================
// Snapshot Format
// ========================================

/// Serializable image of the persistent tables
///
/// Holds everything needed to rebuild a store. The owner index is derived
/// and intentionally absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub tokens: Vec<Token>,
    pub collections: Vec<Collection>,
    pub fee: FeeConfig,
    pub next_token_id: u64,
    pub next_collection_id: u64,
    pub balances: Vec<(ActorId, u64)>,
}
