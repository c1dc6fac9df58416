// Marketplace Ledger - Engine
// This module ties the pieces together: one struct owning the store behind
// a RwLock, applying operations sequentially and journaling the events
// they produce.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info};

use crate::config::MarketConfig;
use crate::market::{
    operations, ActorId, Collection, CollectionId, CreateCollectionParams, FeeConfig, MarketError,
    MarketEvent, MarketResult, MarketSnapshot, MarketStore, MemoryStore, MintParams, SaleReceipt,
    Token, TokenId,
};

// ========================================
// Engine
// ========================================

struct EngineInner<S: MarketStore> {
    store: S,
    // Events produced by committed operations, in commit order
    events: Vec<MarketEvent>,
}

/// The marketplace ledger
///
/// Mutations take the write lock and run one at a time, so every operation
/// observes the state left by the previous one. Queries share the read
/// lock. Events are journaled under the same write lock that commits the
/// operation producing them.
pub struct Marketplace<S: MarketStore> {
    config: MarketConfig,
    inner: RwLock<EngineInner<S>>,
}

impl Marketplace<MemoryStore> {
    /// Open an empty marketplace backed by an in-memory store
    ///
    /// The platform owner from the config becomes the fee collector and
    /// stays fixed for the lifetime of the market.
    pub fn new(config: MarketConfig) -> MarketResult<Self> {
        config.validate()?;
        let fee = FeeConfig::new(config.platform_owner.clone(), config.service_fee_bps);
        info!(
            "Opening marketplace '{}' ({}) with fee {} bps",
            config.name, config.symbol, config.service_fee_bps
        );
        Ok(Self {
            config,
            inner: RwLock::new(EngineInner {
                store: MemoryStore::new(fee),
                events: Vec::new(),
            }),
        })
    }

    /// Reopen a marketplace from an exported snapshot
    ///
    /// The event journal starts empty, events are not part of snapshots.
    pub fn restore(config: MarketConfig, snapshot: MarketSnapshot) -> MarketResult<Self> {
        let store = MemoryStore::from_snapshot(snapshot)?;
        let market = Self::with_store(config, store)?;
        {
            let inner = market.read_inner();
            info!(
                "Restored marketplace '{}' with {} tokens",
                market.config.name,
                inner.store.token_count()
            );
        }
        Ok(market)
    }

    /// Export the current state as a snapshot
    pub fn snapshot(&self) -> MarketSnapshot {
        self.read_inner().store.export_snapshot()
    }
}

impl<S: MarketStore> Marketplace<S> {
    /// Wrap an existing store
    ///
    /// The store's fee collector must match the configured platform owner,
    /// admin checks and fee routing rely on them being the same identity.
    pub fn with_store(config: MarketConfig, store: S) -> MarketResult<Self> {
        config.validate()?;
        if store.fee_config().collector != config.platform_owner {
            return Err(MarketError::StorageError);
        }
        Ok(Self {
            config,
            inner: RwLock::new(EngineInner {
                store,
                events: Vec::new(),
            }),
        })
    }

    fn read_inner(&self) -> RwLockReadGuard<'_, EngineInner<S>> {
        match self.inner.read() {
            Ok(guard) => guard,
            // The store is only mutated through committed operations, a
            // panicked holder has not left it half-written
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_inner(&self) -> RwLockWriteGuard<'_, EngineInner<S>> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // ========================================
    // Identity
    // ========================================

    /// Market display name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Market ticker symbol
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Platform owner, also the fee collector
    pub fn platform_owner(&self) -> &ActorId {
        &self.config.platform_owner
    }

    // ========================================
    // Token Mutations
    // ========================================

    /// Mint a new token and list it for sale
    pub fn create_and_list_token(
        &self,
        caller: &ActorId,
        params: MintParams,
    ) -> MarketResult<TokenId> {
        let price = params.price;
        let collection = params.collection;

        let mut inner = self.write_inner();
        let token_id = operations::create_and_list_token(&mut inner.store, caller, params)?;
        inner.events.push(MarketEvent::Created {
            token_id,
            minter: caller.clone(),
            collection,
            price,
        });
        debug!("Token {} minted by {} at price {}", token_id, caller, price);
        Ok(token_id)
    }

    /// Buy a listed token at its exact price
    pub fn buy_token(
        &self,
        caller: &ActorId,
        token_id: TokenId,
        payment: u64,
    ) -> MarketResult<SaleReceipt> {
        let mut inner = self.write_inner();
        let receipt = operations::buy_token(&mut inner.store, caller, token_id, payment)?;
        inner.events.push(MarketEvent::Sold {
            token_id,
            seller: receipt.seller.clone(),
            buyer: receipt.buyer.clone(),
            price: receipt.price,
            seller_amount: receipt.seller_amount,
            fee_amount: receipt.fee_amount,
        });
        if receipt.fee_amount > 0 {
            inner.events.push(MarketEvent::Fee {
                token_id,
                collector: self.config.platform_owner.clone(),
                amount: receipt.fee_amount,
            });
        }
        debug!(
            "Token {} sold by {} to {} for {}",
            token_id, receipt.seller, caller, receipt.price
        );
        Ok(receipt)
    }

    /// Change the listing price of an owned token
    pub fn change_token_price(
        &self,
        caller: &ActorId,
        token_id: TokenId,
        price: u64,
    ) -> MarketResult<()> {
        let mut inner = self.write_inner();
        operations::change_token_price(&mut inner.store, caller, token_id, price)?;
        debug!("Token {} repriced to {}", token_id, price);
        Ok(())
    }

    /// Flip the listing flag of an owned token, returning the new state
    pub fn toggle_for_sale(&self, caller: &ActorId, token_id: TokenId) -> MarketResult<bool> {
        let mut inner = self.write_inner();
        let for_sale = operations::toggle_for_sale(&mut inner.store, caller, token_id)?;
        debug!("Token {} listing toggled to {}", token_id, for_sale);
        Ok(for_sale)
    }

    /// Burn an owned token, retiring it from circulation
    pub fn burn_token(&self, caller: &ActorId, token_id: TokenId) -> MarketResult<()> {
        let mut inner = self.write_inner();
        operations::burn_token(&mut inner.store, caller, token_id)?;
        debug!("Token {} burned by {}", token_id, caller);
        Ok(())
    }

    // ========================================
    // Collection Mutations
    // ========================================

    /// Create a collection owned by the caller
    pub fn create_collection(
        &self,
        caller: &ActorId,
        params: CreateCollectionParams,
    ) -> MarketResult<CollectionId> {
        let name = params.name.clone();

        let mut inner = self.write_inner();
        let collection_id = operations::create_collection(&mut inner.store, caller, params)?;
        inner.events.push(MarketEvent::CollectionCreated {
            collection_id,
            owner: caller.clone(),
            name,
        });
        debug!("Collection {} created by {}", collection_id, caller);
        Ok(collection_id)
    }

    /// Grant mint permission on a collection
    pub fn add_collaborator(
        &self,
        caller: &ActorId,
        collection_id: CollectionId,
        actor: &ActorId,
    ) -> MarketResult<()> {
        let mut inner = self.write_inner();
        operations::add_collaborator(&mut inner.store, caller, collection_id, actor)
    }

    /// Revoke mint permission on a collection
    pub fn remove_collaborator(
        &self,
        caller: &ActorId,
        collection_id: CollectionId,
        actor: &ActorId,
    ) -> MarketResult<()> {
        let mut inner = self.write_inner();
        operations::remove_collaborator(&mut inner.store, caller, collection_id, actor)
    }

    // ========================================
    // Fee Administration
    // ========================================

    /// Current service fee rate in basis points
    pub fn service_fee(&self) -> u16 {
        operations::service_fee(&self.read_inner().store)
    }

    /// Change the service fee rate, platform owner only
    pub fn set_service_fee(&self, caller: &ActorId, basis_points: u16) -> MarketResult<u16> {
        let mut inner = self.write_inner();
        let previous = operations::set_service_fee(&mut inner.store, caller, basis_points)?;
        info!(
            "Service fee changed from {} to {} bps",
            previous, basis_points
        );
        Ok(previous)
    }

    /// Platform fee due on a sale at the given price
    pub fn calc_platform_fee(&self, price: u64) -> MarketResult<u64> {
        operations::calc_platform_fee(&self.read_inner().store, price)
    }

    /// Seller proceeds for a sale at the given price
    pub fn calc_item_price(&self, price: u64) -> MarketResult<u64> {
        operations::calc_item_price(&self.read_inner().store, price)
    }

    // ========================================
    // Queries
    // ========================================

    /// Current owner of a token
    pub fn token_owner(&self, token_id: TokenId) -> MarketResult<ActorId> {
        operations::token_owner(&self.read_inner().store, token_id)
    }

    /// Metadata URI of a token
    pub fn token_uri(&self, token_id: TokenId) -> MarketResult<String> {
        operations::token_uri(&self.read_inner().store, token_id)
    }

    /// Whether a token exists and is still in circulation
    pub fn token_exists(&self, token_id: TokenId) -> bool {
        operations::token_exists(&self.read_inner().store, token_id)
    }

    /// Full token record by ID
    pub fn token_by_id(&self, token_id: TokenId) -> MarketResult<Token> {
        operations::get_token(&self.read_inner().store, token_id)
    }

    /// Total number of tokens ever minted, burned ones included
    pub fn token_count(&self) -> u64 {
        self.read_inner().store.token_count()
    }

    /// Number of tokens currently owned by an address
    pub fn owned_token_count(&self, owner: &ActorId) -> u64 {
        operations::owned_token_count(&self.read_inner().store, owner)
    }

    /// All token records currently owned by an address
    pub fn tokens_of(&self, owner: &ActorId) -> Vec<Token> {
        operations::tokens_of(&self.read_inner().store, owner)
    }

    /// Credited sale proceeds of an address
    pub fn balance_of(&self, owner: &ActorId) -> u64 {
        operations::balance_of(&self.read_inner().store, owner)
    }

    /// Collection record by ID
    pub fn collection(&self, collection_id: CollectionId) -> MarketResult<Collection> {
        operations::get_collection(&self.read_inner().store, collection_id)
    }

    /// Collaborators of a collection in insertion order
    pub fn collection_collaborators(
        &self,
        collection_id: CollectionId,
    ) -> MarketResult<Vec<ActorId>> {
        operations::collection_collaborators(&self.read_inner().store, collection_id)
    }

    // ========================================
    // Events
    // ========================================

    /// Take all journaled events, leaving the journal empty
    pub fn drain_events(&self) -> Vec<MarketEvent> {
        let mut inner = self.write_inner();
        std::mem::take(&mut inner.events)
    }
}
