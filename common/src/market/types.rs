// Marketplace Ledger - Core Types
// This module defines all data structures for marketplace operations.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::error::{MarketError, MarketResult};

// ========================================
// Protocol Constants
// ========================================

/// Maximum collection / market name length (bytes)
pub const MAX_COLLECTION_NAME_LENGTH: usize = 64;

/// Maximum market symbol length (bytes)
pub const MAX_MARKET_SYMBOL_LENGTH: usize = 8;

/// Maximum token URI length (bytes)
pub const MAX_TOKEN_URI_LENGTH: usize = 512;

/// Maximum service fee in basis points (must stay below 100% = 10000)
pub const MAX_SERVICE_FEE_BASIS_POINTS: u16 = 9999;

// ========================================
// Identifiers
// ========================================

/// Token identifier, allocated sequentially starting from 1
pub type TokenId = u64;

/// Collection identifier, allocated sequentially starting from 1
pub type CollectionId = u64;

/// Opaque 32-byte actor identity, hex-encoded on the wire
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(#[serde(with = "hex::serde")] [u8; 32]);

impl ActorId {
    /// Build an identity from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for ActorId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

// ========================================
// Token
// ========================================

/// Token record definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token ID (starts from 1)
    pub id: TokenId,

    /// Minter identity (immutable)
    pub minter: ActorId,

    /// Current owner
    pub owner: ActorId,

    /// Previous owner (None until the first sale)
    pub previous_owner: Option<ActorId>,

    /// Listing price
    pub price: u64,

    /// Whether the token can currently be bought
    pub for_sale: bool,

    /// Number of completed sales for this token
    pub transfer_count: u64,

    /// Collection the token was minted into (None = standalone)
    pub collection: Option<CollectionId>,

    /// Metadata URI (0-512 bytes)
    pub uri: String,

    /// Whether the token has been burned (terminal)
    pub burned: bool,
}

impl Token {
    /// Validate the token data
    pub fn validate(&self) -> MarketResult<()> {
        if self.uri.len() > MAX_TOKEN_URI_LENGTH {
            return Err(MarketError::UriTooLong);
        }
        if self.price == 0 {
            return Err(MarketError::InvalidPrice);
        }
        Ok(())
    }

    /// Check that the token accepts owner mutations from the caller.
    /// Burned tokens reject every mutation, whoever asks.
    pub fn can_modify(&self, caller: &ActorId) -> MarketResult<()> {
        if self.burned {
            return Err(MarketError::AlreadyBurned);
        }
        if self.owner != *caller {
            return Err(MarketError::Unauthorized);
        }
        Ok(())
    }
}

// ========================================
// Collection
// ========================================

/// Collection definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID (starts from 1)
    pub id: CollectionId,

    /// Collection name (1-64 bytes)
    pub name: String,

    /// Owner identity, set at creation
    pub owner: ActorId,

    /// Collaborators allowed to mint into the collection.
    /// The owner is implicitly permitted and never appears here.
    pub collaborators: IndexSet<ActorId>,
}

impl Collection {
    /// Validate the collection data
    pub fn validate(&self) -> MarketResult<()> {
        if self.name.is_empty() {
            return Err(MarketError::NameEmpty);
        }
        if self.name.len() > MAX_COLLECTION_NAME_LENGTH {
            return Err(MarketError::NameTooLong);
        }
        Ok(())
    }

    /// Check whether an actor is a listed collaborator
    pub fn is_collaborator(&self, actor: &ActorId) -> bool {
        self.collaborators.contains(actor)
    }

    /// Check whether an actor may mint into this collection
    pub fn has_mint_permission(&self, actor: &ActorId) -> bool {
        self.owner == *actor || self.is_collaborator(actor)
    }
}

// ========================================
// Fee Configuration
// ========================================

/// Service fee configuration for sales
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Recipient of the platform fee
    pub collector: ActorId,

    /// Fee rate in basis points (100 = 1%, max 9999)
    pub basis_points: u16,
}

impl FeeConfig {
    /// Create a new fee configuration
    pub fn new(collector: ActorId, basis_points: u16) -> Self {
        Self {
            collector,
            basis_points,
        }
    }

    /// Validate the fee configuration
    pub fn validate(&self) -> MarketResult<()> {
        if self.basis_points > MAX_SERVICE_FEE_BASIS_POINTS {
            return Err(MarketError::InvalidFee);
        }
        Ok(())
    }

    /// Calculate the platform fee using checked arithmetic
    pub fn calculate_fee(&self, price: u64) -> MarketResult<u64> {
        if self.basis_points == 0 {
            return Ok(0);
        }
        price
            .checked_mul(self.basis_points as u64)
            .ok_or(MarketError::Overflow)?
            .checked_div(10000)
            .ok_or(MarketError::Overflow)
    }

    /// Split a price into (seller amount, platform fee)
    pub fn split(&self, price: u64) -> MarketResult<(u64, u64)> {
        let fee = self.calculate_fee(price)?;
        let seller_amount = price.checked_sub(fee).ok_or(MarketError::Overflow)?;
        Ok((seller_amount, fee))
    }
}

// ========================================
// Sale Settlement
// ========================================

/// Fully staged outcome of a buy, applied to the store as one step.
/// `token` already carries the post-sale field values.
#[derive(Clone, Debug)]
pub struct SaleSettlement {
    /// Token record with owner, listing and counters updated
    pub token: Token,

    /// Seller (owner before the sale)
    pub seller: ActorId,

    /// Amount credited to the seller
    pub seller_amount: u64,

    /// Recipient of the platform fee
    pub fee_collector: ActorId,

    /// Amount credited to the fee collector
    pub fee_amount: u64,
}

impl SaleSettlement {
    /// Receipt handed back to the buyer
    pub fn receipt(&self) -> SaleReceipt {
        SaleReceipt {
            token_id: self.token.id,
            seller: self.seller.clone(),
            buyer: self.token.owner.clone(),
            price: self.token.price,
            seller_amount: self.seller_amount,
            fee_amount: self.fee_amount,
        }
    }
}

/// Outcome of a successful buy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// Token sold
    pub token_id: TokenId,

    /// Seller identity
    pub seller: ActorId,

    /// Buyer identity
    pub buyer: ActorId,

    /// Sale price
    pub price: u64,

    /// Seller proceeds (price minus fee)
    pub seller_amount: u64,

    /// Platform fee taken out of the price
    pub fee_amount: u64,
}
