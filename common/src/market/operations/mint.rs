// Mint Operations
// This module contains the create-and-list operation logic.

use crate::market::{ActorId, MarketError, MarketResult, Token, TokenId};

use super::validation::{validate_price, validate_token_uri};
use super::MarketStore;

// ========================================
// Mint Parameters
// ========================================

/// Parameters for minting a single token
#[derive(Clone, Debug)]
pub struct MintParams {
    /// Metadata URI (0-512 bytes)
    pub uri: String,
    /// Listing price (must be strictly positive)
    pub price: u64,
    /// Collection to mint into (None = standalone token)
    pub collection: Option<u64>,
}

impl MintParams {
    /// Create new mint parameters
    pub fn new(uri: impl Into<String>, price: u64) -> Self {
        Self {
            uri: uri.into(),
            price,
            collection: None,
        }
    }

    /// Mint into a collection
    pub fn with_collection(mut self, collection: u64) -> Self {
        self.collection = Some(collection);
        self
    }
}

// ========================================
// Mint Operation
// ========================================

/// Mint a token owned by the caller and list it for sale
///
/// # Returns
/// - `Ok(TokenId)`: The new token ID
/// - `Err(MarketError)`: Error code
pub fn create_and_list_token<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    params: MintParams,
) -> MarketResult<TokenId> {
    // Step 1: Input validation
    validate_token_uri(&params.uri)?;
    validate_price(params.price)?;

    // Step 2: Check mint permission if a collection was given
    if let Some(collection_id) = params.collection {
        let collection = storage
            .get_collection(collection_id)
            .ok_or(MarketError::CollectionNotFound)?;
        if !collection.has_mint_permission(caller) {
            return Err(MarketError::Unauthorized);
        }
    }

    // Step 3: Allocate token ID
    let token_id = storage.allocate_token_id()?;

    // Step 4: Create token, listed for sale from the start
    let token = Token {
        id: token_id,
        minter: caller.clone(),
        owner: caller.clone(),
        previous_owner: None,
        price: params.price,
        for_sale: true,
        transfer_count: 0,
        collection: params.collection,
        uri: params.uri,
        burned: false,
    };

    // Step 5: Store token
    storage.put_token(&token)?;

    // Step 6: Update the ownership index
    storage.index_insert(caller, token_id)?;

    Ok(token_id)
}
