// Listing Operations
// This module contains owner-side mutations of a token's listing state.

use crate::market::{ActorId, MarketError, MarketResult, TokenId};

use super::validation::validate_price;
use super::MarketStore;

// ========================================
// Price Change Operation
// ========================================

/// Change the listing price of a token (owner only)
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(MarketError)`: Error code
pub fn change_token_price<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    token_id: TokenId,
    new_price: u64,
) -> MarketResult<()> {
    // Step 1: Input validation
    validate_price(new_price)?;

    // Step 2: Get token
    let mut token = storage
        .get_token(token_id)
        .ok_or(MarketError::TokenNotFound)?;

    // Step 3: Permission check (burned first, then ownership)
    token.can_modify(caller)?;

    // Step 4: Update price
    token.price = new_price;
    storage.put_token(&token)
}

// ========================================
// Toggle For-Sale Operation
// ========================================

/// Invert the for-sale flag of a token (owner only)
///
/// # Returns
/// - `Ok(bool)`: The new flag value
/// - `Err(MarketError)`: Error code
pub fn toggle_for_sale<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    token_id: TokenId,
) -> MarketResult<bool> {
    let mut token = storage
        .get_token(token_id)
        .ok_or(MarketError::TokenNotFound)?;

    token.can_modify(caller)?;

    token.for_sale = !token.for_sale;
    storage.put_token(&token)?;

    Ok(token.for_sale)
}
