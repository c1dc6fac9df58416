// Burn Operations
// This module contains the logic for retiring tokens. A burned token keeps
// its record for provenance queries but leaves circulation for good.

use crate::market::{ActorId, MarketError, MarketResult, TokenId};

use super::MarketStore;

// ========================================
// Burn Operation
// ========================================

/// Burn a token, removing it from circulation
///
/// Only the current owner may burn. The record stays in the store with the
/// burned flag set so URI and provenance queries keep answering.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `caller`: Caller identity, must be the owner
/// - `token_id`: Token ID
pub fn burn_token<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    token_id: TokenId,
) -> MarketResult<()> {
    // Step 1: Get token
    let mut token = storage
        .get_token(token_id)
        .ok_or(MarketError::TokenNotFound)?;

    // Step 2: Authorization check (burned first, then ownership)
    token.can_modify(caller)?;

    // Step 3: Retire the record and delist it
    token.burned = true;
    token.for_sale = false;
    storage.put_token(&token)?;

    // Step 4: Drop from the ownership index
    storage.index_remove(caller, token_id)?;

    Ok(())
}
