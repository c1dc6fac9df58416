// Buy Operations
// This module contains the atomic sale: ownership transfer, fee split and
// index move staged first, then applied to the store as one step.

use crate::market::{ActorId, MarketError, MarketResult, SaleReceipt, SaleSettlement, TokenId};

use super::MarketStore;

// ========================================
// Buy Operation
// ========================================

/// Buy a listed token at its exact price
///
/// # Parameters
/// - `storage`: Storage backend
/// - `caller`: Buyer identity
/// - `token_id`: Token ID
/// - `payment`: Attached amount, must equal the listing price
///
/// # Returns
/// - `Ok(SaleReceipt)`: Settlement summary
/// - `Err(MarketError)`: Error code, store untouched
pub fn buy_token<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    token_id: TokenId,
    payment: u64,
) -> MarketResult<SaleReceipt> {
    // Step 1: Get token
    let token = storage
        .get_token(token_id)
        .ok_or(MarketError::TokenNotFound)?;

    // Step 2: Business rules check
    // 2.1 Burned tokens are permanently out of circulation
    if token.burned {
        return Err(MarketError::AlreadyBurned);
    }

    // 2.2 Must be listed
    if !token.for_sale {
        return Err(MarketError::NotForSale);
    }

    // 2.3 Self-purchase not allowed
    if token.owner == *caller {
        return Err(MarketError::Unauthorized);
    }

    // 2.4 Exact payment required, overpayment is not absorbed
    if payment != token.price {
        return Err(MarketError::InsufficientFunds);
    }

    // Step 3: Stage the full settlement before touching the store
    let fee_config = storage.fee_config();
    let (seller_amount, fee_amount) = fee_config.split(token.price)?;

    let seller = token.owner.clone();
    let mut updated = token;
    updated.previous_owner = Some(seller.clone());
    updated.owner = caller.clone();
    updated.for_sale = false;
    updated.transfer_count = updated
        .transfer_count
        .checked_add(1)
        .ok_or(MarketError::Overflow)?;

    let settlement = SaleSettlement {
        token: updated,
        seller,
        seller_amount,
        fee_collector: fee_config.collector,
        fee_amount,
    };

    // Step 4: Apply as a single step
    storage.apply_sale(&settlement)?;

    Ok(settlement.receipt())
}
