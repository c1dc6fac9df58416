// Marketplace Input Validation Helpers
// This module provides validation functions for marketplace operation inputs.

use crate::market::{
    MarketError, MarketResult, MAX_COLLECTION_NAME_LENGTH, MAX_MARKET_SYMBOL_LENGTH,
    MAX_SERVICE_FEE_BASIS_POINTS, MAX_TOKEN_URI_LENGTH,
};

// ========================================
// Name / Symbol Validation
// ========================================

/// Validate a collection name
pub fn validate_collection_name(name: &str) -> MarketResult<()> {
    if name.is_empty() {
        return Err(MarketError::NameEmpty);
    }
    if name.len() > MAX_COLLECTION_NAME_LENGTH {
        return Err(MarketError::NameTooLong);
    }
    Ok(())
}

/// Validate the market display name
pub fn validate_market_name(name: &str) -> MarketResult<()> {
    validate_collection_name(name)
}

/// Validate the market symbol (uppercase ASCII letters and digits)
pub fn validate_market_symbol(symbol: &str) -> MarketResult<()> {
    if symbol.len() > MAX_MARKET_SYMBOL_LENGTH {
        return Err(MarketError::SymbolTooLong);
    }
    if symbol.is_empty()
        || !symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(MarketError::SymbolInvalidChar);
    }
    Ok(())
}

// ========================================
// Token Validation
// ========================================

/// Validate a token URI
pub fn validate_token_uri(uri: &str) -> MarketResult<()> {
    if uri.len() > MAX_TOKEN_URI_LENGTH {
        return Err(MarketError::UriTooLong);
    }
    Ok(())
}

/// Validate a listing price (must be strictly positive)
pub fn validate_price(price: u64) -> MarketResult<()> {
    if price == 0 {
        return Err(MarketError::InvalidPrice);
    }
    Ok(())
}

// ========================================
// Fee Validation
// ========================================

/// Validate a service fee rate in basis points
pub fn validate_fee_rate(basis_points: u16) -> MarketResult<()> {
    if basis_points > MAX_SERVICE_FEE_BASIS_POINTS {
        return Err(MarketError::InvalidFee);
    }
    Ok(())
}
