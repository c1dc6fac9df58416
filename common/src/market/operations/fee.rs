// Fee Operations
// This module contains the service fee controls: reading the current rate,
// updating it (platform owner only) and the price breakdown helpers.

use crate::market::{ActorId, FeeConfig, MarketError, MarketResult};

use super::{validation::validate_fee_rate, MarketStore};

// ========================================
// Fee Rate Accessors
// ========================================

/// Get the current service fee rate in basis points
pub fn service_fee<S: MarketStore + ?Sized>(storage: &S) -> u16 {
    storage.fee_config().basis_points
}

/// Set the service fee rate, returning the previous rate
///
/// Only the fee collector (the platform owner) may change the rate. The new
/// rate applies to sales settled after the call, never retroactively.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `caller`: Caller identity, must be the fee collector
/// - `basis_points`: New rate in basis points (max 9999)
pub fn set_service_fee<S: MarketStore + ?Sized>(
    storage: &mut S,
    caller: &ActorId,
    basis_points: u16,
) -> MarketResult<u16> {
    // Step 1: Authorization check
    let current = storage.fee_config();
    if current.collector != *caller {
        return Err(MarketError::Unauthorized);
    }

    // Step 2: Input validation
    validate_fee_rate(basis_points)?;

    // Step 3: Persist the new rate, collector stays fixed
    let previous = current.basis_points;
    storage.set_fee_config(&FeeConfig::new(current.collector, basis_points))?;

    Ok(previous)
}

// ========================================
// Price Breakdown Helpers
// ========================================

/// Calculate the platform fee due on a sale at the given price
pub fn calc_platform_fee<S: MarketStore + ?Sized>(storage: &S, price: u64) -> MarketResult<u64> {
    storage.fee_config().calculate_fee(price)
}

/// Calculate the seller proceeds for a sale at the given price
pub fn calc_item_price<S: MarketStore + ?Sized>(storage: &S, price: u64) -> MarketResult<u64> {
    let fee = calc_platform_fee(storage, price)?;
    price.checked_sub(fee).ok_or(MarketError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MemoryStore;

    fn actor(byte: u8) -> ActorId {
        ActorId::from_bytes([byte; 32])
    }

    fn collector() -> ActorId {
        actor(0xff)
    }

    fn store() -> MemoryStore {
        MemoryStore::new(FeeConfig::new(collector(), 250))
    }

    #[test]
    fn test_set_service_fee_success() {
        let mut storage = store();

        let previous = set_service_fee(&mut storage, &collector(), 500).unwrap();
        assert_eq!(previous, 250);
        assert_eq!(service_fee(&storage), 500);

        // Collector is unchanged by rate updates
        assert_eq!(storage.fee_config().collector, collector());
    }

    #[test]
    fn test_set_service_fee_not_collector_fails() {
        let mut storage = store();

        let result = set_service_fee(&mut storage, &actor(1), 500);
        assert_eq!(result, Err(MarketError::Unauthorized));
        assert_eq!(service_fee(&storage), 250);
    }

    #[test]
    fn test_set_service_fee_invalid_rate_fails() {
        let mut storage = store();

        let result = set_service_fee(&mut storage, &collector(), 10_000);
        assert_eq!(result, Err(MarketError::InvalidFee));
        assert_eq!(service_fee(&storage), 250);
    }

    #[test]
    fn test_set_service_fee_to_zero() {
        let mut storage = store();

        set_service_fee(&mut storage, &collector(), 0).unwrap();
        assert_eq!(service_fee(&storage), 0);
        assert_eq!(calc_platform_fee(&storage, 10_000).unwrap(), 0);
        assert_eq!(calc_item_price(&storage, 10_000).unwrap(), 10_000);
    }

    #[test]
    fn test_price_breakdown() {
        let storage = store();

        // 2.5% of 10_000 is 250
        assert_eq!(calc_platform_fee(&storage, 10_000).unwrap(), 250);
        assert_eq!(calc_item_price(&storage, 10_000).unwrap(), 9750);

        // Integer division truncates toward the seller
        assert_eq!(calc_platform_fee(&storage, 100).unwrap(), 2);
        assert_eq!(calc_item_price(&storage, 100).unwrap(), 98);

        // Small prices can carry a zero fee
        assert_eq!(calc_platform_fee(&storage, 39).unwrap(), 0);
        assert_eq!(calc_item_price(&storage, 39).unwrap(), 39);
    }

    #[test]
    fn test_price_breakdown_overflow() {
        let storage = store();

        let result = calc_platform_fee(&storage, u64::MAX);
        assert_eq!(result, Err(MarketError::Overflow));
    }
}
