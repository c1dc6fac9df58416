//! Market and actor fixtures for integration tests

use bazaar_common::config::MarketConfig;
use bazaar_common::market::{ActorId, Marketplace, MemoryStore, MintParams, TokenId};

/// Platform owner used by every fixture market, also the fee collector
pub fn platform_owner() -> ActorId {
    test_actor(0xff)
}

/// Deterministic actor identity derived from a single seed byte
///
/// Tests that need stable assertions (balances, owners, event payloads)
/// should prefer this over [`random_actor`].
pub fn test_actor(seed: u8) -> ActorId {
    ActorId::from_bytes([seed; 32])
}

/// Fresh random actor identity
pub fn random_actor() -> ActorId {
    ActorId::from_bytes(rand::random())
}

/// Open a market with the default 2.5% service fee
///
/// The platform owner is [`platform_owner`].
pub fn test_market() -> Marketplace<MemoryStore> {
    market_with_fee(bazaar_common::config::DEFAULT_SERVICE_FEE_BASIS_POINTS)
}

/// Open a market with a specific service fee rate
pub fn market_with_fee(basis_points: u16) -> Marketplace<MemoryStore> {
    let config = MarketConfig::new("Bazaar Test Market", "BZT", platform_owner())
        .with_service_fee(basis_points);
    Marketplace::new(config).expect("fixture config must be valid")
}

/// Mint a listed token, returning its ID
pub fn mint_listed(
    market: &Marketplace<MemoryStore>,
    minter: &ActorId,
    uri: &str,
    price: u64,
) -> TokenId {
    market
        .create_and_list_token(minter, MintParams::new(uri, price))
        .expect("fixture mint must succeed")
}
