//! Integration Testing Utilities for the Bazaar Marketplace Ledger
//!
//! This crate provides fixtures and helpers for writing integration tests
//! against the marketplace engine: deterministic and random actor
//! identities, preconfigured markets and shortcuts for seeding state.
//!
//! # Example
//!
//! ```rust,ignore
//! use bazaar_testing_integration::{test_actor, test_market};
//!
//! #[test]
//! fn test_simple_trade() {
//!     let market = test_market();
//!     let alice = test_actor(1);
//!
//!     let token_id = market
//!         .create_and_list_token(&alice, MintParams::new("uri", 100))
//!         .unwrap();
//!
//!     // Test logic...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used helpers
pub use fixtures::{
    market_with_fee, mint_listed, platform_owner, random_actor, test_actor, test_market,
};

/// Common test result type
pub type TestResult<T = ()> = anyhow::Result<T>;
