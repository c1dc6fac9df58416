use serde::{Deserialize, Serialize};

use crate::market::{
    validate_market_name, validate_market_symbol, ActorId, MarketError, MarketResult,
    MAX_SERVICE_FEE_BASIS_POINTS,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Default service fee charged on every sale, in basis points
// 250 = 2.5% of the sale price, routed to the platform owner
pub const DEFAULT_SERVICE_FEE_BASIS_POINTS: u16 = 250;

// Genesis parameters of a marketplace instance
// The platform owner is fixed here and never changes afterwards;
// only the fee rate can be updated at runtime (by the platform owner)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Market display name
    pub name: String,

    /// Market ticker symbol (uppercase ASCII)
    pub symbol: String,

    /// Platform owner, collector of service fees
    pub platform_owner: ActorId,

    /// Service fee rate in basis points (100 = 1%)
    pub service_fee_bps: u16,
}

impl MarketConfig {
    /// Create a config with the default service fee rate
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        platform_owner: ActorId,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            platform_owner,
            service_fee_bps: DEFAULT_SERVICE_FEE_BASIS_POINTS,
        }
    }

    /// Override the service fee rate
    pub fn with_service_fee(mut self, basis_points: u16) -> Self {
        self.service_fee_bps = basis_points;
        self
    }

    /// Validate the genesis parameters
    pub fn validate(&self) -> MarketResult<()> {
        validate_market_name(&self.name)?;
        validate_market_symbol(&self.symbol)?;
        if self.service_fee_bps > MAX_SERVICE_FEE_BASIS_POINTS {
            return Err(MarketError::InvalidFee);
        }
        Ok(())
    }
}
