// Marketplace Ledger - Error Codes
// This module defines all error codes for marketplace operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Collection errors
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 400-499: Payment errors
// - 900-999: System errors

use thiserror::Error;

/// Marketplace operation result type
pub type MarketResult<T> = Result<T, MarketError>;

/// Marketplace error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum MarketError {
    // ========================================
    // Collection errors (1-99)
    // ========================================
    #[error("Collection not found")]
    CollectionNotFound = 1,

    #[error("Name is empty")]
    NameEmpty = 2,

    #[error("Name too long")]
    NameTooLong = 3,

    #[error("Already a collaborator")]
    AlreadyCollaborator = 4,

    #[error("Not a collaborator")]
    NotCollaborator = 5,

    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token not found")]
    TokenNotFound = 100,

    #[error("Token already burned")]
    AlreadyBurned = 101,

    #[error("Token not for sale")]
    NotForSale = 102,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Unauthorized")]
    Unauthorized = 200,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Invalid price")]
    InvalidPrice = 300,

    #[error("URI too long")]
    UriTooLong = 301,

    #[error("Invalid fee rate")]
    InvalidFee = 302,

    #[error("Symbol too long")]
    SymbolTooLong = 303,

    #[error("Invalid symbol character")]
    SymbolInvalidChar = 304,

    // ========================================
    // Payment errors (400-499)
    // ========================================
    #[error("Insufficient funds")]
    InsufficientFunds = 400,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Storage error")]
    StorageError = 901,
}

impl MarketError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::CollectionNotFound),
            2 => Some(Self::NameEmpty),
            3 => Some(Self::NameTooLong),
            4 => Some(Self::AlreadyCollaborator),
            5 => Some(Self::NotCollaborator),
            100 => Some(Self::TokenNotFound),
            101 => Some(Self::AlreadyBurned),
            102 => Some(Self::NotForSale),
            200 => Some(Self::Unauthorized),
            300 => Some(Self::InvalidPrice),
            301 => Some(Self::UriTooLong),
            302 => Some(Self::InvalidFee),
            303 => Some(Self::SymbolTooLong),
            304 => Some(Self::SymbolInvalidChar),
            400 => Some(Self::InsufficientFunds),
            900 => Some(Self::Overflow),
            901 => Some(Self::StorageError),
            _ => None,
        }
    }
}
