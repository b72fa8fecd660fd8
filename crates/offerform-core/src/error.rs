//! # Error Types
//!
//! Domain-specific error types for offerform-core.
//!
//! Every error here is a contract violation: offers are decoded and
//! validated upstream, so a descriptor that cannot be classified or an
//! amount product that leaves the msat range indicates a defect in the
//! caller, not a recoverable user condition.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, quantities, reasons)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Contract errors raised by the offer presentation core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The offer descriptor does not match any presentable shape.
    ///
    /// Unreachable for descriptors that passed upstream validation
    /// (e.g. a receive offer always carries a fixed amount).
    #[error("offer is not classifiable: {reason}")]
    UnclassifiableOffer { reason: &'static str },

    /// A per-unit price multiplied by a quantity left the msat range.
    #[error("amount overflow: {base_msat} msat x {quantity} exceeds the msat range")]
    AmountOverflow { base_msat: u64, quantity: u64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
