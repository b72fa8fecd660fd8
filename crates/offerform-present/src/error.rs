//! # Error Types
//!
//! Failure surface of the local-offer presentation layer.

use thiserror::Error;

use crate::qr::QrError;

/// Presentation failures.
///
/// The presenter performs exactly one fallible operation — the QR image
/// generation — and issues no retry and no partial rendering; the failure
/// propagates to the caller as-is.
#[derive(Debug, Error)]
pub enum PresentError {
    /// The external image generator failed.
    #[error("offer image generation failed")]
    Qr(#[from] QrError),
}

/// Convenience type alias for Results with PresentError.
pub type PresentResult<T> = Result<T, PresentError>;
