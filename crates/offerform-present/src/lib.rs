//! # offerform-present: Local Offer Presentation
//!
//! The thin asynchronous layer above [`offerform_core`]: presenting a
//! local (reusable) offer requires one await on the external QR image
//! generator, and that single suspension point lives here. Everything
//! else — summary wording, redacted expert dump, the shared encoded
//! string — is assembled synchronously once the image arrives.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! let presentation = offerform_present::present(&offer, &qr_client, &ctx).await?;
//! renderer.show(presentation);
//! ```
//!
//! Hard invariant carried by this crate: the signed offer encoding never
//! reaches a diagnostic view, under any configuration.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod presenter;
pub mod qr;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{PresentError, PresentResult};
pub use presenter::{present, Presentation};
pub use qr::{ImageSource, QrError, QrGenerator};
