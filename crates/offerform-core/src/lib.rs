//! # offerform-core: Pure Offer Presentation Logic
//!
//! This crate is the decision core of the offer payment flow. It turns a
//! validated BOLT12 offer descriptor into the exact set of form fields,
//! display text, and computed totals needed to pay or receive against that
//! offer — as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Offer Presentation Flow                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Upstream: decode + validate offer                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Offer                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ offerform-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  amount   │  │ classify  │  │   form    │  │   offer   │  │   │
//! │  │   │   Msat    │  │  Variant  │  │ FieldSpec │  │ descriptor│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PERSISTED STATE • PURE FUNCTIONS    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ FieldSpec                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Downstream: rendering layer + payment executor         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`amount`] - `Msat` with exact integer totals (no floating point!)
//! - [`offer`] - the immutable offer descriptor and its diagnostic dump
//! - [`classify`] - offer shape → form variant
//! - [`form`] - the declarative FieldSpec builder and collaborator seams
//! - [`submit`] - the payload handed back on submission
//! - [`error`] - typed contract errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every render call is stateless over its inputs
//! 2. **Integer Money**: all amounts are msat (u64), products widen to u128
//! 3. **Injected Collaborators**: formatting and visibility policy come
//!    from the caller; the rendering layer stays swappable
//! 4. **Explicit Errors**: contract violations are typed, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use offerform_core::{
//!     build_form, classify, DescriptionPolicy, FiatFormatter, FiatQuote, FormContext,
//!     FormField, Msat, Offer, UnitFormatter,
//! };
//!
//! struct RawMsat;
//! impl UnitFormatter for RawMsat {
//!     fn format(&self, amount: Msat) -> String {
//!         format!("{} msat", amount.msat())
//!     }
//! }
//!
//! struct PlainFiat;
//! impl FiatFormatter for PlainFiat {
//!     fn format(&self, quote: &FiatQuote) -> String {
//!         format!("{} {}", quote.amount, quote.currency)
//!     }
//! }
//!
//! struct AlwaysShow;
//! impl DescriptionPolicy for AlwaysShow {
//!     fn show_description(&self, _offer: &Offer) -> bool {
//!         true
//!     }
//! }
//!
//! // A pay offer with no amount: the payer chooses one.
//! let offer: Offer = serde_json::from_str(
//!     r#"{ "send_invoice": false, "encoded": "lno1..." }"#,
//! ).unwrap();
//!
//! let ctx = FormContext::new(&RawMsat, &PlainFiat, &AlwaysShow);
//! let variant = classify(&offer).unwrap();
//! let spec = build_form(&offer, variant, &ctx).unwrap();
//!
//! assert!(spec.fields().iter().any(|f| matches!(
//!     f,
//!     FormField::Submit { label } if label == "Send Payment"
//! )));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod classify;
pub mod error;
pub mod form;
pub mod offer;
pub mod submit;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::Msat;
pub use classify::{classify, OfferVariant};
pub use error::{CoreError, CoreResult};
pub use form::{
    build_form, DescriptionPolicy, FiatFormatter, FieldSpec, FormContext, FormField,
    UnitFormatter,
};
pub use offer::{FiatQuote, Offer, OfferAmount, ANY_SENTINEL};
pub use submit::PaymentSubmission;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Input name of the payer-chosen amount field; key of
/// [`PaymentSubmission::custom_msat`] on the wire.
pub const FIELD_CUSTOM_AMOUNT: &str = "custom_msat";

/// Input name of the quantity field.
pub const FIELD_QUANTITY: &str = "quantity";

/// Input name of the payer note field.
pub const FIELD_PAYER_NOTE: &str = "payer_note";
