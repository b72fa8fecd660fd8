//! # Offer Classification
//!
//! Maps an offer descriptor to the one form variant that presents it.
//!
//! ## Decision Order (behavioral contract)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  classify(offer)                                                        │
//! │                                                                         │
//! │  send_invoice?                                                          │
//! │   ├── true ──► fixed amount? ──► ReceiveFixed                           │
//! │   │                    └── no ──► UnclassifiableOffer                   │
//! │   │                                                                     │
//! │   └── false ─► fixed amount? ──► PayFixedCrypto (per-unit price)        │
//! │                    ├── "any" ──► UnclassifiableOffer                    │
//! │                    └── none ──► fiat quote? ──► PayFixedFiat            │
//! │                                      └── no ──► PayCustomAmount         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Direction is checked first, then the fixed amount, then the fiat quote;
//! a fiat quote never overrides a concrete fixed crypto amount. The submit
//! label wording depends on which branch wins, so this order is preserved
//! exactly.

use tracing::debug;

use crate::amount::Msat;
use crate::error::{CoreError, CoreResult};
use crate::offer::{Offer, OfferAmount};

// =============================================================================
// Offer Variant
// =============================================================================

/// The presentable shapes an offer can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferVariant {
    /// Pay direction with a concrete msat amount. When the offer carries a
    /// quantity range this is a per-unit price, and the submitted total is
    /// `per_unit.total(quantity)`.
    PayFixedCrypto { per_unit: Msat },

    /// Pay direction quoted in fiat; the binding msat amount is shown on
    /// the next confirmation step.
    PayFixedFiat,

    /// Pay direction with no amount at all; the payer enters one.
    PayCustomAmount,

    /// Receive direction with a concrete msat amount.
    ReceiveFixed { amount: Msat },
}

impl OfferVariant {
    /// Whether this variant renders the receive-payment flow.
    #[inline]
    pub fn is_receive(&self) -> bool {
        matches!(self, OfferVariant::ReceiveFixed { .. })
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Classifies an offer descriptor into its form variant.
///
/// Fails only on descriptors that upstream validation should never let
/// through (a receive offer without a fixed amount, or a pay offer carrying
/// the "any" sentinel); such a failure is a defect, not a user error.
///
/// ## Example
/// ```rust
/// use offerform_core::{classify, Msat, Offer, OfferAmount, OfferVariant};
///
/// let offer = Offer {
///     send_invoice: false,
///     vendor: None,
///     description: None,
///     amount: Some(OfferAmount::Fixed(Msat::from_msat(50_000))),
///     fiat: None,
///     quantity_min: None,
///     quantity_max: None,
///     node_id: None,
///     offer_id: None,
///     encoded: "lno1...".to_string(),
///     encoded_signed: None,
/// };
///
/// let variant = classify(&offer).unwrap();
/// assert_eq!(
///     variant,
///     OfferVariant::PayFixedCrypto { per_unit: Msat::from_msat(50_000) }
/// );
/// ```
pub fn classify(offer: &Offer) -> CoreResult<OfferVariant> {
    let variant = if offer.send_invoice {
        // Receive flow supports fixed amounts only.
        match offer.amount {
            Some(OfferAmount::Fixed(amount)) => OfferVariant::ReceiveFixed { amount },
            _ => {
                return Err(CoreError::UnclassifiableOffer {
                    reason: "receive offer without a fixed amount",
                })
            }
        }
    } else {
        // Fixed crypto amount wins over a fiat quote.
        match (offer.amount, offer.fiat.is_some()) {
            (Some(OfferAmount::Fixed(per_unit)), _) => OfferVariant::PayFixedCrypto { per_unit },
            (Some(OfferAmount::Any), _) => {
                return Err(CoreError::UnclassifiableOffer {
                    reason: "pay offer with an unbounded amount",
                })
            }
            (None, true) => OfferVariant::PayFixedFiat,
            (None, false) => OfferVariant::PayCustomAmount,
        }
    };

    debug!(variant = ?variant, "classified offer");
    Ok(variant)
}

// =============================================================================
// Unit Tests
// =============================================================================
