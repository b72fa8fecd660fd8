//! # Offer Descriptor
//!
//! The validated BOLT12 offer descriptor this core presents.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Offer Descriptor                                │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Offer       │   │  OfferAmount    │   │   FiatQuote     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  send_invoice   │   │  Fixed(Msat)    │   │  currency       │       │
//! │  │  vendor         │   │  Any ("any")    │   │  amount         │       │
//! │  │  amount         │   └─────────────────┘   └─────────────────┘       │
//! │  │  fiat           │                                                    │
//! │  │  quantity_min/  │   Reusable local offers carry the "any"           │
//! │  │  quantity_max   │   sentinel: no fixed price, repeatable.           │
//! │  │  encoded[_signed]                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Offers arrive decoded and validated from the upstream stage; this core
//! never constructs or repairs them. Invariants it relies on:
//! - `quantity_min` and `quantity_max` are both present or both absent,
//!   with `min <= max`
//! - a pay offer never carries both a fixed amount and a fiat quote
//! - `encoded_signed` contains signing material and must never appear in
//!   any diagnostic dump

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use ts_rs::TS;

use crate::amount::Msat;

/// Wire spelling of the unbounded-amount sentinel.
pub const ANY_SENTINEL: &str = "any";

/// JSON key of the signed encoding, stripped from every diagnostic dump.
const SIGNED_KEY: &str = "encoded_signed";

// =============================================================================
// Offer Amount
// =============================================================================

/// The amount carried by an offer: a concrete msat value, or the `"any"`
/// sentinel of a reusable offer that accepts payer-chosen amounts.
///
/// On the wire this is either an integer or the literal string `"any"`,
/// so serde goes through a custom visitor rather than a derived enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferAmount {
    /// A concrete amount in msat.
    Fixed(Msat),
    /// Unbounded / repeatable; the payer picks the amount.
    Any,
}

impl Serialize for OfferAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OfferAmount::Fixed(amount) => serializer.serialize_u64(amount.msat()),
            OfferAmount::Any => serializer.serialize_str(ANY_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for OfferAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> Visitor<'de> for AmountVisitor {
            type Value = OfferAmount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an msat integer or the string \"any\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<OfferAmount, E> {
                Ok(OfferAmount::Fixed(Msat::from_msat(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<OfferAmount, E> {
                u64::try_from(v)
                    .map(|msat| OfferAmount::Fixed(Msat::from_msat(msat)))
                    .map_err(|_| E::custom("offer amount cannot be negative"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<OfferAmount, E> {
                if v == ANY_SENTINEL {
                    Ok(OfferAmount::Any)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

// =============================================================================
// Fiat Quote
// =============================================================================

/// A fiat-denominated quote attached to an offer.
///
/// Informative only: the binding msat amount is resolved by the payment
/// executor on the confirmation step, never by this core. The decimal
/// amount stays an opaque string; only the injected fiat formatter ever
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FiatQuote {
    /// ISO 4217 currency code (e.g. "USD").
    pub currency: String,
    /// Decimal amount as quoted (e.g. "1.50").
    pub amount: String,
}

// =============================================================================
// Offer
// =============================================================================

/// A validated payment offer, exactly as the upstream decode stage
/// delivered it. Immutable for the lifetime of a render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Offer {
    /// Direction flag: true means this offer asks the viewer to *receive*
    /// a payment (the counterparty pays); false means the viewer pays.
    pub send_invoice: bool,

    /// Vendor display string.
    #[serde(default)]
    pub vendor: Option<String>,

    /// Offer description display string.
    #[serde(default)]
    pub description: Option<String>,

    /// Fixed msat amount, or the "any" sentinel on reusable local offers.
    /// For pay-direction offers a concrete value is a per-unit price
    /// whenever a quantity range is present.
    #[serde(default)]
    #[ts(type = "number | \"any\" | null")]
    pub amount: Option<OfferAmount>,

    /// Fiat quote; mutually exclusive with a fixed amount on pay offers.
    #[serde(default)]
    pub fiat: Option<FiatQuote>,

    /// Lower quantity bound. Present iff `quantity_max` is present.
    #[serde(default)]
    pub quantity_min: Option<u64>,

    /// Upper quantity bound. Present iff `quantity_min` is present.
    #[serde(default)]
    pub quantity_max: Option<u64>,

    /// Issuing node ID, display-only.
    #[serde(default)]
    pub node_id: Option<String>,

    /// Offer ID, display-only.
    #[serde(default)]
    pub offer_id: Option<String>,

    /// Unsigned string encoding of the offer, safe to display and share.
    pub encoded: String,

    /// Signed string encoding. Carries signing material: never displayed,
    /// never dumped. Only local offers have it.
    #[serde(default)]
    pub encoded_signed: Option<String>,
}

impl Offer {
    /// Returns the concrete fixed amount, if the offer has one.
    /// The "any" sentinel is not a concrete amount.
    pub fn fixed_amount(&self) -> Option<Msat> {
        match self.amount {
            Some(OfferAmount::Fixed(amount)) => Some(amount),
            _ => None,
        }
    }

    /// Whether the offer carries a quantity range.
    #[inline]
    pub fn has_quantity(&self) -> bool {
        self.quantity_min.is_some()
    }

    /// Builds the expert-mode structural dump of this offer.
    ///
    /// ## Rules
    /// - Every field appears, including the display-only identifiers and
    ///   the unsigned encoding
    /// - `encoded_signed` is removed unconditionally — signing material
    ///   never reaches a diagnostic view, under any configuration
    pub fn diagnostic_dump(&self) -> Value {
        // Plain data; serialization cannot fail here, but stay total.
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => {
                map.remove(SIGNED_KEY);
                Value::Object(map)
            }
            Ok(other) => other,
            Err(_) => Value::Null,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
