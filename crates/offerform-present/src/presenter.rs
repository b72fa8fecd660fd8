//! # Local Offer Presenter
//!
//! Builds the presentation for an offer the user created for others to
//! pay: a reusable BOLT12 offer shared as an encoded string plus a
//! scannable image.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  present(offer, qr, ctx)                                                │
//! │                                                                         │
//! │  qr.generate(offer.encoded) ──await──► ImageSource                      │
//! │       │ (the only suspension point; failure propagates)                 │
//! │       ▼                                                                 │
//! │  Presentation {                                                         │
//! │    heading   "Receive payment(s)"                                       │
//! │    summary   "… of {amount} each …" only for concrete amounts           │
//! │    encoded   one string, mounted in both responsive slots               │
//! │    qr        the generated image                                        │
//! │    dump      expert only, encoded_signed removed                        │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use ts_rs::TS;

use offerform_core::{FormContext, Offer};

use crate::error::PresentResult;
use crate::qr::{ImageSource, QrGenerator};

// =============================================================================
// Presentation
// =============================================================================

/// The finished local-offer presentation.
///
/// The rendering layer shows the encoded string twice, in mutually
/// exclusive responsive layouts (compact vs. wide). Both slots read the
/// same single string — [`Presentation::encoded_compact`] and
/// [`Presentation::encoded_wide`] — never two different encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Presentation {
    /// Flow heading.
    pub heading: String,

    /// Descriptive sentence above the encoded string.
    pub summary: String,

    /// The unsigned encoded offer string, shareable as-is.
    encoded: String,

    /// The generated scannable image.
    pub qr: ImageSource,

    /// Expert-mode structural dump; signing material is removed before it
    /// ever reaches this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "unknown | null")]
    pub expert_dump: Option<Value>,
}

impl Presentation {
    /// The encoded string for the compact (narrow-screen) slot.
    #[inline]
    pub fn encoded_compact(&self) -> &str {
        &self.encoded
    }

    /// The encoded string for the wide-screen slot. Same string as the
    /// compact slot, by construction.
    #[inline]
    pub fn encoded_wide(&self) -> &str {
        &self.encoded
    }
}

// =============================================================================
// Presenter
// =============================================================================

/// Presents a local (reusable) offer.
///
/// Awaits one image generation for the **unsigned** encoding, then builds
/// the presentation. A generation failure propagates as
/// [`crate::PresentError::Qr`]; there is no retry and no partial result.
/// Cancellation, if needed, is the caller's concern (drop the future).
pub async fn present<G: QrGenerator>(
    offer: &Offer,
    qr: &G,
    ctx: &FormContext<'_>,
) -> PresentResult<Presentation> {
    debug!(encoded_len = offer.encoded.len(), "requesting offer image");
    let image = qr.generate(&offer.encoded).await?;

    // "of {amount} each" only when the offer fixes a price; the "any"
    // sentinel (and an absent amount) drop the clause entirely.
    let summary = match offer.fixed_amount() {
        Some(amount) => format!(
            "You can receive multiple payments of {} each using the reusable BOLT12 offer:",
            ctx.unit.format(amount)
        ),
        None => "You can receive multiple payments using the reusable BOLT12 offer:".to_string(),
    };

    let expert_dump = if ctx.expert {
        // diagnostic_dump strips encoded_signed unconditionally.
        Some(offer.diagnostic_dump())
    } else {
        None
    };

    debug!(expert = ctx.expert, "built local offer presentation");
    Ok(Presentation {
        heading: "Receive payment(s)".to_string(),
        summary,
        encoded: offer.encoded.clone(),
        qr: image,
        expert_dump,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PresentError;
    use crate::qr::QrError;
    use offerform_core::{
        DescriptionPolicy, FiatFormatter, FiatQuote, Msat, OfferAmount, UnitFormatter,
    };

    struct RawMsat;
    impl UnitFormatter for RawMsat {
        fn format(&self, amount: Msat) -> String {
            format!("{} msat", amount.msat())
        }
    }

    struct PlainFiat;
    impl FiatFormatter for PlainFiat {
        fn format(&self, quote: &FiatQuote) -> String {
            format!("{} {}", quote.amount, quote.currency)
        }
    }

    struct AlwaysShow;
    impl DescriptionPolicy for AlwaysShow {
        fn show_description(&self, _offer: &Offer) -> bool {
            true
        }
    }

    /// Echoes the input back as a fake data URI.
    struct EchoQr;
    impl QrGenerator for EchoQr {
        async fn generate(&self, data: &str) -> Result<ImageSource, QrError> {
            Ok(ImageSource::new(format!("data:image/png;base64,{data}")))
        }
    }

    struct FailingQr;
    impl QrGenerator for FailingQr {
        async fn generate(&self, _data: &str) -> Result<ImageSource, QrError> {
            Err(QrError("generator offline".to_string()))
        }
    }

    fn ctx() -> FormContext<'static> {
        FormContext::new(&RawMsat, &PlainFiat, &AlwaysShow)
    }

    fn local_offer(amount: Option<OfferAmount>) -> Offer {
        Offer {
            send_invoice: false,
            vendor: None,
            description: Some("tips".to_string()),
            amount,
            fiat: None,
            quantity_min: None,
            quantity_max: None,
            node_id: Some("02abc".to_string()),
            offer_id: Some("offer123".to_string()),
            encoded: "lno1unsigned".to_string(),
            encoded_signed: Some("lno1signed".to_string()),
        }
    }

    #[tokio::test]
    async fn test_fixed_amount_summary_states_price_each() {
        let offer = local_offer(Some(OfferAmount::Fixed(Msat::from_msat(42_000))));
        let presentation = present(&offer, &EchoQr, &ctx()).await.unwrap();

        assert_eq!(presentation.heading, "Receive payment(s)");
        assert_eq!(
            presentation.summary,
            "You can receive multiple payments of 42000 msat each using the reusable BOLT12 offer:"
        );
        assert_eq!(
            presentation.qr.as_str(),
            "data:image/png;base64,lno1unsigned"
        );
    }

    #[tokio::test]
    async fn test_any_amount_summary_omits_price_clause() {
        let offer = local_offer(Some(OfferAmount::Any));
        let presentation = present(&offer, &EchoQr, &ctx()).await.unwrap();
        assert_eq!(
            presentation.summary,
            "You can receive multiple payments using the reusable BOLT12 offer:"
        );
    }

    /// Compact and wide slots are the same single string.
    #[tokio::test]
    async fn test_both_layout_slots_share_one_encoding() {
        let offer = local_offer(Some(OfferAmount::Any));
        let presentation = present(&offer, &EchoQr, &ctx()).await.unwrap();
        assert_eq!(presentation.encoded_compact(), "lno1unsigned");
        assert_eq!(
            presentation.encoded_compact(),
            presentation.encoded_wide()
        );
    }

    #[tokio::test]
    async fn test_qr_is_generated_from_unsigned_encoding_only() {
        let offer = local_offer(None);
        let presentation = present(&offer, &EchoQr, &ctx()).await.unwrap();
        assert!(!presentation.qr.as_str().contains("lno1signed"));
        assert!(presentation.qr.as_str().contains("lno1unsigned"));
    }

    #[tokio::test]
    async fn test_expert_dump_never_contains_signed_encoding() {
        let offer = local_offer(Some(OfferAmount::Fixed(Msat::from_msat(42_000))));
        let context = ctx().with_expert(true);
        let presentation = present(&offer, &EchoQr, &context).await.unwrap();

        let dump = presentation.expert_dump.expect("expert mode appends a dump");
        let text = dump.to_string();
        assert!(!text.contains("lno1signed"));
        assert!(text.contains("lno1unsigned"));
        assert_eq!(dump["offer_id"], "offer123");
    }

    #[tokio::test]
    async fn test_no_dump_without_expert_mode() {
        let offer = local_offer(Some(OfferAmount::Any));
        let presentation = present(&offer, &EchoQr, &ctx()).await.unwrap();
        assert!(presentation.expert_dump.is_none());
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        let offer = local_offer(Some(OfferAmount::Any));
        let err = present(&offer, &FailingQr, &ctx()).await.unwrap_err();
        assert!(matches!(err, PresentError::Qr(_)));
    }
}
