//! # Form Specification Builder
//!
//! Turns a classified offer into the ordered, declarative field list the
//! rendering layer materializes into actual controls.
//!
//! ## Field Order (behavioral contract)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  build_form(offer, variant, ctx)                                        │
//! │                                                                         │
//! │   1. Heading            "Send payment" / "Receive payment"              │
//! │   2. Vendor line        iff offer.vendor is set                         │
//! │   3. Description line   iff the injected policy says so                 │
//! │   4. Amount section     exactly one of display / fiat / input           │
//! │   5. Quantity input     iff the offer has a quantity range              │
//! │   6. Note input         pay forms only                                  │
//! │   7. Confirm prompt     variant-dependent                               │
//! │   8. Submit             variant-dependent label                         │
//! │   9. Cancel             always                                          │
//! │  10. Structural dump    expert mode only                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The FieldSpec is a plain value: built fresh per render call, never
//! mutated afterwards, discarded once the renderer consumed it. Formatting
//! and visibility policy are injected collaborators so the renderer stays
//! swappable.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use ts_rs::TS;

use crate::amount::Msat;
use crate::classify::OfferVariant;
use crate::error::{CoreError, CoreResult};
use crate::offer::{FiatQuote, Offer};
use crate::{FIELD_CUSTOM_AMOUNT, FIELD_PAYER_NOTE, FIELD_QUANTITY};

// =============================================================================
// Collaborator Seams
// =============================================================================

/// Formats msat amounts in the user's configured display denomination.
///
/// Owned by the surrounding application; this core never converts units
/// itself.
pub trait UnitFormatter {
    fn format(&self, amount: Msat) -> String;
}

/// Formats a fiat quote for display. Rate lookup, if any, happens behind
/// this seam.
pub trait FiatFormatter {
    fn format(&self, quote: &FiatQuote) -> String;
}

/// Decides whether the offer description adds information beyond the
/// fields already shown (vendor etc.). When it is redundant, the form
/// suppresses it. No further logic is inferred here.
pub trait DescriptionPolicy {
    fn show_description(&self, offer: &Offer) -> bool;
}

// =============================================================================
// Form Context
// =============================================================================

/// Read-only presentation configuration for one render call.
///
/// Supplied fresh per call by the surrounding application; nothing in this
/// core holds onto it across calls.
pub struct FormContext<'a> {
    /// Unit formatter for msat amounts.
    pub unit: &'a dyn UnitFormatter,
    /// Fiat formatter for quoted amounts.
    pub fiat: &'a dyn FiatFormatter,
    /// Description visibility policy.
    pub description: &'a dyn DescriptionPolicy,
    /// Append the structural diagnostic dump.
    pub expert: bool,
    /// Currently chosen quantity, prefilling the quantity input and
    /// feeding the submit-label total. Ignored when the offer has no
    /// quantity range.
    pub quantity: u64,
}

impl<'a> FormContext<'a> {
    /// Creates a context with expert mode off and quantity 1.
    pub fn new(
        unit: &'a dyn UnitFormatter,
        fiat: &'a dyn FiatFormatter,
        description: &'a dyn DescriptionPolicy,
    ) -> Self {
        FormContext {
            unit,
            fiat,
            description,
            expert: false,
            quantity: 1,
        }
    }

    /// Enables or disables the expert-mode dump.
    pub fn with_expert(mut self, expert: bool) -> Self {
        self.expert = expert;
        self
    }

    /// Sets the currently chosen quantity.
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = quantity;
        self
    }
}

// =============================================================================
// Field Spec
// =============================================================================

/// One declarative form field or display element.
///
/// The rendering layer maps each variant onto an actual control; this enum
/// is the entire contract between the two layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormField {
    /// Top-level heading distinguishing the send and receive flows.
    Heading { text: String },

    /// Static labelled display line (vendor, description).
    TextLine { label: String, value: String },

    /// Formatted crypto amount display with the alternate-unit toggle.
    AmountDisplay {
        label: String,
        formatted: String,
        alt_unit_toggle: bool,
    },

    /// Formatted fiat display plus the informative-only disclaimer.
    FiatDisplay {
        label: String,
        formatted: String,
        disclaimer: String,
    },

    /// Editable msat amount input; empty until the payer fills it.
    AmountInput {
        name: String,
        label: String,
        required: bool,
    },

    /// Bounded integer quantity input, step 1.
    QuantityInput {
        name: String,
        label: String,
        min: u64,
        max: u64,
        step: u64,
        value: u64,
    },

    /// Optional single-line note attached to the outgoing payment.
    TextInput {
        name: String,
        label: String,
        placeholder: String,
        help: String,
    },

    /// Confirmation prompt shown above the submit control.
    ConfirmPrompt { text: String },

    /// Submit control with its variant-dependent label.
    Submit { label: String },

    /// Cancel control; navigates back without side effects.
    Cancel { label: String },

    /// Expert-mode structural dump of the offer, signing material redacted.
    StructuralDump {
        #[ts(type = "unknown")]
        value: Value,
    },
}

/// The ordered field list for one offer form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct FieldSpec(Vec<FormField>);

impl FieldSpec {
    /// The fields in render order.
    #[inline]
    pub fn fields(&self) -> &[FormField] {
        &self.0
    }

    /// Consumes the spec, yielding the fields in render order.
    pub fn into_fields(self) -> Vec<FormField> {
        self.0
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds the ordered FieldSpec for a remote offer.
///
/// `variant` must be the classification of `offer`; passing a mismatched
/// pair (e.g. a fiat variant for an offer with no quote) is a contract
/// error.
pub fn build_form(
    offer: &Offer,
    variant: OfferVariant,
    ctx: &FormContext<'_>,
) -> CoreResult<FieldSpec> {
    let receive = variant.is_receive();
    let mut fields = Vec::new();

    fields.push(FormField::Heading {
        text: if receive {
            "Receive payment".to_string()
        } else {
            "Send payment".to_string()
        },
    });

    if let Some(vendor) = &offer.vendor {
        fields.push(FormField::TextLine {
            label: "Vendor".to_string(),
            value: vendor.clone(),
        });
    }

    if ctx.description.show_description(offer) {
        if let Some(description) = &offer.description {
            fields.push(FormField::TextLine {
                label: "Description".to_string(),
                value: description.clone(),
            });
        }
    }

    fields.push(amount_section(offer, variant, ctx)?);

    if let Some(min) = offer.quantity_min {
        fields.push(FormField::QuantityInput {
            name: FIELD_QUANTITY.to_string(),
            label: "Quantity".to_string(),
            min,
            max: offer.quantity_max.unwrap_or(min),
            step: 1,
            value: ctx.quantity,
        });
    }

    // Only outgoing payments carry a payer note.
    if !receive {
        fields.push(FormField::TextInput {
            name: FIELD_PAYER_NOTE.to_string(),
            label: "Attach note".to_string(),
            placeholder: "(optional)".to_string(),
            help: "A note to send to the payee along with the payment.".to_string(),
        });
    }

    if let Some(prompt) = confirm_prompt(variant) {
        fields.push(FormField::ConfirmPrompt { text: prompt });
    }

    fields.push(FormField::Submit {
        label: submit_label(offer, variant, ctx)?,
    });

    fields.push(FormField::Cancel {
        label: "Cancel".to_string(),
    });

    if ctx.expert {
        fields.push(FormField::StructuralDump {
            value: offer.diagnostic_dump(),
        });
    }

    debug!(
        variant = ?variant,
        expert = ctx.expert,
        fields = fields.len(),
        "built offer form"
    );
    Ok(FieldSpec(fields))
}

/// The single amount section of the form: a display, a fiat display with
/// disclaimer, or an editable input, matching the variant.
fn amount_section(
    offer: &Offer,
    variant: OfferVariant,
    ctx: &FormContext<'_>,
) -> CoreResult<FormField> {
    // "Price per unit" whenever a quantity range makes the amount per-unit.
    let per_unit = offer.has_quantity();

    Ok(match variant {
        OfferVariant::PayFixedCrypto { per_unit: amount }
        | OfferVariant::ReceiveFixed { amount } => FormField::AmountDisplay {
            label: if per_unit {
                "Price per unit".to_string()
            } else {
                "Amount".to_string()
            },
            formatted: ctx.unit.format(amount),
            alt_unit_toggle: true,
        },

        OfferVariant::PayFixedFiat => {
            let quote = offer
                .fiat
                .as_ref()
                .ok_or(CoreError::UnclassifiableOffer {
                    reason: "fiat variant without a fiat quote",
                })?;
            FormField::FiatDisplay {
                label: if per_unit {
                    "Price per unit".to_string()
                } else {
                    "Quoted amount".to_string()
                },
                formatted: ctx.fiat.format(quote),
                disclaimer: "Informative only. The final BTC amount will be displayed \
                             for confirmation on the next screen."
                    .to_string(),
            }
        }

        OfferVariant::PayCustomAmount => FormField::AmountInput {
            name: FIELD_CUSTOM_AMOUNT.to_string(),
            label: "Enter amount to pay".to_string(),
            required: true,
        },
    })
}

/// Confirmation wording per variant. Fiat-quoted pay forms get none; the
/// real confirmation happens on the next screen.
fn confirm_prompt(variant: OfferVariant) -> Option<String> {
    match variant {
        OfferVariant::PayFixedCrypto { .. } | OfferVariant::PayCustomAmount => {
            Some("Do you confirm making this payment?".to_string())
        }
        OfferVariant::PayFixedFiat => None,
        OfferVariant::ReceiveFixed { .. } => Some("Do you accept this payment?".to_string()),
    }
}

/// Submit label per variant. The fixed-crypto label carries the exact total
/// for the currently chosen quantity.
fn submit_label(
    offer: &Offer,
    variant: OfferVariant,
    ctx: &FormContext<'_>,
) -> CoreResult<String> {
    Ok(match variant {
        OfferVariant::PayFixedCrypto { per_unit } => {
            // Without a quantity range the prefill is irrelevant; the
            // quantity is exactly 1.
            let quantity = if offer.has_quantity() { ctx.quantity } else { 1 };
            format!("Pay {}", ctx.unit.format(per_unit.total(quantity)?))
        }
        OfferVariant::PayFixedFiat => "Continue".to_string(),
        OfferVariant::PayCustomAmount => "Send Payment".to_string(),
        OfferVariant::ReceiveFixed { amount } => {
            format!("Receive {}", ctx.unit.format(amount))
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::offer::OfferAmount;

    /// Plain msat formatter, standing in for the wallet's unit formatter.
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

    struct NeverShow;
    impl DescriptionPolicy for NeverShow {
        fn show_description(&self, _offer: &Offer) -> bool {
            false
        }
    }

    fn ctx<'a>(policy: &'a dyn DescriptionPolicy) -> FormContext<'a> {
        FormContext {
            unit: &RawMsat,
            fiat: &PlainFiat,
            description: policy,
            expert: false,
            quantity: 1,
        }
    }

    fn pay_offer() -> Offer {
        Offer {
            send_invoice: false,
            vendor: Some("Acme".to_string()),
            description: Some("widgets".to_string()),
            amount: None,
            fiat: None,
            quantity_min: None,
            quantity_max: None,
            node_id: None,
            offer_id: None,
            encoded: "lno1unsigned".to_string(),
            encoded_signed: Some("lno1signed".to_string()),
        }
    }

    fn build(offer: &Offer, ctx: &FormContext<'_>) -> FieldSpec {
        let variant = classify(offer).unwrap();
        build_form(offer, variant, ctx).unwrap()
    }

    fn submit_label_of(spec: &FieldSpec) -> &str {
        spec.fields()
            .iter()
            .find_map(|f| match f {
                FormField::Submit { label } => Some(label.as_str()),
                _ => None,
            })
            .expect("form has a submit control")
    }

    #[test]
    fn test_fixed_crypto_without_quantity() {
        let mut offer = pay_offer();
        offer.amount = Some(OfferAmount::Fixed(Msat::from_msat(50_000)));

        let spec = build(&offer, &ctx(&AlwaysShow));

        assert!(!spec
            .fields()
            .iter()
            .any(|f| matches!(f, FormField::QuantityInput { .. })));
        assert_eq!(submit_label_of(&spec), "Pay 50000 msat");
    }

    #[test]
    fn test_field_order_fixed_crypto() {
        let mut offer = pay_offer();
        offer.amount = Some(OfferAmount::Fixed(Msat::from_msat(50_000)));

        let spec = build(&offer, &ctx(&AlwaysShow));
        let fields = spec.fields();

        assert!(matches!(&fields[0], FormField::Heading { text } if text == "Send payment"));
        assert!(matches!(&fields[1], FormField::TextLine { label, value }
            if label == "Vendor" && value == "Acme"));
        assert!(matches!(&fields[2], FormField::TextLine { label, value }
            if label == "Description" && value == "widgets"));
        assert!(matches!(&fields[3], FormField::AmountDisplay { label, formatted, alt_unit_toggle }
            if label == "Amount" && formatted == "50000 msat" && *alt_unit_toggle));
        assert!(matches!(&fields[4], FormField::TextInput { name, .. }
            if name == "payer_note"));
        assert!(matches!(&fields[5], FormField::ConfirmPrompt { .. }));
        assert!(matches!(&fields[6], FormField::Submit { .. }));
        assert!(matches!(&fields[7], FormField::Cancel { .. }));
        assert_eq!(fields.len(), 8);
    }

    #[test]
    fn test_custom_amount_form() {
        let offer = pay_offer();
        let spec = build(&offer, &ctx(&AlwaysShow));

        let input = spec
            .fields()
            .iter()
            .find_map(|f| match f {
                FormField::AmountInput { name, required, .. } => Some((name.clone(), *required)),
                _ => None,
            })
            .expect("custom form has an amount input");
        assert_eq!(input, ("custom_msat".to_string(), true));
        assert_eq!(submit_label_of(&spec), "Send Payment");
    }

    #[test]
    fn test_fiat_form_has_disclaimer_and_no_confirm_prompt() {
        let mut offer = pay_offer();
        offer.fiat = Some(FiatQuote {
            currency: "USD".to_string(),
            amount: "1.50".to_string(),
        });

        let spec = build(&offer, &ctx(&AlwaysShow));

        let disclaimer = spec
            .fields()
            .iter()
            .find_map(|f| match f {
                FormField::FiatDisplay {
                    label,
                    formatted,
                    disclaimer,
                } => Some((label.clone(), formatted.clone(), disclaimer.clone())),
                _ => None,
            })
            .expect("fiat form has a fiat display");
        assert_eq!(disclaimer.0, "Quoted amount");
        assert_eq!(disclaimer.1, "1.50 USD");
        assert!(disclaimer.2.starts_with("Informative only."));

        assert!(!spec
            .fields()
            .iter()
            .any(|f| matches!(f, FormField::ConfirmPrompt { .. })));
        assert_eq!(submit_label_of(&spec), "Continue");
    }

    #[test]
    fn test_non_fiat_pay_form_has_confirm_prompt() {
        let spec = build(&pay_offer(), &ctx(&AlwaysShow));
        let prompt = spec
            .fields()
            .iter()
            .find_map(|f| match f {
                FormField::ConfirmPrompt { text } => Some(text.as_str()),
                _ => None,
            })
            .expect("non-fiat pay form has a confirmation prompt");
        assert_eq!(prompt, "Do you confirm making this payment?");
    }

    #[test]
    fn test_quantity_feeds_bounds_prefill_and_total() {
        let mut offer = pay_offer();
        offer.amount = Some(OfferAmount::Fixed(Msat::from_msat(1000)));
        offer.quantity_min = Some(1);
        offer.quantity_max = Some(5);

        let context = ctx(&AlwaysShow).with_quantity(3);
        let spec = build(&offer, &context);

        let quantity = spec
            .fields()
            .iter()
            .find_map(|f| match f {
                FormField::QuantityInput {
                    name,
                    min,
                    max,
                    step,
                    value,
                    ..
                } => Some((name.clone(), *min, *max, *step, *value)),
                _ => None,
            })
            .expect("quantity-ranged offer has a quantity input");
        assert_eq!(quantity, ("quantity".to_string(), 1, 5, 1, 3));

        // Total = 1000 * 3, labeled per unit.
        assert_eq!(submit_label_of(&spec), "Pay 3000 msat");
        assert!(spec.fields().iter().any(|f| matches!(
            f,
            FormField::AmountDisplay { label, .. } if label == "Price per unit"
        )));
    }

    #[test]
    fn test_receive_form_never_has_note_field() {
        let mut offer = pay_offer();
        offer.send_invoice = true;
        offer.amount = Some(OfferAmount::Fixed(Msat::from_msat(100_000)));

        let spec = build(&offer, &ctx(&AlwaysShow));

        assert!(matches!(&spec.fields()[0], FormField::Heading { text }
            if text == "Receive payment"));
        assert!(!spec
            .fields()
            .iter()
            .any(|f| matches!(f, FormField::TextInput { .. })));
        assert_eq!(submit_label_of(&spec), "Receive 100000 msat");
    }

    #[test]
    fn test_description_policy_suppresses_line() {
        let spec = build(&pay_offer(), &ctx(&NeverShow));
        assert!(!spec.fields().iter().any(|f| matches!(
            f,
            FormField::TextLine { label, .. } if label == "Description"
        )));
        // Vendor is unaffected by the description policy.
        assert!(spec.fields().iter().any(|f| matches!(
            f,
            FormField::TextLine { label, .. } if label == "Vendor"
        )));
    }

    #[test]
    fn test_expert_dump_appended_and_redacted() {
        let offer = pay_offer();
        let context = ctx(&AlwaysShow).with_expert(true);
        let spec = build(&offer, &context);

        let dump = match spec.fields().last() {
            Some(FormField::StructuralDump { value }) => value.clone(),
            other => panic!("expected trailing dump, got {other:?}"),
        };
        let text = dump.to_string();
        assert!(!text.contains("lno1signed"));
        assert!(text.contains("lno1unsigned"));
        assert_eq!(dump["node_id"], Value::Null);
    }

    #[test]
    fn test_no_dump_without_expert_mode() {
        let spec = build(&pay_offer(), &ctx(&AlwaysShow));
        assert!(!spec
            .fields()
            .iter()
            .any(|f| matches!(f, FormField::StructuralDump { .. })));
    }

    #[test]
    fn test_cancel_always_present() {
        for send_invoice in [false, true] {
            let mut offer = pay_offer();
            offer.send_invoice = send_invoice;
            if send_invoice {
                offer.amount = Some(OfferAmount::Fixed(Msat::from_msat(1)));
            }
            let spec = build(&offer, &ctx(&AlwaysShow));
            assert!(spec
                .fields()
                .iter()
                .any(|f| matches!(f, FormField::Cancel { .. })));
        }
    }

    #[test]
    fn test_serializes_with_type_tags() {
        let spec = build(&pay_offer(), &ctx(&AlwaysShow));
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json[0]["type"], "heading");
        assert_eq!(json[0]["text"], "Send payment");
    }
}
