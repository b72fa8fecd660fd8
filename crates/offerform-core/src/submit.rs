//! # Submission Payload
//!
//! The value the rendering layer hands back to the payment executor when
//! the user submits an offer form. Field names match the input names in
//! the FieldSpec, so the renderer can populate this directly from its
//! form state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::amount::Msat;

/// Payload of a submitted pay-offer form.
///
/// Each field is present only when the form carried the matching input:
/// `quantity` for quantity-ranged offers, `payer_note` when the user typed
/// one, `custom_msat` for payer-chosen-amount offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentSubmission {
    /// Chosen quantity, within the offer's `[min, max]` bounds. Bound
    /// enforcement at input time is the renderer's concern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,

    /// Free-text note attached to the outgoing payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_note: Option<String>,

    /// Payer-chosen amount for custom-amount offers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_msat: Option<Msat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_serializes_to_empty_object() {
        let json = serde_json::to_string(&PaymentSubmission::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_populated_submission() {
        let submission = PaymentSubmission {
            quantity: Some(3),
            payer_note: Some("thanks!".to_string()),
            custom_msat: None,
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["payer_note"], "thanks!");
        assert!(json.get("custom_msat").is_none());
    }
}
