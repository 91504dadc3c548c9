use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Flat string-keyed form data submitted by a checkout form.
///
/// Field keys follow the checkout wire format: `cardholder`, `cardNumber`,
/// `expiryMonth`, `expiryYear`, `cvc`.
pub type FormData = HashMap<String, String>;

/// Provider-specific reference data attached to a refund request.
pub type GatewayData = HashMap<String, serde_json::Value>;

/// Outcome of a gateway's purchase-completion step.
///
/// `card_number` is echoed raw by the dummy gateway only; production
/// gateways must not retain the PAN.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentResult {
    pub is_paid: bool,
    pub cardholder: String,
    #[serde(rename = "cardNumber")]
    pub card_number: String,
    #[serde(rename = "expiryMonth")]
    pub expiry_month: String,
    #[serde(rename = "expiryYear")]
    pub expiry_year: String,
    pub transaction_id: String,
}

/// A single field constraint declared by a gateway.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rule {
    /// Field must be present and non-empty.
    Required,
    /// Field must be a string value. Form data is already string-typed, so
    /// this is satisfied by presence; it exists so `required|string` rule
    /// expressions keep both constraints distinct.
    Str,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Required => write!(f, "required"),
            Rule::Str => write!(f, "string"),
        }
    }
}

/// Field name -> constraints, as declared by a gateway's `rules()`.
///
/// Ordered map so repeated calls compare equal and failures report fields
/// deterministically.
pub type ValidationRules = BTreeMap<String, Vec<Rule>>;

/// Opaque view descriptor returned by a gateway's `payment_form()`.
///
/// An external rendering engine resolves `template` into markup with
/// `context` in scope; this core never renders.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentForm {
    pub template: String,
    pub context: BTreeMap<String, String>,
}

impl PaymentForm {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            context: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_result_serialization_keys() {
        let result = PaymentResult {
            is_paid: true,
            cardholder: "Joe Bloggs".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_month: "01".to_string(),
            expiry_year: "2030".to_string(),
            transaction_id: "txn_1".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_paid"], true);
        assert_eq!(json["cardNumber"], "4242 4242 4242 4242");
        assert_eq!(json["transaction_id"], "txn_1");
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::Required.to_string(), "required");
        assert_eq!(Rule::Str.to_string(), "string");
    }

    #[test]
    fn test_payment_form_builder() {
        let form = PaymentForm::new("commerce::gateways.dummy").with("gateway", "Dummy");

        assert_eq!(form.template, "commerce::gateways.dummy");
        assert_eq!(form.context.get("gateway").map(String::as_str), Some("Dummy"));
    }
}
