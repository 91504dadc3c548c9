use crate::domain::payment::{FormData, GatewayData, PaymentForm, PaymentResult, Rule, ValidationRules};
use crate::domain::ports::PaymentGateway;
use crate::error::{CommerceError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::debug;

/// Card number that always completes as paid.
pub const SUCCESS_CARD: &str = "4242 4242 4242 4242";

/// Card number that always completes as declined.
pub const DECLINE_CARD: &str = "1111 1111 1111 1111";

/// Reference gateway simulating card-based payment outcomes from two
/// sentinel card numbers. Performs no I/O; useful as a test double and as
/// the template for real provider adapters.
#[derive(Debug, Default)]
pub struct DummyGateway;

impl DummyGateway {
    pub fn new() -> Self {
        Self
    }

    fn field<'a>(form: &'a FormData, key: &str) -> Result<&'a str> {
        form.get(key)
            .map(String::as_str)
            .ok_or_else(|| CommerceError::InvalidPaymentInput(format!("missing {key} field")))
    }
}

#[async_trait]
impl PaymentGateway for DummyGateway {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    async fn complete_purchase(&self, form: &FormData) -> Result<PaymentResult> {
        let card_number = Self::field(form, "cardNumber")?;

        let is_paid = match card_number {
            SUCCESS_CARD => true,
            DECLINE_CARD => false,
            _ => {
                return Err(CommerceError::InvalidPaymentInput(
                    "the card provided is invalid".to_string(),
                ));
            }
        };

        // Fresh id on every attempt, paid or declined alike.
        let transaction_id = format!("dummy_txn_{}", uuid::Uuid::new_v4());
        debug!(%transaction_id, is_paid, "dummy gateway completed purchase");

        Ok(PaymentResult {
            is_paid,
            cardholder: Self::field(form, "cardholder")?.to_string(),
            card_number: card_number.to_string(),
            expiry_month: Self::field(form, "expiryMonth")?.to_string(),
            expiry_year: Self::field(form, "expiryYear")?.to_string(),
            transaction_id,
        })
    }

    fn rules(&self) -> ValidationRules {
        let mut rules = BTreeMap::new();
        rules.insert("cardholder".to_string(), vec![Rule::Required, Rule::Str]);
        rules.insert("cardNumber".to_string(), vec![Rule::Required, Rule::Str]);
        rules.insert("expiryMonth".to_string(), vec![Rule::Required]);
        rules.insert("expiryYear".to_string(), vec![Rule::Required]);
        rules.insert("cvc".to_string(), vec![Rule::Required]);
        rules
    }

    fn payment_form(&self) -> PaymentForm {
        PaymentForm::new("commerce::gateways.dummy").with("gateway", self.name())
    }

    async fn refund(&self, _data: &GatewayData) -> Result<bool> {
        Ok(true)
    }
}
