use super::payment::{FormData, GatewayData, PaymentForm, PaymentResult, ValidationRules};
use crate::error::Result;
use async_trait::async_trait;

/// Contract every payment provider adapter implements, so the checkout flow
/// can invoke any gateway interchangeably.
#[async_trait]
pub trait PaymentGateway: Send + Sync + std::fmt::Debug {
    /// Stable, human-readable gateway identifier.
    fn name(&self) -> &'static str;

    /// Completes a purchase from checkout form data.
    ///
    /// Callers are expected to have validated `form` against `rules()`
    /// first; this method still fails with
    /// [`CommerceError::InvalidPaymentInput`](crate::error::CommerceError)
    /// when the card data itself is rejected. A fresh `transaction_id` is
    /// assigned on every attempt, paid or declined.
    async fn complete_purchase(&self, form: &FormData) -> Result<PaymentResult>;

    /// Declares the fields and constraints the form-validation layer must
    /// enforce before `complete_purchase` is invoked. Pure: identical on
    /// every call, independent of prior purchases.
    fn rules(&self) -> ValidationRules;

    /// Returns the gateway's checkout form as an opaque view descriptor
    /// for an external rendering engine.
    fn payment_form(&self) -> PaymentForm;

    /// Refunds a prior purchase using provider-specific reference data.
    ///
    /// Idempotency and partial-refund semantics are gateway-specific. Real
    /// gateways fail with
    /// [`CommerceError::RefundFailure`](crate::error::CommerceError) when a
    /// refund is not permitted.
    async fn refund(&self, data: &GatewayData) -> Result<bool>;
}

/// Boxed gateway trait object, as registered at process-configuration time.
pub type GatewayBox = Box<dyn PaymentGateway>;

/// Factory producing gateway instances, for wiring code that defers
/// construction.
pub type GatewayFactory = Box<dyn Fn() -> GatewayBox + Send + Sync>;
