use super::validation;
use crate::domain::payment::{FormData, PaymentResult};
use crate::domain::ports::{GatewayBox, PaymentGateway};
use crate::error::{CommerceError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Explicit registry of payment gateways, keyed by gateway name.
///
/// Populated once at process-configuration time; resolution is a plain map
/// lookup, no dynamic class resolution.
#[derive(Default)]
pub struct GatewayRegistry {
    gateways: HashMap<&'static str, GatewayBox>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a gateway under its own `name()`. A later registration
    /// with the same name replaces the earlier one.
    pub fn register(&mut self, gateway: GatewayBox) {
        debug!(gateway = gateway.name(), "registering payment gateway");
        self.gateways.insert(gateway.name(), gateway);
    }

    /// Resolves a gateway by name.
    pub fn get(&self, name: &str) -> Result<&dyn PaymentGateway> {
        self.gateways
            .get(name)
            .map(|gateway| gateway.as_ref())
            .ok_or_else(|| CommerceError::UnknownGateway(name.to_string()))
    }

    /// Registered gateway names, in no particular order.
    pub fn names(&self) -> Vec<&'static str> {
        self.gateways.values().map(|g| g.name()).collect()
    }

    /// Validates `form` against the named gateway's rules, then completes
    /// the purchase through it.
    pub async fn complete_purchase(&self, name: &str, form: &FormData) -> Result<PaymentResult> {
        let gateway = self.get(name)?;
        validation::validate(form, &gateway.rules())?;

        debug!(gateway = name, "completing purchase");
        gateway.complete_purchase(form).await
    }
}
