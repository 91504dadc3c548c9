//! Application layer: gateway registration, form validation, and tag
//! dispatch built on the domain ports.

pub mod gateways;
pub mod tags;
pub mod validation;
