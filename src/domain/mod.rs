//! Domain layer: the payment and tag data model, and the gateway port.

pub mod payment;
pub mod ports;
pub mod tag;
