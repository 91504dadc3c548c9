//! Commerce add-on core: payment gateway abstractions and templating-tag
//! dispatch.
//!
//! Two loosely related facilities:
//!
//! - a [`PaymentGateway`] contract so a checkout flow can invoke any payment
//!   provider interchangeably, with [`DummyGateway`] as the sentinel-driven
//!   reference implementation;
//! - a [`TagDispatcher`] routing `namespace:subtag[:method]` templating
//!   invocations to registered handler closures.
//!
//! The host templating engine, view rendering, and HTTP handling are
//! external collaborators; this crate only defines the contracts and the
//! request-scoped glue between them.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::gateways::GatewayRegistry;
pub use application::tags::{SubTag, TagDispatcher};
pub use domain::payment::{FormData, GatewayData, PaymentForm, PaymentResult, Rule, ValidationRules};
pub use domain::ports::{GatewayBox, GatewayFactory, PaymentGateway};
pub use domain::tag::{TagContext, TagInvocation};
pub use error::{CommerceError, Result};
pub use infrastructure::dummy::DummyGateway;
