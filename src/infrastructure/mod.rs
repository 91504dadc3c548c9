//! Concrete gateway implementations.

pub mod dummy;
