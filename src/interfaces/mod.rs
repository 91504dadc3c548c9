//! Edge adapters translating external textual formats into domain values.

pub mod parse;
