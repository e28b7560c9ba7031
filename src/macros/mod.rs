//! Polyfab declarative macros
//!
//! These macros remove the boilerplate from variant and factory definitions.

pub mod factory_macros;
pub mod variant_macros;
