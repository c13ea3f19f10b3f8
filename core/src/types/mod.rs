//! Static type descriptors.
//!
//! A [`Type`] is either a primitive, a host structured type ([`StructType`])
//! or a host callable ([`Signature`]).

mod signature;
mod structured;
mod types;

#[cfg(test)]
mod types_test;

pub use signature::{Returns, Signature};
pub use structured::{Member, StructType};
pub use types::Type;
