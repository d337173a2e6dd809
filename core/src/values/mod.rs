//! The dynamically-typed value domain.
//!
//! Every operand, literal, and result in the engine is a [`Value`]. Caller
//! data enters this domain either through the `From` impls (which normalize
//! all numeric widths to `f64`) or as an opaque [`HostObject`] reachable only
//! through accessor paths.

pub mod dynamic;
pub mod host;

pub use dynamic::{Value, ValueKind};
pub use host::HostObject;

#[cfg(test)]
mod dynamic_test;
