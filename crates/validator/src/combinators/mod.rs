//! Combinators for composing validators
//!
//! - [`Composite`] — ordered, fail-fast sequence of boxed validators
//! - [`And`] — statically-dispatched pair
//! - [`MapErr`] — converts the failure reason

pub mod and;
pub mod composite;
pub mod map_err;

pub use and::{And, and};
pub use composite::{BoxedValidator, Composite, CompositeBuilder};
pub use map_err::MapErr;
