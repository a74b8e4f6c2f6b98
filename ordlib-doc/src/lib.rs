//! Ordered containers and the pieces they are built from.
//!
//! - [`ops`]: comparators ([`ops::Compare`]).
//! - [`ds`]: data structures ([`ds::RbTree`]).
//! - [`naive`]: straightforward reference implementations used for testing.

#[doc(inline)]
pub use ds;
#[doc(inline)]
pub use naive;
#[doc(inline)]
pub use ops;
