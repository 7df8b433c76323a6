//! `shoefront-core`: catalog domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no templates).

pub mod clock;
pub mod error;
pub mod money;
pub mod slug;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use money::MinorUnits;
pub use slug::Slug;
pub use value_object::ValueObject;
