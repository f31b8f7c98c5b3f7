//! Record model consumed by the scanner.
//!
//! Records are produced by an external plugin loader and are read-only here.

mod data;
mod key;
mod kind;
mod property;

pub use data::*;
pub use key::*;
pub use kind::*;
pub use property::*;
