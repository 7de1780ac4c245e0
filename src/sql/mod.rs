//! Safe listing SQL: identifiers from allow-lists only, values as parameters.

mod builder;
pub use builder::*;
