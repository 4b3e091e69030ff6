//! Built-in question catalogs.

mod marketing;

pub use marketing::marketing;
