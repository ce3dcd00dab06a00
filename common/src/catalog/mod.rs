//! Compile-time content catalogs.
//!
//! Every record here is authored in source, immutable, and used purely for
//! rendering. Nothing in this module has a lifecycle: the arrays are baked
//! into the binary and never mutated or persisted.

pub mod blog;
pub mod scholarship;
pub mod university;
