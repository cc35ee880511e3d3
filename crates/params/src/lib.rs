//! Constant parameter sets for coregen
//!
//! This crate holds the curve and RSA parameter tuples the generator
//! instantiates templates from, and the selector-indexed catalog over them.
//! Everything here is immutable data.

pub mod catalog;
pub mod pairing;
pub mod traditional;
pub mod types;

pub use catalog::{lookup, CatalogEntry, CATALOG, CATALOG_SIZE, END_OF_INPUT};
pub use types::{
    CurveSpec, CurveType, HashToCurveZ, ModulusType, PairingFamily, RsaSpec, Scheme, SchemeKind,
    SignOfX, TwistType,
};
