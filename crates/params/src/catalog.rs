//! Selector-indexed catalog of every generatable scheme
//!
//! Selectors are the numbers a user types at the prompt: 1-25 are plain
//! curves, 26-37 pairing-friendly curves and 38-40 RSA moduli. Selector 0 is
//! reserved as the end-of-input sentinel and never names a scheme.

use crate::pairing::{bls, bn};
use crate::traditional::{ecc, rsa};
use crate::types::Scheme;
use coregen_api::{Error, Result};

/// Number of schemes in the catalog
pub const CATALOG_SIZE: u32 = 40;

/// Selector that ends a selection session
pub const END_OF_INPUT: u32 = 0;

/// A scheme together with the selector and menu label it is offered under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub label: &'static str,
    pub scheme: Scheme,
}

const fn entry(id: u32, label: &'static str, scheme: Scheme) -> CatalogEntry {
    CatalogEntry { id, label, scheme }
}

/// All schemes, ordered by selector
pub static CATALOG: [CatalogEntry; CATALOG_SIZE as usize] = [
    entry(1, "ED25519", Scheme::Curve(&ecc::ED25519)),
    entry(2, "C25519", Scheme::Curve(&ecc::C25519)),
    entry(3, "NIST256", Scheme::Curve(&ecc::NIST256)),
    entry(4, "BRAINPOOL", Scheme::Curve(&ecc::BRAINPOOL)),
    entry(5, "ANSSI", Scheme::Curve(&ecc::ANSSI)),
    entry(6, "HIFIVE", Scheme::Curve(&ecc::HIFIVE)),
    entry(7, "GOLDILOCKS", Scheme::Curve(&ecc::GOLDILOCKS)),
    entry(8, "NIST384", Scheme::Curve(&ecc::NIST384)),
    entry(9, "C41417", Scheme::Curve(&ecc::C41417)),
    entry(10, "NIST521", Scheme::Curve(&ecc::NIST521)),
    entry(11, "NUMS256W", Scheme::Curve(&ecc::NUMS256W)),
    entry(12, "NUMS256E", Scheme::Curve(&ecc::NUMS256E)),
    entry(13, "NUMS384W", Scheme::Curve(&ecc::NUMS384W)),
    entry(14, "NUMS384E", Scheme::Curve(&ecc::NUMS384E)),
    entry(15, "NUMS512W", Scheme::Curve(&ecc::NUMS512W)),
    entry(16, "NUMS512E", Scheme::Curve(&ecc::NUMS512E)),
    entry(17, "SECP256K1", Scheme::Curve(&ecc::SECP256K1)),
    entry(18, "SM2", Scheme::Curve(&ecc::SM2)),
    entry(19, "C13318", Scheme::Curve(&ecc::C13318)),
    entry(20, "JUBJUB", Scheme::Curve(&ecc::JUBJUB)),
    entry(21, "X448", Scheme::Curve(&ecc::X448)),
    entry(22, "SECP160R1", Scheme::Curve(&ecc::SECP160R1)),
    entry(23, "C1174", Scheme::Curve(&ecc::C1174)),
    entry(24, "C1665", Scheme::Curve(&ecc::C1665)),
    entry(25, "Million Dollar Curve", Scheme::Curve(&ecc::MDC)),
    entry(26, "BN254", Scheme::Curve(&bn::BN254)),
    entry(27, "BN254CX", Scheme::Curve(&bn::BN254CX)),
    entry(28, "BLS12383", Scheme::Curve(&bls::BLS12383)),
    entry(29, "BLS12381", Scheme::Curve(&bls::BLS12381)),
    entry(30, "FP256BN", Scheme::Curve(&bn::FP256BN)),
    entry(31, "FP512BN", Scheme::Curve(&bn::FP512BN)),
    entry(32, "BLS12461", Scheme::Curve(&bls::BLS12461)),
    entry(33, "BN462", Scheme::Curve(&bn::BN462)),
    entry(34, "BLS24479", Scheme::Curve(&bls::BLS24479)),
    entry(35, "BLS48556", Scheme::Curve(&bls::BLS48556)),
    entry(36, "BLS48581", Scheme::Curve(&bls::BLS48581)),
    entry(37, "BLS48286", Scheme::Curve(&bls::BLS48286)),
    entry(38, "RSA2048", Scheme::Rsa(&rsa::RSA2048)),
    entry(39, "RSA3072", Scheme::Rsa(&rsa::RSA3072)),
    entry(40, "RSA4096", Scheme::Rsa(&rsa::RSA4096)),
];

/// Look up the scheme offered under `id`
pub fn lookup(id: u32) -> Result<&'static CatalogEntry> {
    id.checked_sub(1)
        .and_then(|index| CATALOG.get(index as usize))
        .ok_or_else(|| Error::UnknownScheme {
            id,
            max: CATALOG_SIZE,
        })
}

/// Iterate over the catalog in selector order
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter()
}

/// Find a scheme by its name, ignoring ASCII case
pub fn find_by_name(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.scheme.name().eq_ignore_ascii_case(name))
}
