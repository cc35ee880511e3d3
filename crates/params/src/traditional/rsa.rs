//! Parameters for RSA moduli
//!
//! The modulus is a power-of-two multiple of the underlying big integer.
//! Several splits reach the same modulus size; these are the faster ones.

use crate::types::RsaSpec;

/// RSA with 2048-bit modulus, built from 1024-bit bigs
pub const RSA2048: RsaSpec = RsaSpec {
    name: "RSA2048",
    big_bytes: 128,
    base_bits: 58,
    multiplier: 2,
};

/// RSA with 3072-bit modulus
pub const RSA3072: RsaSpec = RsaSpec {
    name: "RSA3072",
    big_bytes: 48,
    base_bits: 56,
    multiplier: 8,
};

/// RSA with 4096-bit modulus
pub const RSA4096: RsaSpec = RsaSpec {
    name: "RSA4096",
    big_bytes: 64,
    base_bits: 60,
    multiplier: 8,
};
