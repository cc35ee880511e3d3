//! Parameters for curves without a pairing and for RSA

pub mod ecc;
pub mod rsa;
