//! Barreto-Lynn-Scott curves of embedding degree 12, 24 and 48

use super::pairing_curve;
use crate::types::{
    CurveSpec,
    PairingFamily::{Bls12, Bls24, Bls48},
    SignOfX::*,
    TwistType::*,
};

pub const BLS12383: CurveSpec =
    pairing_curve("BLS12383", 58, 383, (1, 1), 0, Bls12, MType, PositiveX, 68, 65, 128);

pub const BLS12381: CurveSpec =
    pairing_curve("BLS12381", 58, 381, (-3, -1), 0, Bls12, MType, NegativeX, 69, 65, 128);

/// See <https://eprint.iacr.org/2017/334.pdf>
pub const BLS12461: CurveSpec =
    pairing_curve("BLS12461", 60, 461, (1, 4), 0, Bls12, MType, NegativeX, 79, 78, 128);

pub const BLS24479: CurveSpec =
    pairing_curve("BLS24479", 56, 479, (1, 4), 0, Bls24, MType, PositiveX, 52, 49, 192);

pub const BLS48556: CurveSpec =
    pairing_curve("BLS48556", 58, 556, (-1, 2), 0, Bls48, MType, PositiveX, 35, 32, 256);

/// Uses the positive tower (descriptor 10)
pub const BLS48581: CurveSpec =
    pairing_curve("BLS48581", 60, 581, (2, 2), 10, Bls48, DType, NegativeX, 36, 33, 256);

pub const BLS48286: CurveSpec =
    pairing_curve("BLS48286", 60, 286, (1, 1), 0, Bls48, MType, PositiveX, 20, 17, 128);
