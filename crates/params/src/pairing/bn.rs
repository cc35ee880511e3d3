//! Barreto-Naehrig curves (embedding degree 12)

use super::pairing_curve;
use crate::types::{CurveSpec, PairingFamily::Bn, SignOfX::*, TwistType::*};

pub const BN254: CurveSpec =
    pairing_curve("BN254", 56, 254, (-1, -1), 0, Bn, DType, NegativeX, 71, 66, 128);

pub const BN254CX: CurveSpec =
    pairing_curve("BN254CX", 56, 254, (-1, -1), 0, Bn, DType, NegativeX, 76, 66, 128);

pub const FP256BN: CurveSpec =
    pairing_curve("FP256BN", 56, 256, (1, 1), 0, Bn, MType, NegativeX, 83, 66, 128);

pub const FP512BN: CurveSpec =
    pairing_curve("FP512BN", 60, 512, (1, 1), 0, Bn, MType, PositiveX, 172, 130, 128);

pub const BN462: CurveSpec =
    pairing_curve("BN462", 60, 462, (1, 1), 1, Bn, DType, PositiveX, 125, 118, 128);
