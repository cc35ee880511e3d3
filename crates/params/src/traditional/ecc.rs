//! Parameters for elliptic curves without a pairing

use crate::types::{
    CurveSpec, CurveType, HashToCurveZ, ModulusType, PairingFamily, SignOfX, TwistType,
};

use CurveType::{Edwards, Montgomery, Weierstrass};
use ModulusType::{GeneralisedMersenne, NotSpecial, PseudoMersenne};

#[allow(clippy::too_many_arguments)]
const fn curve(
    name: &'static str,
    base_bits: u32,
    modulus_bits: u32,
    modulus_mod_8: u32,
    z: i32,
    modulus_type: ModulusType,
    qnr: u32,
    curve_type: CurveType,
    curve_a: i64,
    security: u32,
) -> CurveSpec {
    CurveSpec {
        name,
        base_bits,
        modulus_bits,
        modulus_mod_8,
        z: HashToCurveZ::Single(z),
        modulus_type,
        qnr,
        curve_type,
        curve_a,
        pairing: PairingFamily::Not,
        twist: TwistType::Not,
        sign_of_x: SignOfX::Not,
        g2_table: None,
        ate_bits: None,
        security,
    }
}

/// Edwards form of Curve25519
pub const ED25519: CurveSpec =
    curve("ED25519", 56, 255, 2, 1, PseudoMersenne, 0, Edwards, -1, 128);

/// Montgomery form of Curve25519
pub const C25519: CurveSpec =
    curve("C25519", 56, 255, 2, 1, PseudoMersenne, 0, Montgomery, 486662, 128);

pub const NIST256: CurveSpec =
    curve("NIST256", 56, 256, 1, -10, NotSpecial, 0, Weierstrass, -3, 128);

pub const BRAINPOOL: CurveSpec =
    curve("BRAINPOOL", 56, 256, 1, -3, NotSpecial, 0, Weierstrass, -3, 128);

pub const ANSSI: CurveSpec =
    curve("ANSSI", 56, 256, 1, -5, NotSpecial, 0, Weierstrass, -3, 128);

pub const HIFIVE: CurveSpec =
    curve("HIFIVE", 60, 336, 2, 1, PseudoMersenne, 0, Edwards, 1, 192);

pub const GOLDILOCKS: CurveSpec =
    curve("GOLDILOCKS", 58, 448, 1, 0, GeneralisedMersenne, 0, Edwards, 1, 256);

pub const NIST384: CurveSpec =
    curve("NIST384", 56, 384, 1, -12, NotSpecial, 0, Weierstrass, -3, 192);

pub const C41417: CurveSpec =
    curve("C41417", 60, 414, 1, 1, PseudoMersenne, 0, Edwards, 1, 256);

pub const NIST521: CurveSpec =
    curve("NIST521", 60, 521, 1, -4, PseudoMersenne, 0, Weierstrass, -3, 256);

pub const NUMS256W: CurveSpec =
    curve("NUMS256W", 56, 256, 1, 7, PseudoMersenne, 0, Weierstrass, -3, 128);

pub const NUMS256E: CurveSpec =
    curve("NUMS256E", 56, 256, 1, 0, PseudoMersenne, 0, Edwards, 1, 128);

pub const NUMS384W: CurveSpec =
    curve("NUMS384W", 58, 384, 1, -4, PseudoMersenne, 0, Weierstrass, -3, 192);

pub const NUMS384E: CurveSpec =
    curve("NUMS384E", 56, 384, 1, 0, PseudoMersenne, 0, Edwards, 1, 192);

pub const NUMS512W: CurveSpec =
    curve("NUMS512W", 60, 512, 1, -4, PseudoMersenne, 0, Weierstrass, -3, 256);

pub const NUMS512E: CurveSpec =
    curve("NUMS512E", 56, 512, 1, 0, PseudoMersenne, 0, Edwards, 1, 256);

/// Bitcoin curve; A = 0
pub const SECP256K1: CurveSpec =
    curve("SECP256K1", 56, 256, 1, 1, NotSpecial, 0, Weierstrass, 0, 128);

pub const SM2: CurveSpec =
    curve("SM2", 56, 256, 1, -9, NotSpecial, 0, Weierstrass, -3, 128);

pub const C13318: CurveSpec =
    curve("C13318", 56, 255, 2, 2, PseudoMersenne, 0, Weierstrass, -3, 128);

pub const JUBJUB: CurveSpec =
    curve("JUBJUB", 56, 255, 32, 1, NotSpecial, 5, Edwards, -1, 128);

pub const X448: CurveSpec =
    curve("X448", 58, 448, 1, 0, GeneralisedMersenne, 0, Montgomery, 156326, 256);

pub const SECP160R1: CurveSpec =
    curve("SECP160R1", 56, 160, 1, 3, NotSpecial, 0, Weierstrass, -3, 128);

pub const C1174: CurveSpec =
    curve("C1174", 56, 251, 1, 0, PseudoMersenne, 0, Edwards, 1, 128);

pub const C1665: CurveSpec =
    curve("C1665", 60, 166, 1, 0, PseudoMersenne, 0, Edwards, 1, 128);

/// Million Dollar Curve
pub const MDC: CurveSpec =
    curve("MDC", 56, 256, 1, 0, NotSpecial, 0, Edwards, 1, 128);
