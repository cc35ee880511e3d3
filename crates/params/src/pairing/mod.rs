//! Parameters for pairing-friendly curves
//!
//! All curves here are Weierstrass curves with A = 0 over a modulus of no
//! special form. They differ in the extension tower, the twist and the
//! family parameter.

pub mod bls;
pub mod bn;

use crate::types::{
    CurveSpec, CurveType, HashToCurveZ, ModulusType, PairingFamily, SignOfX, TwistType,
};

#[allow(clippy::too_many_arguments)]
pub(crate) const fn pairing_curve(
    name: &'static str,
    base_bits: u32,
    modulus_bits: u32,
    z: (i32, i32),
    qnr: u32,
    pairing: PairingFamily,
    twist: TwistType,
    sign_of_x: SignOfX,
    g2_table: u32,
    ate_bits: u32,
    security: u32,
) -> CurveSpec {
    CurveSpec {
        name,
        base_bits,
        modulus_bits,
        modulus_mod_8: 1,
        z: HashToCurveZ::Pair(z.0, z.1),
        modulus_type: ModulusType::NotSpecial,
        qnr,
        curve_type: CurveType::Weierstrass,
        curve_a: 0,
        pairing,
        twist,
        sign_of_x,
        g2_table: Some(g2_table),
        ate_bits: Some(ate_bits),
        security,
    }
}
