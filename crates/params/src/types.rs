//! Parameter tuples describing one generatable scheme

use core::fmt;

/// Shape of the field modulus, selecting the reduction strategy in the templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulusType {
    NotSpecial,
    PseudoMersenne,
    MontgomeryFriendly,
    GeneralisedMersenne,
}

impl ModulusType {
    /// Constant name understood by the field template
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::NotSpecial => "NOT_SPECIAL",
            Self::PseudoMersenne => "PSEUDO_MERSENNE",
            Self::MontgomeryFriendly => "MONTGOMERY_FRIENDLY",
            Self::GeneralisedMersenne => "GENERALISED_MERSENNE",
        }
    }
}

/// Curve equation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    Weierstrass,
    Edwards,
    Montgomery,
}

impl CurveType {
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Weierstrass => "WEIERSTRASS",
            Self::Edwards => "EDWARDS",
            Self::Montgomery => "MONTGOMERY",
        }
    }
}

/// Pairing family of a pairing-friendly curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairingFamily {
    /// Not pairing friendly
    Not,
    Bn,
    Bls12,
    Bls24,
    Bls48,
}

impl PairingFamily {
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Bn => "BN",
            Self::Bls12 => "BLS12",
            Self::Bls24 => "BLS24",
            Self::Bls48 => "BLS48",
        }
    }

    pub const fn is_pairing_friendly(self) -> bool {
        !matches!(self, Self::Not)
    }
}

/// Sextic twist type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwistType {
    Not,
    MType,
    DType,
}

impl TwistType {
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::MType => "M_TYPE",
            Self::DType => "D_TYPE",
        }
    }
}

/// Sign of the family parameter x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignOfX {
    Not,
    PositiveX,
    NegativeX,
}

impl SignOfX {
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::PositiveX => "POSITIVEX",
            Self::NegativeX => "NEGATIVEX",
        }
    }
}

/// Z constant(s) for hash-to-curve
///
/// Pairing-friendly curves carry a second value seeding the map to G2,
/// whose points live over the quadratic extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashToCurveZ {
    Single(i32),
    Pair(i32, i32),
}

impl HashToCurveZ {
    /// Z used for G1
    pub const fn g1(self) -> i32 {
        match self {
            Self::Single(z) | Self::Pair(z, _) => z,
        }
    }

    /// Z used for G2, if the curve has an independent one
    pub const fn g2(self) -> Option<i32> {
        match self {
            Self::Single(_) => None,
            Self::Pair(_, z) => Some(z),
        }
    }
}

/// Parameters of one elliptic curve scheme
///
/// The big length in bytes is not stored: it is derived from
/// `modulus_bits` on every generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSpec {
    /// Common name, also the package name of the generated sources
    pub name: &'static str,

    /// Number base for 64-bit words, as n where the base is 2^n
    pub base_bits: u32,

    /// Exact bit length of the field modulus
    pub modulus_bits: u32,

    /// Value handed to the field template as its modulus residue class
    pub modulus_mod_8: u32,

    /// Hash-to-curve Z constant(s)
    pub z: HashToCurveZ,

    pub modulus_type: ModulusType,

    /// Packed quadratic non-residue descriptor: `10 * direction + residue`
    pub qnr: u32,

    pub curve_type: CurveType,

    /// Curve A coefficient; zero enables the A = 0 specialisation
    pub curve_a: i64,

    pub pairing: PairingFamily,
    pub twist: TwistType,
    pub sign_of_x: SignOfX,

    /// Entries in the precomputed G2 table (pairing-friendly curves only)
    pub g2_table: Option<u32>,

    /// Bit length of the Ate parameter (pairing-friendly curves only)
    pub ate_bits: Option<u32>,

    /// AES-equivalent security, rounded up
    pub security: u32,
}

/// Parameters of one RSA modulus size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaSpec {
    /// Name reflecting the modulus size, e.g. `RSA2048`
    pub name: &'static str,

    /// Length of the underlying big integer in bytes
    pub big_bytes: u32,

    /// Number base for 64-bit words, as n where the base is 2^n
    pub base_bits: u32,

    /// Power-of-two multiple of the big length giving the modulus size
    pub multiplier: u32,
}

/// Broad kind of a scheme, used for menus and session summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemeKind {
    Curve,
    PairingCurve,
    Rsa,
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve => write!(f, "Elliptic Curves"),
            Self::PairingCurve => write!(f, "Pairing-Friendly Elliptic Curves"),
            Self::Rsa => write!(f, "RSA"),
        }
    }
}

/// One catalog scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Curve(&'static CurveSpec),
    Rsa(&'static RsaSpec),
}

impl Scheme {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Curve(spec) => spec.name,
            Self::Rsa(spec) => spec.name,
        }
    }

    pub fn kind(&self) -> SchemeKind {
        match self {
            Self::Curve(spec) if spec.pairing.is_pairing_friendly() => SchemeKind::PairingCurve,
            Self::Curve(_) => SchemeKind::Curve,
            Self::Rsa(_) => SchemeKind::Rsa,
        }
    }
}
