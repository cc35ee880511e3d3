//! Secondary constants derived from a catalog entry
//!
//! Everything here is a pure function of a [`CurveSpec`] or [`RsaSpec`].
//! Results are recomputed for every generation and never cached.

use coregen_api::{Error, Result};
use coregen_params::{CurveSpec, RsaSpec};

/// Largest normalisation shift a 64-bit digit can absorb
pub const MAX_SHIFT: u32 = 30;

/// Which of the two quadratic-extension conventions builds the tower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TowerDirection {
    Positive,
    Negative,
}

impl TowerDirection {
    /// Constant name understood by the field template
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Positive => "POSITOWER",
            Self::Negative => "NEGATOWER",
        }
    }
}

/// Quadratic non-residue descriptor split into its two packed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QnrSplit {
    /// Residue index, always in `0..=9`
    pub residue: u32,
    /// Tower-direction digits; any non-zero value selects the positive tower
    pub direction: u32,
}

impl QnrSplit {
    pub const fn tower(self) -> TowerDirection {
        if self.direction > 0 {
            TowerDirection::Positive
        } else {
            TowerDirection::Negative
        }
    }

    /// Repack into the descriptor this split was taken from
    pub const fn descriptor(self) -> u32 {
        self.direction * 10 + self.residue
    }
}

/// Hash truncation and symmetric key sizes for a security level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashSizes {
    /// Bytes of hash output kept
    pub hash_bytes: u32,
    /// Symmetric (AES) key bytes
    pub key_bytes: u32,
}

/// Constants derived for one curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Modulus length rounded up to whole bytes
    pub modulus_bytes: u32,
    pub shift: u32,
    pub qnr: QnrSplit,
    pub sizes: HashSizes,
}

/// Constants derived for one RSA modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaParams {
    /// Length of the underlying big integer in bytes
    pub big_bytes: u32,
    /// Length of the full modulus in bytes
    pub modulus_bytes: u32,
}

/// Round a bit length up to whole bytes
pub const fn rounded_byte_length(modulus_bits: u32) -> u32 {
    modulus_bits.div_ceil(8)
}

/// Shift bound for a modulus of `modulus_bits` held in `modulus_bytes`
/// bytes with digits in base 2^`base_bits`, clamped to [`MAX_SHIFT`]
pub fn shift_bound(base_bits: u32, modulus_bytes: u32, modulus_bits: u32) -> Result<u32> {
    if base_bits == 0 {
        return Err(Error::parameter("base_bits", "number base must be non-zero"));
    }
    if modulus_bytes == 0 || modulus_bits > 8 * modulus_bytes {
        return Err(Error::parameter(
            "modulus_bytes",
            format!("{modulus_bytes} bytes cannot hold a {modulus_bits}-bit modulus"),
        ));
    }

    let padded = base_bits * (1 + (8 * modulus_bytes - 1) / base_bits);
    Ok((padded - modulus_bits).min(MAX_SHIFT))
}

/// Split a packed quadratic non-residue descriptor
pub const fn split_qnr(descriptor: u32) -> QnrSplit {
    QnrSplit {
        residue: descriptor % 10,
        direction: descriptor / 10,
    }
}

/// Hash and key sizes for a security level in bits
pub fn hash_sizes(security: u32) -> Result<HashSizes> {
    let (hash_bytes, key_bytes) = match security {
        128 => (32, 16),
        192 => (48, 24),
        256 => (64, 32),
        other => return Err(Error::InvalidSecurityLevel(other)),
    };
    Ok(HashSizes {
        hash_bytes,
        key_bytes,
    })
}

/// Derive every secondary constant of a curve
pub fn derive_curve(spec: &CurveSpec) -> Result<CurveParams> {
    if spec.modulus_bits == 0 {
        return Err(Error::parameter("modulus_bits", "modulus must be non-empty"));
    }

    let modulus_bytes = rounded_byte_length(spec.modulus_bits);
    Ok(CurveParams {
        modulus_bytes,
        shift: shift_bound(spec.base_bits, modulus_bytes, spec.modulus_bits)?,
        qnr: split_qnr(spec.qnr),
        sizes: hash_sizes(spec.security)?,
    })
}

/// Derive the modulus length of an RSA scheme
pub fn derive_rsa(spec: &RsaSpec) -> Result<RsaParams> {
    if spec.big_bytes == 0 || spec.base_bits == 0 {
        return Err(Error::parameter(
            "big_bytes",
            "big length and number base must be non-zero",
        ));
    }
    if !spec.multiplier.is_power_of_two() {
        return Err(Error::parameter(
            "multiplier",
            format!("{} is not a power of two", spec.multiplier),
        ));
    }

    let modulus_bytes = spec.big_bytes.checked_mul(spec.multiplier).ok_or_else(|| {
        Error::parameter("multiplier", "modulus length overflows")
    })?;
    Ok(RsaParams {
        big_bytes: spec.big_bytes,
        modulus_bytes,
    })
}
