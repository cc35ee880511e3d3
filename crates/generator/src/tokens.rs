//! Placeholder vocabulary and per-scheme token maps

use crate::derive::{CurveParams, RsaParams};
use crate::features::{Features, Region};
use crate::layout::CommentSyntax;
use coregen_api::{Error, Result};
use coregen_params::{CurveSpec, RsaSpec};

/// Scheme name; also the package of the generated sources
pub const NAME: &str = "XXX";
/// Big length in bytes
pub const NB: &str = "@NB@";
/// Number base exponent
pub const BASE: &str = "@BASE@";
/// Modulus bit length
pub const NBT: &str = "@NBT@";
pub const M8: &str = "@M8@";
/// Modulus type
pub const MT: &str = "@MT@";
/// Hash-to-curve Z for G1
pub const RZ: &str = "@RZ@";
/// Hash-to-curve Z for G2, `0` if the curve has none
pub const RZ2: &str = "@RZ2@";
/// Quadratic non-residue index
pub const QI: &str = "@QI@";
/// Tower direction
pub const TW: &str = "@TW@";
/// Normalisation shift bound
pub const SH: &str = "@SH@";
/// Curve type
pub const CT: &str = "@CT@";
/// Curve A coefficient
pub const CA: &str = "@CA@";
/// Pairing family
pub const PF: &str = "@PF@";
/// Sextic twist
pub const ST: &str = "@ST@";
/// Sign of x
pub const SX: &str = "@SX@";
/// Ate bits
pub const AB: &str = "@AB@";
/// G2 table size
pub const G2: &str = "@G2@";
/// Hash truncation bytes
pub const HT: &str = "@HT@";
/// AES key bytes
pub const AK: &str = "@AK@";
/// RSA multiplier
pub const ML: &str = "@ML@";

/// Value rendered for fields a plain curve does not have
pub const NOT: &str = "NOT";

/// Ordered `(token, value)` substitutions for one scheme
///
/// Values are checked on insertion so that no substitution can introduce a
/// placeholder a later one would rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    entries: Vec<(&'static str, String)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a substitution
    pub fn insert(&mut self, token: &'static str, value: impl ToString) -> Result<()> {
        let value = value.to_string();
        if token.is_empty() {
            return Err(Error::parameter("token", "empty placeholder"));
        }
        if self.get(token).is_some() {
            return Err(Error::parameter("token", format!("{token} is already mapped")));
        }
        if find_placeholder(&value).is_some() || value.contains(NAME) {
            return Err(Error::parameter(
                "token",
                format!("value {value:?} for {token} contains a placeholder"),
            ));
        }
        self.entries.push((token, value));
        Ok(())
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(t, v)| (*t, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every substitution in insertion order
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_owned(), |acc, (token, value)| acc.replace(token, value))
    }
}

/// First `@NAME@` placeholder in `text`, if any
///
/// A placeholder is an `@`, one or more of `A-Z`, `0-9` or `_`, and a
/// closing `@`.
pub fn find_placeholder(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(offset) = text[start..].find('@') {
        let open = start + offset;
        let body = bytes[open + 1..]
            .iter()
            .take_while(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || **b == b'_')
            .count();
        let close = open + 1 + body;
        if body > 0 && bytes.get(close) == Some(&b'@') {
            return Some(&text[open..=close]);
        }
        start = open + 1;
    }
    None
}

fn optional(value: Option<u32>) -> String {
    value.map_or_else(|| NOT.to_owned(), |v| v.to_string())
}

/// Token map of a curve
pub fn curve_tokens(
    spec: &CurveSpec,
    params: &CurveParams,
    features: &Features,
    comments: CommentSyntax,
) -> Result<TokenMap> {
    let mut map = TokenMap::new();
    map.insert(NAME, spec.name)?;

    map.insert(NB, params.modulus_bytes)?;
    map.insert(BASE, spec.base_bits)?;

    map.insert(NBT, spec.modulus_bits)?;
    map.insert(M8, spec.modulus_mod_8)?;
    map.insert(MT, spec.modulus_type.as_token())?;
    map.insert(RZ, spec.z.g1())?;
    map.insert(RZ2, spec.z.g2().unwrap_or(0))?;
    map.insert(QI, params.qnr.residue)?;
    map.insert(TW, params.qnr.tower().as_token())?;
    map.insert(SH, params.shift)?;

    map.insert(CT, spec.curve_type.as_token())?;
    map.insert(CA, spec.curve_a)?;
    map.insert(PF, spec.pairing.as_token())?;
    map.insert(ST, spec.twist.as_token())?;
    map.insert(SX, spec.sign_of_x.as_token())?;
    map.insert(AB, optional(spec.ate_bits))?;
    map.insert(G2, optional(spec.g2_table))?;
    map.insert(HT, params.sizes.hash_bytes)?;
    map.insert(AK, params.sizes.key_bytes)?;

    for region in Region::ALL {
        let (start, finish) = region.markers();
        let (start_text, finish_text) = comments.render_region(features.region(region));
        map.insert(start, start_text)?;
        map.insert(finish, finish_text)?;
    }

    Ok(map)
}

/// Token map of an RSA modulus
pub fn rsa_tokens(spec: &RsaSpec, params: &RsaParams) -> Result<TokenMap> {
    let mut map = TokenMap::new();
    map.insert(NAME, spec.name)?;
    map.insert(NB, params.big_bytes)?;
    map.insert(BASE, spec.base_bits)?;
    map.insert(ML, spec.multiplier)?;
    Ok(map)
}
