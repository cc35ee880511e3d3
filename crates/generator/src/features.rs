//! Optional modules and code regions selected by a curve's parameters
//!
//! A region is a block of template code that is off by default and replaces
//! the generic code path when switched on. Each region is resolved to a
//! [`RegionState`] once per scheme; the instantiator then renders its
//! markers for the target language.

use coregen_params::{CurveSpec, PairingFamily};

/// Curve A value that switches on the A = 0 specialisation
pub const CURVE_A_SENTINEL: i64 = 0;

/// Group of optional template modules pulled in by a pairing family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleSet {
    /// Fp2 and Fp4, needed by every pairing-friendly curve
    QuadraticExtension,
    /// Fp12 tower, G2 over Fp2, the ate pairing and the 128-bit protocols
    Degree12,
    /// Fp24 tower, G2 over Fp4, and the 192-bit protocol variants
    Degree24,
    /// Fp48 tower, G2 over Fp8, and the 256-bit protocol variants
    Degree48,
}

/// Optional code region embedded in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Point arithmetic specialised for A = 0, in `ECP`
    CurveAIsZero,
    /// BN-specific Miller loop and final exponentiation, in `PAIR`
    BnPairing,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::CurveAIsZero, Region::BnPairing];

    /// Start and finish markers bounding the region in the template
    pub const fn markers(self) -> (&'static str, &'static str) {
        match self {
            Self::CurveAIsZero => ("CAISZS", "CAISZF"),
            Self::BnPairing => ("PFBNS", "PFBNF"),
        }
    }
}

/// Whether a region replaces the generic code for this scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionState {
    Enabled,
    Disabled,
}

impl RegionState {
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Everything optional a curve needs, resolved once per generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    modules: Vec<ModuleSet>,
    regions: Vec<(Region, RegionState)>,
}

impl Features {
    /// Module groups in the order they must be emitted
    pub fn modules(&self) -> &[ModuleSet] {
        &self.modules
    }

    pub fn requires(&self, set: ModuleSet) -> bool {
        self.modules.contains(&set)
    }

    pub fn regions(&self) -> &[(Region, RegionState)] {
        &self.regions
    }

    pub fn region(&self, region: Region) -> RegionState {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map_or(RegionState::Disabled, |(_, state)| *state)
    }

    pub fn has_pairing(&self) -> bool {
        !self.modules.is_empty()
    }
}

/// Decide modules and regions for a curve
pub fn select_features(spec: &CurveSpec) -> Features {
    let mut modules = Vec::new();

    if spec.pairing.is_pairing_friendly() {
        modules.push(ModuleSet::QuadraticExtension);
    }
    match spec.pairing {
        PairingFamily::Bn | PairingFamily::Bls12 => modules.push(ModuleSet::Degree12),
        PairingFamily::Bls24 => modules.push(ModuleSet::Degree24),
        PairingFamily::Bls48 => modules.push(ModuleSet::Degree48),
        PairingFamily::Not => {}
    }

    let regions = vec![
        (
            Region::CurveAIsZero,
            RegionState::from_flag(spec.curve_a == CURVE_A_SENTINEL),
        ),
        (
            Region::BnPairing,
            RegionState::from_flag(spec.pairing == PairingFamily::Bn),
        ),
    ];

    Features { modules, regions }
}
