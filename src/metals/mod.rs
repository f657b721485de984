//! Metals module: the fixed table of metal profiles and their equilibrium lines.
//!
//! Each profile lists the species whose equilibria bound the Pourbaix regions,
//! one equilibrium line per species, and which lines carry the protection and
//! passivation thresholds.
//!
//! Units conventions:
//! - Potentials are in volts (V)
//! - Slope coefficients are in V per pH unit
//!
//! Design notes:
//! - Lines are linear approximations `E(pH) = E0 - slope * pH`; a constant line has no pH term
//! - The table is static; lookups never allocate
//!
//! # Examples
//! ```rust
//! use pourbaix_rs::metals::{find_metal, find_metal_capitalized};
//!
//! let iron = find_metal("Iron").unwrap();
//! assert_eq!(iron.species().count(), 5);
//! assert!(find_metal("iron").is_err());
//! assert_eq!(find_metal_capitalized("iron").unwrap().name, "Iron");
//! ```
//!
//! # Limitations
//! Only iron is tabulated, and its lines share the room-temperature Nernst slope.

use crate::error::DiagramError;

/// Nernst slope for a one-proton, one-electron couple at 25 °C (V per pH unit).
pub const NERNST_SLOPE_V_PER_PH: f64 = 0.059;

/// Default lower bound of the pH axis.
pub const PH_MIN: f64 = 0.0;
/// Default upper bound of the pH axis.
pub const PH_MAX: f64 = 14.0;
/// Default number of pH samples per curve.
pub const DEFAULT_SAMPLES: usize = 100;
/// Upper bound on pH samples per curve.
pub const MAX_SAMPLES: usize = 100_000;

/// Shape of an equilibrium line on the potential-pH plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineKind {
    /// Potential independent of pH (horizontal line).
    Constant,
    /// `E(pH) = E0 - slope * pH`.
    PhDependent { slope: f64 },
}

impl LineKind {
    /// Potential of the line at `ph` given its standard potential `e0`.
    pub fn potential_at(self, e0: f64, ph: f64) -> f64 {
        match self {
            LineKind::Constant => e0,
            LineKind::PhDependent { slope } => e0 - slope * ph,
        }
    }
}

/// One equilibrium between a species and its neighbour on the diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EquilibriumLine {
    pub species: &'static str,
    pub reaction: &'static str,
    pub kind: LineKind,
}

/// Static description of a metal: its species, their lines, and which lines
/// bound the protection and passivation zones.
#[derive(Debug, PartialEq)]
pub struct MetalProfile {
    pub name: &'static str,
    pub lines: &'static [EquilibriumLine],
    /// Index of the line whose minimum is the protection threshold.
    pub protection_line: usize,
    /// Index of the line whose maximum is the passivation threshold.
    pub passivation_line: usize,
}

impl MetalProfile {
    /// Species labels in line order.
    pub fn species(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lines.iter().map(|l| l.species)
    }

    pub fn species_count(&self) -> usize {
        self.lines.len()
    }
}

pub static IRON: MetalProfile = MetalProfile {
    name: "Iron",
    lines: &[
        EquilibriumLine {
            species: "Fe2+",
            reaction: "Fe2+ + 2e- <-> Fe",
            kind: LineKind::Constant,
        },
        EquilibriumLine {
            species: "Fe3+",
            reaction: "Fe3+ + e- <-> Fe2+",
            kind: LineKind::PhDependent {
                slope: NERNST_SLOPE_V_PER_PH,
            },
        },
        EquilibriumLine {
            species: "FeOH2",
            reaction: "FeOH2 formation",
            kind: LineKind::PhDependent {
                slope: NERNST_SLOPE_V_PER_PH,
            },
        },
        EquilibriumLine {
            species: "Fe2O3",
            reaction: "Fe2O3 formation",
            kind: LineKind::PhDependent {
                slope: NERNST_SLOPE_V_PER_PH,
            },
        },
        EquilibriumLine {
            species: "Fe3O4",
            reaction: "Fe3O4 formation",
            kind: LineKind::PhDependent {
                slope: NERNST_SLOPE_V_PER_PH,
            },
        },
    ],
    protection_line: 0,
    passivation_line: 2,
};

/// All supported metals.
pub static METALS: &[&MetalProfile] = &[&IRON];

/// Case-sensitive lookup in the metal table.
pub fn find_metal(name: &str) -> Result<&'static MetalProfile, DiagramError> {
    METALS
        .iter()
        .copied()
        .find(|m| m.name == name)
        .ok_or_else(|| DiagramError::UnsupportedMetal { name: name.into() })
}

/// Lookup after capitalizing `name` (first character upper-case, the rest
/// lower-case), so `"iron"` and `"IRON"` both resolve to `Iron`.
pub fn find_metal_capitalized(name: &str) -> Result<&'static MetalProfile, DiagramError> {
    find_metal(&capitalize(name))
}

/// First character upper-case, remaining characters lower-case; surrounding
/// whitespace is dropped.
pub fn capitalize(name: &str) -> alloc::string::String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => alloc::string::String::new(),
    }
}
