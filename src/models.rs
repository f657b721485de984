use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::metals::{DEFAULT_SAMPLES, PH_MAX, PH_MIN};

/// One diagram request: a metal name and one potential (V) per species.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramRequest {
    pub metal: String,
    pub potentials: Vec<f64>,
}

impl DiagramRequest {
    pub fn new(metal: impl Into<String>, potentials: impl Into<Vec<f64>>) -> Self {
        Self {
            metal: metal.into(),
            potentials: potentials.into(),
        }
    }
}

/// Sampling and display settings. Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramOptions {
    pub ph_min: f64,
    pub ph_max: f64,
    pub samples: usize,
    /// Lower edge of the shaded protection band.
    pub band_floor: f64,
    /// Upper edge of the shaded passivation band.
    pub band_ceiling: f64,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            ph_min: PH_MIN,
            ph_max: PH_MAX,
            samples: DEFAULT_SAMPLES,
            band_floor: -2.0,
            band_ceiling: 2.0,
        }
    }
}
