use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

use crate::diagram::regions::Thresholds;
use crate::error::DiagramError;
use crate::metals::{MAX_SAMPLES, MetalProfile, find_metal};
use crate::models::{DiagramOptions, DiagramRequest};

/// Sampled equilibrium lines, one curve per species of the metal, each as
/// long as the pH grid it was evaluated on.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSet {
    pub curves: Vec<Vec<f64>>,
}

impl CurveSet {
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn curve(&self, index: usize) -> Option<&[f64]> {
        self.curves.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.curves.iter().map(Vec::as_slice)
    }
}

/// Everything computed for one request.
#[derive(Clone, Debug, PartialEq)]
pub struct PourbaixDiagram {
    pub metal: &'static MetalProfile,
    pub grid: Vec<f64>,
    pub curves: CurveSet,
    pub thresholds: Thresholds,
}

impl PourbaixDiagram {
    /// `(pH, E)` points of one equilibrium line.
    pub fn points(&self, index: usize) -> Option<Vec<(f64, f64)>> {
        self.curves
            .curve(index)
            .map(|c| self.grid.iter().copied().zip(c.iter().copied()).collect())
    }
}

/// Compact result for callers that only need the thresholds and the
/// conclusion (e.g. the CLI or a JSON API).
///
/// Fields:
/// - `protection_max`: potentials at or below this value are protected (V)
/// - `passivation_min`: potentials at or above this value passivate (V)
/// - `corrosion_band_inverted`: `passivation_min < protection_max`; the
///   thresholds are reported unchanged in that case
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DiagramSummary {
    pub metal: String,
    pub ph_min: f64,
    pub ph_max: f64,
    pub protection_max: f64,
    pub passivation_min: f64,
    pub corrosion_band_inverted: bool,
    pub conclusion: String,
}

/// Evenly spaced pH samples over `[ph_min, ph_max]`, both ends included.
///
/// The last sample is set to `ph_max` exactly so it does not drift by
/// accumulated rounding.
pub fn sample_grid(ph_min: f64, ph_max: f64, samples: usize) -> Result<Vec<f64>, DiagramError> {
    if !ph_min.is_finite() || !ph_max.is_finite() {
        return Err(DiagramError::InvalidGrid {
            reason: "pH bounds must be finite",
        });
    }
    if ph_min >= ph_max {
        return Err(DiagramError::InvalidGrid {
            reason: "ph_min must be below ph_max",
        });
    }
    if samples < 2 {
        return Err(DiagramError::InvalidGrid {
            reason: "at least two samples are required",
        });
    }
    if samples > MAX_SAMPLES {
        return Err(DiagramError::InvalidGrid {
            reason: "too many samples",
        });
    }

    let span = ph_max - ph_min;
    if !span.is_finite() {
        return Err(DiagramError::InvalidGrid {
            reason: "pH range is too wide",
        });
    }
    let step = span / (samples - 1) as f64;
    let mut grid: Vec<f64> = (0..samples).map(|i| ph_min + i as f64 * step).collect();
    grid[samples - 1] = ph_max;
    Ok(grid)
}

/// Evaluate every equilibrium line of `metal` over `grid`.
///
/// `potentials[k]` is the standard potential of line `k`; the slice must
/// hold exactly one value per species, and every value must be finite.
pub fn evaluate_curves(
    metal: &MetalProfile,
    grid: &[f64],
    potentials: &[f64],
) -> Result<CurveSet, DiagramError> {
    if potentials.len() != metal.species_count() {
        return Err(DiagramError::PotentialCountMismatch {
            metal: metal.name,
            expected: metal.species_count(),
            found: potentials.len(),
        });
    }
    if let Some((line, &value)) = metal.lines.iter().zip(potentials).find(|(_, v)| !v.is_finite()) {
        return Err(DiagramError::NonFinitePotential {
            species: line.species,
            value,
        });
    }

    let curves = metal
        .lines
        .iter()
        .zip(potentials)
        .map(|(line, &e0)| grid.iter().map(|&ph| line.kind.potential_at(e0, ph)).collect())
        .collect();

    Ok(CurveSet { curves })
}

/// Protection threshold = minimum of the protection line, passivation
/// threshold = maximum of the passivation line.
pub fn derive_thresholds(metal: &MetalProfile, curves: &CurveSet) -> Result<Thresholds, DiagramError> {
    let protection = non_empty_curve(curves, metal.protection_line)?;
    let passivation = non_empty_curve(curves, metal.passivation_line)?;

    Ok(Thresholds {
        protection_max: protection.iter().copied().fold(f64::INFINITY, f64::min),
        passivation_min: passivation.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    })
}

fn non_empty_curve(curves: &CurveSet, index: usize) -> Result<&[f64], DiagramError> {
    curves
        .curve(index)
        .filter(|c| !c.is_empty())
        .ok_or(DiagramError::EmptyCurve { index })
}

/// Run the whole pipeline for one request: metal lookup, pH grid, curves
/// and thresholds.
pub fn compute_diagram(
    request: &DiagramRequest,
    options: &DiagramOptions,
) -> Result<PourbaixDiagram, DiagramError> {
    let metal = find_metal(&request.metal)?;
    let grid = sample_grid(options.ph_min, options.ph_max, options.samples)?;
    let curves = evaluate_curves(metal, &grid, &request.potentials)?;
    let thresholds = derive_thresholds(metal, &curves)?;

    Ok(PourbaixDiagram {
        metal,
        grid,
        curves,
        thresholds,
    })
}

/// Human-readable statement of the corrosion-resistant ranges, thresholds
/// rounded to two decimals.
pub fn conclusion(metal: &str, thresholds: &Thresholds, options: &DiagramOptions) -> String {
    let range = alloc::format!("{}-{}", options.ph_min, options.ph_max);
    alloc::format!(
        "The metal {metal} is resistant to corrosion under the following conditions:\n\
         - Protection Zone: pH range {range}, Potential \u{2264} {:.2} V\n\
         - Passivation Zone: pH range {range}, Potential \u{2265} {:.2} V",
        thresholds.protection_max, thresholds.passivation_min,
    )
}

/// Compute a [`DiagramSummary`] for the given request.
pub fn compute_summary(
    request: &DiagramRequest,
    options: &DiagramOptions,
) -> Result<DiagramSummary, DiagramError> {
    let diagram = compute_diagram(request, options)?;
    Ok(summarize(&diagram, options))
}

pub fn summarize(diagram: &PourbaixDiagram, options: &DiagramOptions) -> DiagramSummary {
    let t = diagram.thresholds;
    DiagramSummary {
        metal: diagram.metal.name.into(),
        ph_min: options.ph_min,
        ph_max: options.ph_max,
        protection_max: t.protection_max,
        passivation_min: t.passivation_min,
        corrosion_band_inverted: t.corrosion_band_inverted(),
        conclusion: conclusion(diagram.metal.name, &t, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metals::IRON;

    #[test]
    fn grid_matches_linspace_endpoints() {
        let grid = sample_grid(0.0, 14.0, 100).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[99], 14.0);
        assert!((grid[1] - 14.0 / 99.0).abs() < 1e-12);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn grid_rejects_degenerate_ranges() {
        assert!(matches!(sample_grid(0.0, 14.0, 1), Err(DiagramError::InvalidGrid { .. })));
        assert!(matches!(sample_grid(7.0, 7.0, 10), Err(DiagramError::InvalidGrid { .. })));
        assert!(matches!(sample_grid(f64::NAN, 14.0, 10), Err(DiagramError::InvalidGrid { .. })));
        assert_eq!(
            sample_grid(0.0, 14.0, usize::MAX),
            Err(DiagramError::InvalidGrid {
                reason: "too many samples"
            })
        );
        assert!(sample_grid(0.0, 14.0, MAX_SAMPLES).is_ok());
        assert_eq!(
            sample_grid(-1e308, 1e308, 100),
            Err(DiagramError::InvalidGrid {
                reason: "pH range is too wide"
            })
        );
    }

    #[test]
    fn short_and_long_potential_vectors_are_rejected() {
        let grid = sample_grid(0.0, 14.0, 10).unwrap();
        let err = evaluate_curves(&IRON, &grid, &[0.1, 0.2]).unwrap_err();
        assert_eq!(
            err,
            DiagramError::PotentialCountMismatch {
                metal: "Iron",
                expected: 5,
                found: 2
            }
        );
        assert!(evaluate_curves(&IRON, &grid, &[0.0; 6]).is_err());
    }

    #[test]
    fn non_finite_potentials_are_rejected() {
        let grid = sample_grid(0.0, 14.0, 10).unwrap();
        let err = evaluate_curves(&IRON, &grid, &[f64::NAN, 0.0, f64::NAN, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, DiagramError::NonFinitePotential { species: "Fe2+", value } if value.is_nan()));

        let err = evaluate_curves(&IRON, &grid, &[0.0, 0.0, f64::INFINITY, 0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            DiagramError::NonFinitePotential {
                species: "FeOH2",
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn empty_curves_have_no_thresholds() {
        let curves = CurveSet {
            curves: vec![Vec::new(); 5],
        };
        assert_eq!(
            derive_thresholds(&IRON, &curves),
            Err(DiagramError::EmptyCurve { index: 0 })
        );
    }

    #[test]
    fn conclusion_formats_two_decimals() {
        let t = Thresholds {
            protection_max: -0.44,
            passivation_min: -0.05,
        };
        let text = conclusion("Iron", &t, &DiagramOptions::default());
        assert!(text.starts_with("The metal Iron is resistant"));
        assert!(text.contains("Protection Zone: pH range 0-14, Potential \u{2264} -0.44 V"));
        assert!(text.contains("Passivation Zone: pH range 0-14, Potential \u{2265} -0.05 V"));
    }

    #[test]
    fn points_pair_grid_with_curve() {
        let req = DiagramRequest::new("Iron", [0.0, 0.5, 0.0, 0.0, 0.0]);
        let d = compute_diagram(&req, &DiagramOptions::default()).unwrap();
        let pts = d.points(1).unwrap();
        assert_eq!(pts.len(), 100);
        assert_eq!(pts[0], (0.0, 0.5));
        assert!(d.points(5).is_none());
    }
}
