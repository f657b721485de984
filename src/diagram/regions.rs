use serde::Serialize;

use crate::models::DiagramOptions;

/// Potential thresholds that split the diagram into its three bands.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub protection_max: f64,
    pub passivation_min: f64,
}

impl Thresholds {
    /// The passivation threshold lies below the protection threshold, so the
    /// corrosion band `(protection_max, passivation_min)` is empty.
    ///
    /// Inverted thresholds are reported as computed, never swapped.
    pub fn corrosion_band_inverted(&self) -> bool {
        self.passivation_min < self.protection_max
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Protection,
    Corrosion,
    Passivation,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Protection => "Protection",
            Region::Corrosion => "Corrosion",
            Region::Passivation => "Passivation",
        }
    }
}

/// Classify a potential (V); the bands span the whole pH range.
///
/// Protection wins over passivation when the thresholds are inverted, so an
/// inverted configuration never reports corrosion.
pub fn classify(potential: f64, thresholds: &Thresholds) -> Region {
    if potential <= thresholds.protection_max {
        Region::Protection
    } else if potential >= thresholds.passivation_min {
        Region::Passivation
    } else {
        Region::Corrosion
    }
}

/// A horizontal band of the chart, `lower..upper` in volts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub region: Region,
    pub lower: f64,
    pub upper: f64,
}

/// The three shaded bands in drawing order. Bounds are taken as-is: with
/// inverted thresholds the corrosion band has `lower > upper`.
pub fn bands(thresholds: &Thresholds, options: &DiagramOptions) -> [Band; 3] {
    [
        Band {
            region: Region::Protection,
            lower: options.band_floor,
            upper: thresholds.protection_max,
        },
        Band {
            region: Region::Corrosion,
            lower: thresholds.protection_max,
            upper: thresholds.passivation_min,
        },
        Band {
            region: Region::Passivation,
            lower: thresholds.passivation_min,
            upper: options.band_ceiling,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRON_SAMPLE: Thresholds = Thresholds {
        protection_max: -0.44,
        passivation_min: -0.05,
    };

    #[test]
    fn boundaries_belong_to_outer_bands() {
        assert_eq!(classify(-0.44, &IRON_SAMPLE), Region::Protection);
        assert_eq!(classify(-0.05, &IRON_SAMPLE), Region::Passivation);
        assert_eq!(classify(-0.2, &IRON_SAMPLE), Region::Corrosion);
        assert_eq!(classify(-1.5, &IRON_SAMPLE), Region::Protection);
        assert_eq!(classify(1.0, &IRON_SAMPLE), Region::Passivation);
    }

    #[test]
    fn inverted_thresholds_never_corrode() {
        let t = Thresholds {
            protection_max: 0.1,
            passivation_min: -0.3,
        };
        assert!(t.corrosion_band_inverted());
        assert!(!IRON_SAMPLE.corrosion_band_inverted());
        for p in [-0.5, -0.3, -0.1, 0.1, 0.2] {
            assert_ne!(classify(p, &t), Region::Corrosion, "potential {p}");
        }
        assert_eq!(classify(0.0, &t), Region::Protection);
        assert_eq!(classify(0.2, &t), Region::Passivation);
    }

    #[test]
    fn bands_keep_inverted_bounds() {
        let t = Thresholds {
            protection_max: 0.1,
            passivation_min: -0.3,
        };
        let [protection, corrosion, passivation] = bands(&t, &DiagramOptions::default());
        assert_eq!((protection.lower, protection.upper), (-2.0, 0.1));
        assert_eq!((corrosion.lower, corrosion.upper), (0.1, -0.3));
        assert_eq!((passivation.lower, passivation.upper), (-0.3, 2.0));
        assert_eq!(corrosion.region.label(), "Corrosion");
    }
}
