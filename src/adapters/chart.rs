//! Chart rendering: PourbaixDiagram → SVG document via plotters.
use plotters::prelude::*;

use crate::diagram::calculator::PourbaixDiagram;
use crate::diagram::regions::{Region, bands};
use crate::error::AppError;
use crate::models::DiagramOptions;

/// Output image dimensions (pixels).
pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 600;

const PROTECTION_COLOR: RGBColor = RGBColor(0xFF, 0xFF, 0x99);
const CORROSION_COLOR: RGBColor = RGBColor(0xFF, 0xCC, 0xCC);
const PASSIVATION_COLOR: RGBColor = RGBColor(0xCC, 0xFF, 0xCC);
const BAND_ALPHA: f64 = 0.5;

/// Dash style of an equilibrium line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Dashed,
    DashDot,
    Dotted,
    Solid,
}

impl Stroke {
    /// Alternating drawn/skipped run lengths, counted in sample steps.
    fn pattern(self) -> &'static [usize] {
        match self {
            Stroke::Dashed => &[6, 3],
            Stroke::DashDot => &[6, 2, 1, 2],
            Stroke::Dotted => &[1, 2],
            Stroke::Solid => &[],
        }
    }
}

/// Stroke per equilibrium line, by line index.
pub const LINE_STROKES: [Stroke; 5] = [
    Stroke::Dashed,
    Stroke::DashDot,
    Stroke::Dotted,
    Stroke::Solid,
    Stroke::Solid,
];

fn region_color(region: Region) -> RGBColor {
    match region {
        Region::Protection => PROTECTION_COLOR,
        Region::Corrosion => CORROSION_COLOR,
        Region::Passivation => PASSIVATION_COLOR,
    }
}

fn render_err(stage: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Render(format!("{stage}: {e}"))
}

/// Render the diagram as an SVG document: three shaded bands, one styled
/// line per species, legend and grid.
pub fn render_svg(diagram: &PourbaixDiagram, options: &DiagramOptions) -> Result<String, AppError> {
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| render_err("fill", e))?;

        let (y_min, y_max) = potential_range(diagram, options);
        let (ph_min, ph_max) = (options.ph_min, options.ph_max);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Pourbaix Diagram for {}", diagram.metal.name),
                ("sans-serif", 24),
            )
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(ph_min..ph_max, y_min..y_max)
            .map_err(|e| render_err("chart build", e))?;

        chart
            .configure_mesh()
            .x_desc("pH")
            .y_desc("Potential (V)")
            .draw()
            .map_err(|e| render_err("mesh", e))?;

        for band in bands(&diagram.thresholds, options) {
            let style = region_color(band.region).mix(BAND_ALPHA).filled();
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(ph_min, band.lower), (ph_max, band.upper)],
                    style,
                )))
                .map_err(|e| render_err("band", e))?
                .label(band.region.label())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], style));
        }

        for (index, line) in diagram.metal.lines.iter().enumerate() {
            let stroke = LINE_STROKES[index % LINE_STROKES.len()];
            let style = BLACK.stroke_width(2);
            let points = diagram.points(index).unwrap_or_default();

            chart
                .draw_series(
                    dash_segments(&points, stroke.pattern())
                        .into_iter()
                        .map(move |segment| PathElement::new(segment, style)),
                )
                .map_err(|e| render_err("line", e))?
                .label(format!("{} {}", diagram.metal.name, line.species))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| render_err("legend", e))?;

        root.present().map_err(|e| render_err("present", e))?;
    }

    Ok(svg)
}

/// Split a polyline into the drawn runs of a dash pattern. An empty pattern
/// keeps the line whole.
fn dash_segments(points: &[(f64, f64)], pattern: &[usize]) -> Vec<Vec<(f64, f64)>> {
    if pattern.is_empty() || points.len() < 2 {
        return vec![points.to_vec()];
    }

    let last = points.len() - 1;
    let mut segments = Vec::new();
    let mut start = 0;
    for (k, &run) in pattern.iter().cycle().enumerate() {
        if start >= last {
            break;
        }
        let end = (start + run.max(1)).min(last);
        if k % 2 == 0 {
            segments.push(points[start..=end].to_vec());
        }
        start = end;
    }
    segments
}

/// y-axis span: the shaded bands plus every curve value, padded by 5%.
fn potential_range(diagram: &PourbaixDiagram, options: &DiagramOptions) -> (f64, f64) {
    let (lo, hi) = diagram
        .curves
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold((options.band_floor, options.band_ceiling), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if (hi - lo).abs() < 1e-10 {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::calculator::compute_diagram;
    use crate::models::DiagramRequest;

    fn iron_diagram(potentials: [f64; 5]) -> PourbaixDiagram {
        compute_diagram(
            &DiagramRequest::new("Iron", potentials),
            &DiagramOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn svg_contains_title_and_legend() {
        let d = iron_diagram([-0.44, 0.77, -0.05, 0.02, -0.08]);
        let svg = render_svg(&d, &DiagramOptions::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Pourbaix Diagram for Iron"));
        for label in ["Protection", "Corrosion", "Passivation", "Iron Fe2+", "Iron Fe3O4"] {
            assert!(svg.contains(label), "missing {label}");
        }
    }

    #[test]
    fn inverted_band_still_renders() {
        let d = iron_diagram([0.1, 0.77, -0.3, 0.02, -0.08]);
        assert!(render_svg(&d, &DiagramOptions::default()).is_ok());
    }

    #[test]
    fn dashes_cover_the_line_in_runs() {
        let points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 0.0)).collect();
        let segs = dash_segments(&points, &[2, 1]);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], points[0..=2].to_vec());
        assert_eq!(segs[1], points[3..=5].to_vec());
        assert_eq!(segs[2], points[6..=8].to_vec());

        let solid = dash_segments(&points, Stroke::Solid.pattern());
        assert_eq!(solid, vec![points.clone()]);
    }

    #[test]
    fn range_covers_bands_and_curves() {
        let d = iron_diagram([-0.44, 3.0, -0.05, 0.02, -0.08]);
        let (lo, hi) = potential_range(&d, &DiagramOptions::default());
        assert!(lo < -2.0);
        assert!(hi > 3.0);
    }
}
