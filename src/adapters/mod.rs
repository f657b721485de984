#[cfg(feature = "render")]
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "std")]
pub mod prompt;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs, print_metals, print_output, warn_if_inverted};
    use crate::diagram::calculator::{compute_diagram, summarize};

    let args = Args::parse();
    if args.list_metals {
        print_metals();
        return Ok(());
    }

    let (request, options) = parse_inputs(&args)?;

    let diagram = compute_diagram(&request, &options)?;
    let out = summarize(&diagram, &options);

    warn_if_inverted(&out, &args);
    print_output(&out, &args)?;

    #[cfg(feature = "render")]
    if let Some(path) = &args.chart {
        let svg = chart::render_svg(&diagram, &options)?;
        std::fs::write(path, svg).map_err(|source| crate::error::AppError::WriteChart {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}
