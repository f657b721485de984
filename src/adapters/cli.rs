use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::adapters::prompt::prompt_request;
use crate::diagram::calculator::DiagramSummary;
use crate::error::AppError;
use crate::metals::METALS;
use crate::models::{DiagramOptions, DiagramRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pourbaix diagram generator: corrosion thresholds from equilibrium potentials", long_about = None)]
pub struct Args {
    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,
    #[arg(long, help = "Suppress warnings on stderr")]
    pub quiet: bool,
    #[arg(long, help = "List supported metals and their species, then exit")]
    pub list_metals: bool,
    #[arg(long, help = "Prompt for the metal and potentials on the console")]
    pub interactive: bool,
    #[arg(
        long,
        value_name = "NAME",
        help = "Metal name, case-sensitive (default: Iron when --potentials is given)"
    )]
    pub metal: Option<String>,
    #[arg(
        long,
        value_name = "P0,P1,...",
        value_delimiter = ',',
        allow_hyphen_values = true,
        help = "Equilibrium potentials in V, one per species"
    )]
    pub potentials: Option<Vec<f64>>,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with a request and optional options; '-' reads from stdin"
    )]
    pub input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for the request (overrides --input and --metal/--potentials)"
    )]
    pub request_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for diagram options (overrides options in the input document)"
    )]
    pub options_json: Option<String>,
    #[cfg(feature = "render")]
    #[arg(long, value_name = "FILE", help = "Write the diagram as an SVG chart")]
    pub chart: Option<String>,
}

#[derive(serde::Deserialize)]
struct CmdInput {
    request: DiagramRequest,
    #[serde(default)]
    options: Option<DiagramOptions>,
}

fn parse_cmd_input_doc(doc: &str) -> Result<(DiagramRequest, Option<DiagramOptions>), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.request, parsed.options))
}

fn read_input_doc(path: &str) -> Result<String, AppError> {
    if path == "-" {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .map_err(|source| AppError::ReadStdin { source })?;
        Ok(s)
    } else {
        fs::read_to_string(path).map_err(|source| AppError::ReadFile {
            path: path.to_string(),
            source,
        })
    }
}

/// Resolve the request and options from the command line.
///
/// Request sources, first match wins: `--interactive`, `--request-json`,
/// `--input`, `--metal`/`--potentials`. Options come from `--options-json`,
/// then the input document, then [`DiagramOptions::default`].
pub fn parse_inputs(args: &Args) -> Result<(DiagramRequest, DiagramOptions), AppError> {
    let (request, doc_options) = match (&args.request_json, &args.input, &args.potentials) {
        _ if args.interactive => {
            let stdin = io::stdin();
            let request = prompt_request(&mut stdin.lock(), &mut io::stdout())?;
            (request, None)
        }
        (Some(json), _, _) => {
            let request: DiagramRequest = serde_json::from_str(json)
                .map_err(|source| AppError::ParseRequestJson { source })?;
            (request, None)
        }
        (None, Some(path), _) => parse_cmd_input_doc(&read_input_doc(path)?)?,
        (None, None, Some(potentials)) => {
            let metal = args.metal.clone().unwrap_or_else(|| "Iron".to_string());
            (DiagramRequest::new(metal, potentials.clone()), None)
        }
        (None, None, None) => return Err(AppError::MissingRequest),
    };

    let options = match &args.options_json {
        Some(s) => serde_json::from_str::<DiagramOptions>(s)
            .map_err(|source| AppError::ParseOptionsJson { source })?,
        None => doc_options.unwrap_or_default(),
    };

    Ok((request, options))
}

pub fn print_metals() {
    for metal in METALS {
        let species: Vec<&str> = metal.species().collect();
        println!("{}: {}", metal.name, species.join(", "));
    }
}

pub fn print_output(out: &DiagramSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        println!("--- Conclusion ---");
        println!("{}", out.conclusion);
    }

    Ok(())
}

pub fn warn_if_inverted(out: &DiagramSummary, args: &Args) {
    if out.corrosion_band_inverted && !args.quiet {
        eprintln!(
            "warning: passivation threshold {:.2} V is below protection threshold {:.2} V; the corrosion band is inverted",
            out.passivation_min, out.protection_max
        );
    }
}
