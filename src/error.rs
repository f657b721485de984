use alloc::string::String;
use thiserror::Error;

/// Errors from the diagram model itself. Available without `std`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagramError {
    #[error("Unsupported metal: '{name}'")]
    UnsupportedMetal { name: String },

    #[error("{metal} needs {expected} potentials (one per species), got {found}")]
    PotentialCountMismatch {
        metal: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Potential for {species} must be a finite number, got {value}")]
    NonFinitePotential { species: &'static str, value: f64 },

    #[error("Invalid pH grid: {reason}")]
    InvalidGrid { reason: &'static str },

    #[error("Equilibrium line {index} has no samples")]
    EmptyCurve { index: usize },
}

// std-Variante: application errors for the front-ends
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --request-json: {source}")]
    ParseRequestJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --options-json: {source}")]
    ParseOptionsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Console I/O failed: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    #[error("Input ended before {what} was entered")]
    UnexpectedEof { what: String },

    #[error("Invalid potential for {species}: '{value}' is not a finite number")]
    InvalidPotential { species: String, value: String },

    #[cfg(feature = "render")]
    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[cfg(feature = "render")]
    #[error("Error writing chart '{path}': {source}")]
    WriteChart {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing request: provide --metal/--potentials, --request-json, --input or --interactive")]
    MissingRequest,
}
