use std::io::{BufRead, Write};

use crate::error::AppError;
use crate::metals::{METALS, find_metal_capitalized};
use crate::models::DiagramRequest;

/// Interactive console front-end: asks for the metal name, then one
/// potential per species.
///
/// The metal name is capitalized before lookup, so `iron` selects `Iron`;
/// an unknown name fails with `UnsupportedMetal`. Prompts go to `output`,
/// answers are read line by line from `input`.
pub fn prompt_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<DiagramRequest, AppError> {
    let names: Vec<&str> = METALS.iter().map(|m| m.name).collect();
    let raw = ask(
        input,
        output,
        &format!("Enter metal name ({}): ", names.join(", ")),
        "the metal name",
    )?;
    let metal = find_metal_capitalized(&raw)?;

    writeln!(output, "Enter the following potential values:")
        .map_err(|source| AppError::Prompt { source })?;

    let mut potentials = Vec::with_capacity(metal.species_count());
    for species in metal.species() {
        let answer = ask(
            input,
            output,
            &format!("Enter {} ({}) potential: ", metal.name, species),
            &format!("the {species} potential"),
        )?;
        let value = answer
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AppError::InvalidPotential {
                species: species.into(),
                value: answer.clone(),
            })?;
        potentials.push(value);
    }

    Ok(DiagramRequest::new(metal.name, potentials))
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &str,
) -> Result<String, AppError> {
    write!(output, "{prompt}").map_err(|source| AppError::Prompt { source })?;
    output.flush().map_err(|source| AppError::Prompt { source })?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .map_err(|source| AppError::Prompt { source })?;
    if n == 0 {
        return Err(AppError::UnexpectedEof { what: what.into() });
    }
    Ok(line.trim().to_string())
}
