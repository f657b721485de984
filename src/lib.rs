#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod adapters;
pub mod diagram;
pub mod error;
pub mod metals;
pub mod models;

pub use crate::diagram::calculator::{
    CurveSet, DiagramSummary, PourbaixDiagram, compute_diagram, compute_summary, conclusion,
    derive_thresholds, evaluate_curves, sample_grid, summarize,
};
pub use crate::diagram::regions::{Band, Region, Thresholds, bands, classify};
#[cfg(feature = "std")]
pub use crate::error::AppError;
pub use crate::error::DiagramError;
pub use crate::metals::{IRON, METALS, MetalProfile, find_metal, find_metal_capitalized};
pub use crate::models::{DiagramOptions, DiagramRequest};
