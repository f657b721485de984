//! Diagram model: pH sampling, equilibrium curves, thresholds and regions.

pub mod calculator;
pub mod regions;
