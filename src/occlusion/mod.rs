//! Layer 1: Visibility Determination (pure geometry)
//!
//! This module maps window offsets to discrete angle buckets and classifies
//! the pixels around a viewer as lit or shadowed in a single outward sweep.

pub mod sweeping;

pub use sweeping::{AngleTable, DIRECTIONS, OcclusionBuffer, spiral, sweep};
