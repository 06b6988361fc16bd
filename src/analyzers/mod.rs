//! Temporal aggregation of temperature records.
//!
//! This module family turns per-month place records into yearly series,
//! recording-era buckets, least-squares trend fits, and the render-ready
//! chart and digest payloads consumed by the plotting layer.

pub mod chart;
pub mod digest;
pub mod eras;
pub mod trend;
pub mod types;
pub mod utility;
pub mod yearly;
