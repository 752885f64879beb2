//! Predictive intercept solvers for LEADSHOT.
//!
//! Four independent, side-effect-free solvers over a shared quadratic
//! time-to-impact primitive, plus the aim seam that dispatches to one
//! solver per shooter configuration and applies the caller-side failure
//! policy.

pub mod launcher;
pub mod lob;
pub mod planar;
pub mod predictive;
pub mod quadratic;

pub use launcher::{aim, ShotConfig};
pub use leadshot_core as core;
