//! Core types and definitions for the LEADSHOT intercept solvers.
//!
//! This crate defines the vocabulary shared by the solver crate:
//! the intercept query bundle, the strategy selection enum, and tuning
//! constants. It has no dependency on any runtime framework.

pub mod constants;
pub mod enums;
pub mod types;
