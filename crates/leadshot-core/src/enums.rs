//! Enumeration types shared across the solver crates.

use serde::{Deserialize, Serialize};

/// Which intercept solver a shooter uses.
///
/// Chosen per shooter instance by external configuration; the solvers
/// themselves never select among variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimStrategy {
    /// Constant-speed straight shot, no gravity.
    #[default]
    Flat,
    /// Straight shot with vertical gravity compensation over the flight time.
    Gravity,
    /// Ground-plane intercept; aims at the 2D impact point.
    Planar,
    /// Parabolic lob over a fixed arc apex height.
    Lob,
}
