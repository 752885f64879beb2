//! Fundamental solver input types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Immutable input bundle for one intercept solve.
///
/// Positions are meters in a z-up Cartesian frame (x = East, y = North,
/// z = Up); velocities are m/s. A query has no identity beyond its values
/// and is rebuilt at every decision point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterceptQuery {
    /// Muzzle position of the shooter.
    pub origin: DVec3,
    /// Shooter velocity. Inheriting shooter motion into the projectile is
    /// deferred; callers currently pass zero and the solvers ignore it.
    pub origin_velocity: DVec3,
    /// Target position at the moment of the solve.
    pub target_position: DVec3,
    /// Target velocity, assumed constant until impact.
    pub target_velocity: DVec3,
    /// Launch speed of the projectile (m/s). Must be positive for a
    /// meaningful solve.
    pub projectile_speed: f64,
    /// Gravity magnitude (m/s², positive = straight down). Zero disables
    /// gravity compensation.
    pub gravity: f64,
}

impl InterceptQuery {
    /// Query for a flat (no gravity) solve against a moving target.
    pub fn flat(
        origin: DVec3,
        projectile_speed: f64,
        target_position: DVec3,
        target_velocity: DVec3,
    ) -> Self {
        Self {
            origin,
            origin_velocity: DVec3::ZERO,
            target_position,
            target_velocity,
            projectile_speed,
            gravity: 0.0,
        }
    }

    /// Same query with gravity compensation enabled.
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Displacement from shooter to target.
    pub fn displacement(&self) -> DVec3 {
        self.target_position - self.origin
    }

    /// Straight-line distance from shooter to target in meters.
    pub fn range(&self) -> f64 {
        self.displacement().length()
    }
}
