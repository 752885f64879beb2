//! Shot configuration and the aim seam between solvers and the projectile
//! launcher.
//!
//! Strategy selection is external per-shooter configuration; this module
//! only dispatches and applies the caller-side failure policy: an absent
//! solution or a non-finite component is replaced by the shooter's forward
//! axis at launch speed, so the launcher never receives an invalid impulse.

use glam::DVec3;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use leadshot_core::enums::AimStrategy;
use leadshot_core::types::InterceptQuery;

use crate::{lob, planar, predictive};

/// Per-shooter aiming configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotConfig {
    /// Which solver variant this shooter uses.
    pub strategy: AimStrategy,
    /// Launch speed (m/s) for the fixed-speed strategies, and the fallback
    /// impulse magnitude for all of them.
    pub projectile_speed: f64,
    /// Gravity magnitude for [`AimStrategy::Gravity`] (m/s², positive down).
    pub gravity: f64,
    /// Arc apex height for [`AimStrategy::Lob`] when shooter and target
    /// are level (meters).
    pub apex_height: Option<f64>,
}

impl ShotConfig {
    /// Flat-solver configuration at the given launch speed.
    pub fn flat(projectile_speed: f64) -> Self {
        Self {
            strategy: AimStrategy::Flat,
            projectile_speed,
            gravity: 0.0,
            apex_height: None,
        }
    }
}

/// Compute the launch vector for one shot.
///
/// `forward` is the shooter's muzzle axis (non-zero), used only when the
/// selected solver fails.
pub fn aim(
    config: &ShotConfig,
    origin: DVec3,
    forward: DVec3,
    target_position: DVec3,
    target_velocity: DVec3,
    rng: &mut ChaCha8Rng,
) -> DVec3 {
    let query = InterceptQuery::flat(
        origin,
        config.projectile_speed,
        target_position,
        target_velocity,
    );

    let solution = match config.strategy {
        AimStrategy::Flat => Some(predictive::launch_vector(&query, rng)),
        AimStrategy::Gravity => Some(predictive::launch_vector_with_gravity(
            &query.with_gravity(config.gravity),
            rng,
        )),
        // The planar solver yields an impact point; aim level at it.
        AimStrategy::Planar => planar::intercept_point(&query).map(|impact| {
            let level_origin = DVec3::new(origin.x, origin.y, 0.0);
            (impact - level_origin).normalize() * config.projectile_speed
        }),
        AimStrategy::Lob => lob::launch_velocity(target_position - origin, config.apex_height),
    };

    match solution {
        Some(v) if v.is_finite() => v,
        _ => forward.normalize() * config.projectile_speed,
    }
}
