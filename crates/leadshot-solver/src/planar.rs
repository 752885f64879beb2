//! Ground-plane intercept — reports where to aim, not how to launch.
//!
//! Works entirely in the horizontal plane: vertical components of position
//! and velocity are dropped. Solves the expanded-coordinate quadratic
//! `(|v_t|² − s²)·t² + 2·(v_t·Δ)·t + |Δ|² = 0` and reports the target's
//! position at the chosen impact time. Unlike the straight-shot solvers
//! this variant never guesses: no positive real root means no answer.

use glam::DVec3;

use leadshot_core::types::InterceptQuery;

use crate::quadratic::{intercept_time, TimeSolution};

/// Ground-plane impact point for a shot at the query's projectile speed,
/// or `None` when no intercept exists. An already-overlapping pair has no
/// strictly positive impact time and also reports `None`.
///
/// The returned point lies in the z = 0 plane.
pub fn intercept_point(query: &InterceptQuery) -> Option<DVec3> {
    let delta = query.displacement().truncate();
    let target_vel = query.target_velocity.truncate();

    let a = target_vel.length_squared() - query.projectile_speed * query.projectile_speed;
    let b = 2.0 * target_vel.dot(delta);
    let c = delta.length_squared();

    match intercept_time(a, b, c) {
        TimeSolution::Solved(t) if t > 0.0 => {
            let impact = query.target_position.truncate() + target_vel * t;
            Some(impact.extend(0.0))
        }
        _ => None,
    }
}
