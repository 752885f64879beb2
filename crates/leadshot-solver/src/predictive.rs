//! Straight-shot predictive aim — flat and gravity-compensated variants.
//!
//! Derivation follows the law of cosines: with A the target-to-shooter
//! distance, B the distance the target covers before impact and C the
//! distance the projectile covers, `A² + B² − 2·A·B·cos(θ) = C²` expands
//! into a quadratic in the impact time t with
//! `a = s_p² − s_t²`, `b = 2·d·s_t·cos(θ)`, `c = −d²`.

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use leadshot_core::constants::{WILD_GUESS_MAX_SECS, WILD_GUESS_MIN_SECS};
use leadshot_core::types::InterceptQuery;

use crate::quadratic::{intercept_time, TimeSolution};

/// Launch vector for a constant-speed, gravity-free shot.
///
/// The returned vector points where the shot must leave the muzzle to meet
/// the target; its magnitude equals the query's projectile speed exactly
/// when an analytic intercept exists. When none does (the target can
/// outrun the shot) the impact time is wild-guessed and the magnitude is
/// only approximate, but a finite vector comes back for every query.
pub fn launch_vector(query: &InterceptQuery, rng: &mut ChaCha8Rng) -> DVec3 {
    let flat = InterceptQuery {
        gravity: 0.0,
        ..*query
    };
    launch_vector_with_gravity(&flat, rng)
}

/// Launch vector with vertical gravity compensation over the flight time.
///
/// Time-to-impact comes from the same zero-gravity quadratic as
/// [`launch_vector`]; the result then gains `0.5·g·t` of upward velocity
/// to cancel the drop. The projectile effectively gets that compensation
/// for free, so the vector's magnitude exceeds the requested speed and the
/// true flight time drifts slightly from the solved t. Deliberate
/// approximation; exact whenever `gravity` is zero.
pub fn launch_vector_with_gravity(query: &InterceptQuery, rng: &mut ChaCha8Rng) -> DVec3 {
    debug_assert!(
        query.projectile_speed > 0.0,
        "shooting with a projectile that doesn't move"
    );
    if query.origin == query.target_position {
        // Zero relative distance: no aim direction is better than any other.
        return query.projectile_speed * random_unit_vector(rng);
    }

    let projectile_speed_sq = query.projectile_speed * query.projectile_speed;
    let target_speed_sq = query.target_velocity.length_squared();
    let target_speed = target_speed_sq.sqrt();
    let target_to_origin = query.origin - query.target_position;
    let dist_sq = target_to_origin.length_squared();
    let dist = dist_sq.sqrt();

    // cos(θ) between the target-to-shooter bearing and the target heading;
    // zero for a stationary target.
    let cos_theta = if target_speed > 0.0 {
        target_to_origin.dot(query.target_velocity) / (dist * target_speed)
    } else {
        0.0
    };

    let a = projectile_speed_sq - target_speed_sq;
    let b = 2.0 * dist * target_speed * cos_theta;
    let c = -dist_sq;

    // A zero root (near-colocated degenerate) is unusable here: the
    // back-substitution divides by t. Only a strictly positive impact
    // time counts; anything else takes a wild shot at the target's
    // extrapolated position a few seconds out.
    let t = match intercept_time(a, b, c) {
        TimeSolution::Solved(t) if t > 0.0 => t,
        _ => wild_guess_impact_time(rng),
    };

    // v = v_target − 0.5·a_projectile·t + Δ/t
    let projectile_accel = query.gravity * -DVec3::Z;
    query.target_velocity - 0.5 * projectile_accel * t - target_to_origin / t
}

/// Impact time guess used when the target can outrun the shot: a few
/// seconds out, randomized so repeated misses don't all aim at the same
/// extrapolated point.
fn wild_guess_impact_time(rng: &mut ChaCha8Rng) -> f64 {
    rng.gen_range(WILD_GUESS_MIN_SECS..WILD_GUESS_MAX_SECS)
}

/// Uniformly distributed direction on the unit sphere.
fn random_unit_vector(rng: &mut ChaCha8Rng) -> DVec3 {
    // Archimedes' hat-box: z uniform in [-1, 1], azimuth uniform in [0, τ).
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let azimuth: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let r = (1.0 - z * z).sqrt();
    DVec3::new(r * azimuth.cos(), r * azimuth.sin(), z)
}
