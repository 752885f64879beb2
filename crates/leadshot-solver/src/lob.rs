//! Lob-trajectory calculator — fixed arc apex instead of fixed speed.
//!
//! Closed-form parabolic launch under standard gravity. Two supported
//! geometries: shooter level with the target (caller supplies the desired
//! apex height), and shooter strictly above the target (flat launch, speed
//! set by the fall time). Shooter below the target is unsupported and
//! reports `None`. Malformed inputs (zero range with a nonzero apex and
//! the like) propagate NaN components — the documented "no valid arc"
//! signal — rather than being coerced into a plausible answer.

use glam::DVec3;

use leadshot_core::constants::STANDARD_GRAVITY;

/// Launch velocity along a parabolic arc covering `to_target`.
///
/// `apex_height` is the peak height of the arc above the launch point. It
/// is required when shooter and target are level and ignored otherwise.
pub fn launch_velocity(to_target: DVec3, apex_height: Option<f64>) -> Option<DVec3> {
    if to_target.z != 0.0 {
        if to_target.z < 0.0 {
            Some(downward_launch(to_target))
        } else {
            // Lobbing uphill needs a different derivation; unsupported.
            None
        }
    } else {
        debug_assert!(
            apex_height.is_some(),
            "level launch needs an apex height, to_target: {to_target}"
        );
        let apex = apex_height?;
        Some(level_launch(to_target, apex))
    }
}

/// Level-with-target arc: elevation angle from the apex constraint
/// `tan(θ) = 4·h/r`, speed from the range equation `r = v²·sin(2θ)/g`.
fn level_launch(to_target: DVec3, apex_height: f64) -> DVec3 {
    let range = to_target.truncate().length();
    let elevation = (4.0 * apex_height / range).atan();
    let speed = (range * STANDARD_GRAVITY / (2.0 * elevation).sin()).sqrt();
    from_horizontal(
        to_target,
        speed * elevation.cos(),
        speed * elevation.sin(),
    )
}

/// Shooter-above-target arc: launch flat and let the fall close the height
/// gap, `v = r·sqrt(g / (2·h))`. A positive fall height is guaranteed by
/// the caller's branch.
fn downward_launch(to_target: DVec3) -> DVec3 {
    let height = -to_target.z;
    debug_assert!(height > 0.0, "flat launch only valid above the target");
    let range = to_target.truncate().length();
    let horizontal = range * (STANDARD_GRAVITY / (2.0 * height)).sqrt();
    from_horizontal(to_target, horizontal, 0.0)
}

/// Rebuild a 3D vector from the horizontal bearing to the target plus
/// horizontal and vertical speed components.
fn from_horizontal(to_target: DVec3, horizontal_speed: f64, vertical_speed: f64) -> DVec3 {
    let bearing = to_target.y.atan2(to_target.x);
    DVec3::new(
        horizontal_speed * bearing.cos(),
        horizontal_speed * bearing.sin(),
        vertical_speed,
    )
}
