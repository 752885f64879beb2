//! Shared quadratic time-to-impact primitive.
//!
//! Every intercept variant reduces to solving `a·t² + b·t + c = 0` for the
//! earliest physically meaningful impact time. Root selection is uniform
//! across solvers: the smallest strictly positive root wins, the larger
//! root stands in when the smaller is non-positive, and anything else is a
//! failure the caller maps to its own fallback policy.

use leadshot_core::constants::{QUADRATIC_EPSILON, TIME_EPSILON};

/// Outcome of solving for time-to-impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSolution {
    /// A usable root. Strictly positive except in the already-overlapping
    /// case (`a ≈ b ≈ c ≈ 0`), which reports zero.
    Solved(f64),
    /// Negative discriminant, or real roots with none in the future.
    NoRealRoot,
    /// `a ≈ 0` and `b ≈ 0` with `c` nonzero: the equation has no time
    /// dependence at all.
    Degenerate,
}

impl TimeSolution {
    /// The chosen root, if one was found.
    pub fn time(self) -> Option<f64> {
        match self {
            TimeSolution::Solved(t) => Some(t),
            _ => None,
        }
    }
}

/// Solve `a·t² + b·t + c = 0` for the earliest impact time.
pub fn intercept_time(a: f64, b: f64, c: f64) -> TimeSolution {
    if a.abs() < QUADRATIC_EPSILON {
        if b.abs() < QUADRATIC_EPSILON {
            // No time dependence; the only way to "hit" is to already
            // be overlapping.
            if c.abs() < QUADRATIC_EPSILON {
                return TimeSolution::Solved(0.0);
            }
            return TimeSolution::Degenerate;
        }
        // Linear: a single (repeated) root.
        let t = -c / b;
        if t > TIME_EPSILON {
            return TimeSolution::Solved(t);
        }
        return TimeSolution::NoRealRoot;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        // Imaginary roots: the target outruns every straight shot.
        return TimeSolution::NoRealRoot;
    }

    let root = discriminant.sqrt();
    let t0 = 0.5 * (-b + root) / a;
    let t1 = 0.5 * (-b - root) / a;

    // Earliest hit first; the later root stands in when the earlier one
    // is in the past.
    let mut t = t0.min(t1);
    if t < TIME_EPSILON {
        t = t0.max(t1);
    }
    if t < TIME_EPSILON {
        // Time can't flow backwards when it comes to aiming.
        return TimeSolution::NoRealRoot;
    }
    TimeSolution::Solved(t)
}
