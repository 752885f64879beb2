//! Solver constants and tuning parameters.

/// Standard gravity magnitude (m/s²), applied straight down (−Z).
/// Sampled once; solvers never read a live physics environment.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Coefficient magnitude below which the governing quadratic is treated
/// as degenerate (linear or constant).
pub const QUADRATIC_EPSILON: f64 = 1e-6;

/// Threshold below which a time-to-impact root does not count as
/// strictly positive.
pub const TIME_EPSILON: f64 = 1e-9;

// --- Wild-guess fallback ---

/// Lower bound of the wild-guess impact time (seconds).
pub const WILD_GUESS_MIN_SECS: f64 = 1.0;

/// Upper bound of the wild-guess impact time (seconds).
pub const WILD_GUESS_MAX_SECS: f64 = 5.0;
