//! Tolerance used when comparing floating point measurements.

/// Two values closer than this are considered equal by [`is_near`].
pub const NEAR_DELTA: f64 = 0.00001;

/// Returns true if `a` and `b` differ by strictly less than [`NEAR_DELTA`].
pub fn is_near(a: f64, b: f64) -> bool {
    (a - b).abs() < NEAR_DELTA
}
