//! Presentation helpers for monetary values.
//!
//! Amounts are stored with full precision; rounding to cents happens only
//! when a value leaves the engine for display.

/// Round a monetary value to two decimals (half away from zero).
///
/// ```rust
/// use engine::round_cents;
///
/// assert_eq!(round_cents(10.004), 10.0);
/// assert_eq!(round_cents(35.0), 35.0);
/// assert_eq!(round_cents(-1.256), -1.26);
/// ```
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_cents(0.0), 0.0);
        assert_eq!(round_cents(19.999), 20.0);
        assert_eq!(round_cents(42.5), 42.5);
        assert_eq!(round_cents(1.234), 1.23);
    }
}
