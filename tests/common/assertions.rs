//! Test assertion helpers
//!
//! Footprints are sums of float products, so exact comparisons are avoided.

/// Assert that two floating-point values are approximately equal
///
/// # Examples
///
/// ```ignore
/// assert_approx_eq(total, 2.8528, 1e-6);
/// ```
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert a JSON number field is approximately `expected`
#[allow(dead_code)]
pub fn assert_json_approx(value: &serde_json::Value, expected: f64, epsilon: f64) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {}", value));
    assert_approx_eq(actual, expected, epsilon);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_within_epsilon() {
        assert_approx_eq(3.34, 3.3400001, 1e-6);
    }

    #[test]
    #[should_panic(expected = "not approximately equal")]
    fn test_assert_approx_eq_outside_epsilon() {
        assert_approx_eq(3.34, 3.3, 1e-6);
    }
}
