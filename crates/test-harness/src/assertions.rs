//! Assertion helpers that report expected vs actual with context.

use mesh_types::Dimensions;

use crate::helpers::HarnessError;

/// Assert `actual` is within `tol` of `expected`.
pub fn assert_close(actual: f64, expected: f64, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {:.6}, got {:.6} (tol={})",
                ctx, expected, actual, tol
            ),
        })
    }
}

/// Assert each bounding-box extent matches within `tol`.
pub fn assert_dimensions(
    actual: &Dimensions,
    expected: [f64; 3],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let got = [actual.x, actual.y, actual.z];
    for (axis, name) in ["x", "y", "z"].iter().enumerate() {
        assert_close(got[axis], expected[axis], tol, &format!("{} {}", ctx, name))?;
    }
    Ok(())
}

/// Assert a value is finite and not negative.
pub fn assert_finite_non_negative(value: f64, ctx: &str) -> Result<(), HarnessError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected finite non-negative value, got {}", ctx, value),
        })
    }
}
