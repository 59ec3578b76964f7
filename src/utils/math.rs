//! Small DSP math helpers

use std::f64::consts::TAU;

/// Normalize angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    // -tiny % TAU + TAU rounds up to TAU itself
    if a >= TAU {
        a -= TAU;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(0.0) - 0.0).abs() < 1e-10);
        assert!((normalize_angle(2.0 * PI) - 0.0).abs() < 1e-10);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-10);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_angle_tiny_negative() {
        let a = normalize_angle(-1e-18);
        assert!((0.0..TAU).contains(&a), "angle {} escaped range", a);
    }
}
