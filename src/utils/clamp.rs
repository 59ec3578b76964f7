//! Saturation and quantization helpers for codec samples

/// Saturate `value` at an upper `limit`
///
/// Anything not strictly below the limit (including NaN) collapses onto it.
#[inline]
pub fn saturate_at(value: f64, limit: f64) -> f64 {
    if value < limit {
        value
    } else {
        limit
    }
}

/// Convert a voltage to a channel sample, truncating toward zero
///
/// Out-of-range voltages saturate at the `i16` rails.
#[inline]
pub fn quantize_volts(volts: f64, volts_per_lsb: f64) -> i16 {
    let val = volts / volts_per_lsb;
    if val >= 32767.0 {
        32767
    } else if val <= -32768.0 {
        -32768
    } else {
        val as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_below_limit() {
        assert_eq!(saturate_at(1.0, 1.65), 1.0);
        assert_eq!(saturate_at(-5.0, 1.65), -5.0);
    }

    #[test]
    fn test_saturate_at_or_above_limit() {
        assert_eq!(saturate_at(1.65, 1.65), 1.65);
        assert_eq!(saturate_at(10.0, 1.65), 1.65);
        assert_eq!(saturate_at(f64::NAN, 1.65), 1.65);
    }

    #[test]
    fn test_quantize_truncates() {
        assert_eq!(quantize_volts(0.0, 0.001), 0);
        assert_eq!(quantize_volts(0.0125, 0.001), 12);
        assert_eq!(quantize_volts(-0.0125, 0.001), -12);
    }

    #[test]
    fn test_quantize_overflow() {
        assert_eq!(quantize_volts(40.0, 0.001), 32767);
        assert_eq!(quantize_volts(-40.0, 0.001), -32768);
    }
}
