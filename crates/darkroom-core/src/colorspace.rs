//! Luminance and sRGB transfer helpers shared by the color transforms.

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.0722;

/// Calculate luminance from normalized RGB values (0.0 to 1.0).
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Decode an sRGB-encoded channel value to linear light.
///
/// Negative inputs are mirrored so out-of-gamut intermediates survive a
/// round trip.
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    let a = v.abs();
    let lin = if a <= 0.04045 {
        a / 12.92
    } else {
        ((a + 0.055) / 1.055).powf(2.4)
    };
    lin.copysign(v)
}

/// Encode a linear-light channel value with the sRGB transfer curve.
#[inline]
pub fn linear_to_srgb(v: f32) -> f32 {
    let a = v.abs();
    let enc = if a <= 0.003_130_8 {
        a * 12.92
    } else {
        1.055 * a.powf(1.0 / 2.4) - 0.055
    };
    enc.copysign(v)
}

/// Smootherstep interpolation: `6t^5 - 15t^4 + 10t^3` with `t` clamped to 0..1.
#[inline]
pub fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINANCE_R + LUMINANCE_G + LUMINANCE_B;
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_luminance_gray_is_gray() {
        assert!((luminance(0.4, 0.4, 0.4) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_srgb_round_trip() {
        for i in 0..=255 {
            let v = i as f32 / 255.0;
            let back = linear_to_srgb(srgb_to_linear(v));
            assert!((back - v).abs() < 1e-4, "round trip drifted at {}", i);
        }
    }

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_srgb_midtone_is_darker_in_linear() {
        assert!(srgb_to_linear(0.5) < 0.25);
    }

    #[test]
    fn test_negative_values_mirror() {
        assert!((srgb_to_linear(-0.5) + srgb_to_linear(0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_smootherstep_shape() {
        assert_eq!(smootherstep(0.0), 0.0);
        assert_eq!(smootherstep(1.0), 1.0);
        assert!((smootherstep(0.5) - 0.5).abs() < f32::EPSILON);
        assert_eq!(smootherstep(-1.0), 0.0);
        assert_eq!(smootherstep(2.0), 1.0);
    }
}
