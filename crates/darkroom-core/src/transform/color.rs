//! Per-pixel color transforms.
//!
//! Each public function maps a whole canvas; the math lives in small
//! `#[inline]` per-pixel helpers working on normalized RGB (0.0 to 1.0).
//! Values may leave that range inside a stage; [`super::Transform::apply`]
//! clamps the result before the next stage sees it.

use super::{ColorControls, PhotoEffect};
use crate::canvas::Canvas;
use crate::colorspace::{linear_to_srgb, luminance, srgb_to_linear};

/// Apply brightness, contrast and saturation in one pass.
///
/// Order inside the stage: saturation, brightness, contrast.
pub fn color_controls(input: &Canvas, controls: &ColorControls) -> Canvas {
    if controls.is_identity() {
        return input.clone();
    }
    let c = *controls;
    input.map_pixels(move |r, g, b| {
        let (r, g, b) = apply_saturation(r, g, b, c.saturation);
        let (r, g, b) = (r + c.brightness, g + c.brightness, b + c.brightness);
        apply_contrast(r, g, b, c.contrast)
    })
}

/// Apply an exposure shift of `ev` stops in linear light.
///
/// Formula: `output = encode(decode(input) * 2^ev)`
pub fn exposure_adjust(input: &Canvas, ev: f32) -> Canvas {
    if ev == 0.0 {
        return input.clone();
    }
    let multiplier = 2.0_f32.powf(ev);
    input.map_pixels(move |r, g, b| {
        (
            linear_to_srgb(srgb_to_linear(r) * multiplier),
            linear_to_srgb(srgb_to_linear(g) * multiplier),
            linear_to_srgb(srgb_to_linear(b) * multiplier),
        )
    })
}

/// Rotate hue by `angle` radians, preserving luminance.
pub fn hue_adjust(input: &Canvas, angle: f32) -> Canvas {
    if angle == 0.0 {
        return input.clone();
    }
    let m = hue_rotation_matrix(angle);
    input.map_pixels(move |r, g, b| apply_matrix(&m, r, g, b))
}

/// Blend toward a sepia tone by `intensity` (0 = unchanged, 1 = full sepia).
pub fn sepia_tone(input: &Canvas, intensity: f32) -> Canvas {
    input.map_pixels(move |r, g, b| {
        let (sr, sg, sb) = apply_matrix(&SEPIA, r, g, b);
        (
            r + (sr - r) * intensity,
            g + (sg - g) * intensity,
            b + (sb - b) * intensity,
        )
    })
}

/// Apply one of the fixed photo effects.
pub fn photo_effect(input: &Canvas, effect: PhotoEffect) -> Canvas {
    match effect {
        PhotoEffect::Mono => input.map_pixels(|r, g, b| {
            let l = luminance(r, g, b);
            (l, l, l)
        }),
        PhotoEffect::Noir => input.map_pixels(|r, g, b| {
            let l = luminance(r, g, b);
            // Harder curve than mono with slightly crushed shadows
            let l = (l - 0.5) * 1.3 + 0.5 - 0.02;
            (l, l, l)
        }),
        PhotoEffect::Transfer => input.map_pixels(|r, g, b| {
            let (r, g, b) = apply_matrix(&TRANSFER, r, g, b);
            // Lifted blacks, rolled-off whites
            (r * 0.9 + 0.06, g * 0.9 + 0.05, b * 0.9 + 0.04)
        }),
        PhotoEffect::Chrome => input.map_pixels(|r, g, b| {
            let (r, g, b) = apply_saturation(r, g, b, 1.2);
            apply_contrast(r, g, b, 1.1)
        }),
    }
}

/// Decode sRGB to linear, then apply the `(gain, gamma)` brightness curve.
///
/// Formula: `output = min(1, gain * decode(input)) ^ (1 / gamma)`
pub fn tone_curve_to_linear(input: &Canvas, gain: f32, gamma: f32) -> Canvas {
    let inv_gamma = 1.0 / gamma;
    let curve = move |v: f32| (gain * srgb_to_linear(v)).clamp(0.0, 1.0).powf(inv_gamma);
    input.map_pixels(move |r, g, b| (curve(r), curve(g), curve(b)))
}

/// Classic sepia matrix.
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Warm cross-talk used by the transfer effect.
const TRANSFER: [[f32; 3]; 3] = [
    [0.95, 0.10, 0.00],
    [0.05, 0.85, 0.05],
    [0.00, 0.10, 0.75],
];

/// Luminance-preserving hue rotation matrix.
fn hue_rotation_matrix(angle: f32) -> [[f32; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}

#[inline]
fn apply_matrix(m: &[[f32; 3]; 3], r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    (
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    )
}

/// Mix between luminance gray (0) and the input color (1).
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, saturation: f32) -> (f32, f32, f32) {
    if saturation == 1.0 {
        return (r, g, b);
    }
    let gray = luminance(r, g, b);
    (
        gray + (r - gray) * saturation,
        gray + (g - gray) * saturation,
        gray + (b - gray) * saturation,
    )
}

/// Scale around mid-gray.
///
/// Formula: `output = (input - 0.5) * contrast + 0.5`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, contrast: f32) -> (f32, f32, f32) {
    if contrast == 1.0 {
        return (r, g, b);
    }
    (
        (r - 0.5) * contrast + 0.5,
        (g - 0.5) * contrast + 0.5,
        (b - 0.5) * contrast + 0.5,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use std::f32::consts::PI;

    fn solid(rgb: [u8; 3]) -> Canvas {
        Canvas::from_image(&Image::filled(2, 2, rgb)).unwrap()
    }

    fn first_pixel(canvas: &Canvas) -> [u8; 3] {
        canvas.to_image().pixel(0, 0).unwrap()
    }

    fn controls(brightness: f32, contrast: f32, saturation: f32) -> ColorControls {
        ColorControls {
            brightness,
            contrast,
            saturation,
        }
    }

    // ===== Color Controls =====

    #[test]
    fn test_brightness_adds_bias() {
        let out = color_controls(&solid([100, 100, 100]), &controls(0.2, 1.0, 1.0));
        // 100 + 0.2 * 255 = 151
        assert_eq!(first_pixel(&out), [151, 151, 151]);
    }

    #[test]
    fn test_contrast_spreads_from_midpoint() {
        let out = color_controls(&solid([64, 128, 192]), &controls(0.0, 1.5, 1.0));
        let px = first_pixel(&out);
        assert!(px[0] < 64, "Dark channel should get darker");
        assert!((px[1] as i32 - 128).abs() <= 1, "Mid channel should stay");
        assert!(px[2] > 192, "Bright channel should get brighter");
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let out = color_controls(&solid([200, 50, 100]), &controls(0.0, 1.0, 0.0));
        let px = first_pixel(&out);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    #[test]
    fn test_color_controls_identity() {
        let input = solid([13, 200, 77]);
        assert_eq!(color_controls(&input, &ColorControls::default()), input);
    }

    // ===== Exposure =====

    #[test]
    fn test_exposure_positive_brightens() {
        let out = exposure_adjust(&solid([100, 100, 100]), 1.0);
        assert!(first_pixel(&out)[0] > 100);
    }

    #[test]
    fn test_exposure_one_stop_doubles_linear_light() {
        let out = exposure_adjust(&solid([100, 100, 100]), 1.0);
        let before = srgb_to_linear(100.0 / 255.0);
        let after = srgb_to_linear(first_pixel(&out)[0] as f32 / 255.0);
        assert!((after / before - 2.0).abs() < 0.05);
    }

    #[test]
    fn test_exposure_negative_darkens() {
        let out = exposure_adjust(&solid([180, 180, 180]), -1.0);
        assert!(first_pixel(&out)[0] < 180);
    }

    // ===== Hue =====

    #[test]
    fn test_hue_zero_is_identity() {
        let input = solid([200, 40, 90]);
        assert_eq!(hue_adjust(&input, 0.0), input);
    }

    #[test]
    fn test_hue_rotation_moves_red() {
        let out = hue_adjust(&solid([200, 30, 30]), 2.0 * PI / 3.0);
        let px = first_pixel(&out);
        assert!(px[1] > px[0], "A third turn should move red toward green, got {:?}", px);
    }

    #[test]
    fn test_hue_rotation_leaves_gray() {
        let out = hue_adjust(&solid([128, 128, 128]), 1.3);
        let px = first_pixel(&out);
        for c in px {
            assert!((c as i32 - 128).abs() <= 1);
        }
    }

    #[test]
    fn test_full_turn_returns_original() {
        let input = solid([180, 60, 20]);
        let out = hue_adjust(&input, 2.0 * PI);
        let px = first_pixel(&out);
        assert!((px[0] as i32 - 180).abs() <= 1);
        assert!((px[1] as i32 - 60).abs() <= 1);
        assert!((px[2] as i32 - 20).abs() <= 1);
    }

    // ===== Sepia =====

    #[test]
    fn test_sepia_warms_gray() {
        let out = sepia_tone(&solid([100, 100, 100]), 1.0);
        let px = first_pixel(&out);
        assert!(px[0] > px[1] && px[1] > px[2], "Sepia should be warm: {:?}", px);
    }

    #[test]
    fn test_sepia_zero_intensity_is_identity() {
        let input = solid([10, 120, 240]);
        assert_eq!(sepia_tone(&input, 0.0).to_image(), input.to_image());
    }

    #[test]
    fn test_sepia_intensity_blends() {
        let full = first_pixel(&sepia_tone(&solid([100, 100, 100]), 1.0));
        let partial = first_pixel(&sepia_tone(&solid([100, 100, 100]), 0.5));
        assert!(partial[0] < full[0] && partial[0] > 100);
    }

    // ===== Photo Effects =====

    #[test]
    fn test_mono_is_gray() {
        let px = first_pixel(&photo_effect(&solid([220, 30, 90]), PhotoEffect::Mono));
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    #[test]
    fn test_noir_is_harder_than_mono() {
        let mono = first_pixel(&photo_effect(&solid([40, 40, 40]), PhotoEffect::Mono));
        let noir = first_pixel(&photo_effect(&solid([40, 40, 40]), PhotoEffect::Noir));
        assert!(noir[0] < mono[0]);
    }

    #[test]
    fn test_transfer_lifts_blacks() {
        let px = first_pixel(&photo_effect(&solid([0, 0, 0]), PhotoEffect::Transfer));
        assert!(px.iter().all(|&c| c > 0));
        assert!(px[0] >= px[2], "Transfer should lean warm");
    }

    #[test]
    fn test_chrome_boosts_color_spread() {
        let px = first_pixel(&photo_effect(&solid([180, 120, 90]), PhotoEffect::Chrome));
        assert!(px[0] as i32 - px[2] as i32 > 90);
    }

    // ===== Tone Curve =====

    #[test]
    fn test_tone_curve_default_darkens_midtones() {
        let px = first_pixel(&tone_curve_to_linear(&solid([128, 128, 128]), 1.0, 1.0));
        assert!(px[0] < 80);
    }

    #[test]
    fn test_tone_curve_keeps_endpoints() {
        let black = first_pixel(&tone_curve_to_linear(&solid([0, 0, 0]), 1.5, 1.5));
        let white = first_pixel(&tone_curve_to_linear(&solid([255, 255, 255]), 1.5, 1.5));
        assert_eq!(black, [0, 0, 0]);
        assert_eq!(white, [255, 255, 255]);
    }

    #[test]
    fn test_brightness_curve_lifts_relative_to_plain_linear() {
        let plain = first_pixel(&tone_curve_to_linear(&solid([128, 128, 128]), 1.0, 1.0));
        let lofi = first_pixel(&tone_curve_to_linear(&solid([128, 128, 128]), 1.5, 1.5));
        assert!(lofi[0] > plain[0]);
    }
}
