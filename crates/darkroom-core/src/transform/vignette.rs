//! Radial vignette.
//!
//! Darkens pixels by their distance from the centre of the canvas extent.
//! Distance is normalized so the extent corners sit at 1.0; `radius` scales
//! where the falloff reaches full strength and `intensity` scales how dark
//! it gets there. Negative intensity brightens the edges instead.

use crate::canvas::Canvas;
use crate::colorspace::smootherstep;

/// Apply a vignette with the given intensity and radius.
pub fn vignette(input: &Canvas, intensity: f32, radius: f32) -> Canvas {
    if intensity == 0.0 {
        return input.clone();
    }

    let extent = input.extent();
    let half_w = extent.width as f32 / 2.0;
    let half_h = extent.height as f32 / 2.0;
    let cx = extent.x as f32 + half_w;
    let cy = extent.y as f32 + half_h;
    let max_dist = (half_w * half_w + half_h * half_h).sqrt().max(f32::EPSILON);
    let radius = radius.max(0.001);

    input.map_pixels_at(move |x, y, r, g, b| {
        // Pixel centres
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let dist = (dx * dx + dy * dy).sqrt() / max_dist;

        let factor = 1.0 - intensity * smootherstep(dist / radius);
        (r * factor, g * factor, b * factor)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    fn gray(width: u32, height: u32) -> Canvas {
        Canvas::from_image(&Image::filled(width, height, [200, 200, 200])).unwrap()
    }

    #[test]
    fn test_zero_intensity_is_identity() {
        let input = gray(9, 9);
        assert_eq!(vignette(&input, 0.0, 1.0), input);
    }

    #[test]
    fn test_corners_darker_than_center() {
        let out = vignette(&gray(21, 21), 1.0, 1.0).to_image();
        let center = out.pixel(10, 10).unwrap()[0];
        let corner = out.pixel(0, 0).unwrap()[0];
        assert!((center as i32 - 200).abs() <= 1, "Centre should be untouched");
        assert!(corner < 60, "Corner should be dark, got {}", corner);
    }

    #[test]
    fn test_smaller_radius_darkens_more() {
        let wide = vignette(&gray(21, 21), 1.0, 1.0).to_image();
        let tight = vignette(&gray(21, 21), 1.0, 0.5).to_image();
        let wide_px = wide.pixel(15, 10).unwrap()[0];
        let tight_px = tight.pixel(15, 10).unwrap()[0];
        assert!(tight_px < wide_px);
    }

    #[test]
    fn test_negative_intensity_brightens_edges() {
        let input = Canvas::from_image(&Image::filled(21, 21, [100, 100, 100])).unwrap();
        let out = vignette(&input, -0.5, 1.0).to_image();
        assert!(out.pixel(0, 0).unwrap()[0] > 100);
    }

    #[test]
    fn test_keeps_extent() {
        let input = gray(7, 3);
        assert_eq!(vignette(&input, 0.7, 1.0).extent(), input.extent());
    }
}
