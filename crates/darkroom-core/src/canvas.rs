//! Floating-point working buffer that transforms read and write.
//!
//! An [`Image`] is lifted onto a [`Canvas`] once, every stage of a chain maps
//! canvas to canvas, and the final canvas is quantized back to RGB8. Each
//! canvas carries its own [`Extent`] so stages like blur can grow the bounds
//! and the chain can crop back to the source framing at the end.

use crate::error::FilterError;
use crate::image::{Extent, Image};

/// RGB working buffer, 3 `f32` per pixel, nominal range 0.0 to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    extent: Extent,
    data: Vec<f32>,
}

impl Canvas {
    /// Lift an RGB8 image onto a canvas anchored at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MalformedInput`] for empty images and buffers
    /// whose length does not match the stated dimensions.
    pub fn from_image(image: &Image) -> Result<Self, FilterError> {
        if image.is_empty() {
            return Err(FilterError::MalformedInput(format!(
                "empty image ({}x{}, {} bytes)",
                image.width,
                image.height,
                image.pixels.len()
            )));
        }
        if image.pixels.len() != image.expected_len() {
            return Err(FilterError::MalformedInput(format!(
                "expected {} bytes for {}x{}, got {}",
                image.expected_len(),
                image.width,
                image.height,
                image.pixels.len()
            )));
        }

        let data = image.pixels.iter().map(|&v| v as f32 / 255.0).collect();
        Ok(Self {
            extent: image.extent(),
            data,
        })
    }

    /// Build a canvas from an extent and matching channel data.
    pub(crate) fn from_parts(extent: Extent, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), extent.area() * 3, "Canvas buffer size mismatch");
        Self { extent, data }
    }

    /// The canvas bounds.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Raw channel data, row-major, 3 values per pixel.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Apply a per-pixel color function, keeping the extent.
    pub fn map_pixels<F>(&self, f: F) -> Canvas
    where
        F: Fn(f32, f32, f32) -> (f32, f32, f32),
    {
        let mut data = Vec::with_capacity(self.data.len());
        for chunk in self.data.chunks_exact(3) {
            let (r, g, b) = f(chunk[0], chunk[1], chunk[2]);
            data.extend_from_slice(&[r, g, b]);
        }
        Canvas::from_parts(self.extent, data)
    }

    /// Apply a per-pixel function that also sees absolute pixel coordinates.
    pub fn map_pixels_at<F>(&self, f: F) -> Canvas
    where
        F: Fn(i64, i64, f32, f32, f32) -> (f32, f32, f32),
    {
        let width = self.extent.width as usize;
        let mut data = Vec::with_capacity(self.data.len());
        for (idx, chunk) in self.data.chunks_exact(3).enumerate() {
            let x = self.extent.x + (idx % width) as i64;
            let y = self.extent.y + (idx / width) as i64;
            let (r, g, b) = f(x, y, chunk[0], chunk[1], chunk[2]);
            data.extend_from_slice(&[r, g, b]);
        }
        Canvas::from_parts(self.extent, data)
    }

    /// Clamp every channel to 0.0..=1.0.
    pub fn clamp_unit(mut self) -> Canvas {
        for v in self.data.iter_mut() {
            *v = v.clamp(0.0, 1.0);
        }
        self
    }

    /// Pixel at absolute coordinates, clamped to the nearest edge pixel.
    #[inline]
    pub fn sample_clamped(&self, x: i64, y: i64) -> [f32; 3] {
        let lx = (x - self.extent.x).clamp(0, self.extent.width as i64 - 1) as usize;
        let ly = (y - self.extent.y).clamp(0, self.extent.height as i64 - 1) as usize;
        let idx = (ly * self.extent.width as usize + lx) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Restrict the canvas to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ExtentResolution`] when `target` is empty or
    /// not fully covered by this canvas.
    pub fn crop_to(&self, target: Extent) -> Result<Canvas, FilterError> {
        if target.is_empty() || !self.extent.contains(&target) {
            return Err(FilterError::ExtentResolution {
                produced: self.extent,
                requested: target,
            });
        }
        if target == self.extent {
            return Ok(self.clone());
        }

        let src_w = self.extent.width as usize;
        let off_x = (target.x - self.extent.x) as usize;
        let off_y = (target.y - self.extent.y) as usize;
        let row_len = target.width as usize * 3;

        let mut data = Vec::with_capacity(target.area() * 3);
        for row in 0..target.height as usize {
            let start = ((off_y + row) * src_w + off_x) * 3;
            data.extend_from_slice(&self.data[start..start + row_len]);
        }
        Ok(Canvas::from_parts(target, data))
    }

    /// Quantize back to an RGB8 image.
    pub fn to_image(&self) -> Image {
        let pixels = self
            .data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        Image::new(self.extent.width, self.extent.height, pixels)
    }
}
