//! Separable Gaussian blur.
//!
//! The output extent grows by the kernel half-width on every side, the way a
//! blur spreads light past the original edges. Samples outside the input are
//! clamped to the nearest edge pixel, so cropping the result back to the
//! source extent leaves no dark fringe.

use crate::canvas::Canvas;

/// Blur `input` with standard deviation `radius` (in pixels).
pub fn gaussian_blur(input: &Canvas, radius: f32) -> Canvas {
    if radius <= 0.0 {
        return input.clone();
    }

    let kernel = gaussian_kernel_1d(radius);
    let half = (kernel.len() / 2) as i64;
    let out_extent = input.extent().outset(half as u32);
    let width = out_extent.width as usize;
    let height = out_extent.height as usize;

    // Horizontal pass over the grown extent
    let mut temp = Vec::with_capacity(width * height * 3);
    for row in 0..height as i64 {
        let y = out_extent.y + row;
        for col in 0..width as i64 {
            let x = out_extent.x + col;
            let mut sum = [0.0f32; 3];
            for (ki, &kv) in kernel.iter().enumerate() {
                let px = input.sample_clamped(x + ki as i64 - half, y);
                sum[0] += px[0] * kv;
                sum[1] += px[1] * kv;
                sum[2] += px[2] * kv;
            }
            temp.extend_from_slice(&sum);
        }
    }
    let temp = Canvas::from_parts(out_extent, temp);

    // Vertical pass
    let mut data = Vec::with_capacity(width * height * 3);
    for row in 0..height as i64 {
        let y = out_extent.y + row;
        for col in 0..width as i64 {
            let x = out_extent.x + col;
            let mut sum = [0.0f32; 3];
            for (ki, &kv) in kernel.iter().enumerate() {
                let px = temp.sample_clamped(x, y + ki as i64 - half);
                sum[0] += px[0] * kv;
                sum[1] += px[1] * kv;
                sum[2] += px[2] * kv;
            }
            data.extend_from_slice(&sum);
        }
    }

    Canvas::from_parts(out_extent, data)
}

/// Normalized 1D Gaussian kernel with half-width `ceil(3σ)`.
fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    let half = (sigma * 3.0).ceil() as usize;
    let kernel_size = 2 * half + 1;

    let mut kernel: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }
    kernel
}
