//! Darkroom Core - Image adjustment engine
//!
//! This crate renders the photo shown on an editing screen. The UI hands it
//! a decoded source image plus either a named look or a set of manual
//! adjustment values, and gets back a new image to display.
//!
//! - [`engine`] - the two render paths and their fail-closed fallback
//! - [`catalog`] - named looks and adjustment options
//! - [`transform`] - backend transforms and their builder
//! - [`session`] - selection state machine and render cache
//! - [`worker`] - off-thread, last-write-wins rendering
//! - [`decode`] / [`encode`] - image I/O glue

pub mod canvas;
pub mod catalog;
pub mod colorspace;
pub mod decode;
pub mod encode;
pub mod engine;
pub mod error;
pub mod image;
pub mod session;
pub mod transform;
pub mod worker;

use std::f32::consts::PI;

pub use catalog::{AdjustmentOption, FilterKind};
pub use engine::{
    apply_manual_adjustments, apply_named_filter, render_manual_adjustments, render_named_filter,
    RenderRequest,
};
pub use error::{FailureKind, FilterError};
pub use image::{Extent, Image};
pub use session::{EditorSession, Selection};
pub use worker::{LatestRenderer, RenderedFrame};

use transform::{ParamKey, Transform, TransformBuilder, TransformId};

/// Values for the wired manual adjustment sliders.
///
/// Slider values arrive in -1 to 1 by UI convention; the engine accepts any
/// finite value.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Additive brightness bias (0 = unchanged)
    pub brightness: f32,
    /// Contrast multiplier around mid-gray (1 = unchanged)
    pub contrast: f32,
    /// Saturation multiplier (1 = unchanged, 0 = gray)
    pub saturation: f32,
    /// Exposure shift in stops (0 = unchanged)
    pub warmth: f32,
    /// Vignette intensity (0 = none)
    pub structure: f32,
    /// Gaussian blur radius in pixels; negative values render as 0
    pub blur_radius: f32,
    /// Hue rotation in half turns (1 = 180 degrees)
    pub hue: f32,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            warmth: 0.0,
            structure: 0.0,
            blur_radius: 0.0,
            hue: 0.0,
        }
    }
}

impl AdjustmentParameters {
    /// Create a new AdjustmentParameters with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Value behind a wired option, or `None` for `Color` and `Fade`.
    pub fn get(&self, option: AdjustmentOption) -> Option<f32> {
        match option {
            AdjustmentOption::Brightness => Some(self.brightness),
            AdjustmentOption::Contrast => Some(self.contrast),
            AdjustmentOption::Saturation => Some(self.saturation),
            AdjustmentOption::Warmth => Some(self.warmth),
            AdjustmentOption::Structure => Some(self.structure),
            AdjustmentOption::Blur => Some(self.blur_radius),
            AdjustmentOption::Hue => Some(self.hue),
            AdjustmentOption::Color | AdjustmentOption::Fade => None,
        }
    }

    /// Set the value behind a wired option.
    ///
    /// Returns `false` (and changes nothing) for unwired options.
    pub fn set(&mut self, option: AdjustmentOption, value: f32) -> bool {
        let slot = match option {
            AdjustmentOption::Brightness => &mut self.brightness,
            AdjustmentOption::Contrast => &mut self.contrast,
            AdjustmentOption::Saturation => &mut self.saturation,
            AdjustmentOption::Warmth => &mut self.warmth,
            AdjustmentOption::Structure => &mut self.structure,
            AdjustmentOption::Blur => &mut self.blur_radius,
            AdjustmentOption::Hue => &mut self.hue,
            AdjustmentOption::Color | AdjustmentOption::Fade => return false,
        };
        *slot = value;
        true
    }

    /// Blur radius actually rendered: `max(0, blur_radius)`.
    pub fn effective_blur_radius(&self) -> f32 {
        self.blur_radius.max(0.0)
    }

    /// Hue rotation angle in radians.
    pub fn hue_angle(&self) -> f32 {
        self.hue * PI
    }

    /// Build the five manual stages in their fixed order.
    ///
    /// # Errors
    ///
    /// Returns the first construction error, e.g. for a non-finite value.
    pub fn chain(&self) -> Result<[Transform; 5], FilterError> {
        Ok([
            TransformBuilder::new(TransformId::ColorControls)
                .scalar(ParamKey::Brightness, self.brightness)?
                .scalar(ParamKey::Contrast, self.contrast)?
                .scalar(ParamKey::Saturation, self.saturation)?
                .build()?,
            TransformBuilder::new(TransformId::ExposureAdjust)
                .scalar(ParamKey::Ev, self.warmth)?
                .build()?,
            TransformBuilder::new(TransformId::Vignette)
                .scalar(ParamKey::Intensity, self.structure)?
                .build()?,
            TransformBuilder::new(TransformId::GaussianBlur)
                .scalar(ParamKey::Radius, self.effective_blur_radius())?
                .build()?,
            TransformBuilder::new(TransformId::HueAdjust)
                .scalar(ParamKey::Angle, self.hue_angle())?
                .build()?,
        ])
    }
}
