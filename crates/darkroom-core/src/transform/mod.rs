//! Backend transforms and their construction.
//!
//! Every look in the filter catalog and every stage of the manual chain is a
//! [`Transform`]. Transforms are built through a [`TransformBuilder`], which
//! starts from the transform's neutral defaults and accepts only the
//! parameter keys that transform understands:
//!
//! ```ignore
//! let sepia = TransformBuilder::new(TransformId::SepiaTone)
//!     .scalar(ParamKey::Intensity, 0.8)?
//!     .build()?;
//! let out = sepia.apply(&canvas)?;
//! ```
//!
//! Setting a key the transform does not accept, or a value outside its
//! domain, is a construction failure; it never silently does nothing.

mod blur;
mod color;
mod vignette;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::FilterError;

/// Largest accepted blur radius in pixels.
pub const MAX_BLUR_RADIUS: f32 = 250.0;

/// Identifier of a backend transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformId {
    /// Sepia toning blended by intensity.
    SepiaTone,
    /// Black-and-white photo effect.
    PhotoEffectMono,
    /// Warm, faded "transfer" photo effect.
    PhotoEffectTransfer,
    /// Punchy "chrome" photo effect.
    PhotoEffectChrome,
    /// High-contrast black-and-white photo effect.
    PhotoEffectNoir,
    /// Combined brightness, contrast and saturation.
    ColorControls,
    /// Exposure shift in stops.
    ExposureAdjust,
    /// Radial darkening toward the edges.
    Vignette,
    /// Separable Gaussian blur.
    GaussianBlur,
    /// Hue rotation.
    HueAdjust,
    /// sRGB to linear tone curve with a brightness curve on top.
    ToneCurveToLinear,
}

impl TransformId {
    /// Every transform identifier.
    pub const ALL: [TransformId; 11] = [
        TransformId::SepiaTone,
        TransformId::PhotoEffectMono,
        TransformId::PhotoEffectTransfer,
        TransformId::PhotoEffectChrome,
        TransformId::PhotoEffectNoir,
        TransformId::ColorControls,
        TransformId::ExposureAdjust,
        TransformId::Vignette,
        TransformId::GaussianBlur,
        TransformId::HueAdjust,
        TransformId::ToneCurveToLinear,
    ];

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            TransformId::SepiaTone => "sepia_tone",
            TransformId::PhotoEffectMono => "photo_effect_mono",
            TransformId::PhotoEffectTransfer => "photo_effect_transfer",
            TransformId::PhotoEffectChrome => "photo_effect_chrome",
            TransformId::PhotoEffectNoir => "photo_effect_noir",
            TransformId::ColorControls => "color_controls",
            TransformId::ExposureAdjust => "exposure_adjust",
            TransformId::Vignette => "vignette",
            TransformId::GaussianBlur => "gaussian_blur",
            TransformId::HueAdjust => "hue_adjust",
            TransformId::ToneCurveToLinear => "tone_curve_to_linear",
        }
    }

    /// Parameter keys this transform accepts.
    pub fn parameter_keys(self) -> &'static [ParamKey] {
        match self {
            TransformId::SepiaTone => &[ParamKey::Intensity],
            TransformId::PhotoEffectMono
            | TransformId::PhotoEffectTransfer
            | TransformId::PhotoEffectChrome
            | TransformId::PhotoEffectNoir => &[],
            TransformId::ColorControls => &[
                ParamKey::Brightness,
                ParamKey::Contrast,
                ParamKey::Saturation,
            ],
            TransformId::ExposureAdjust => &[ParamKey::Ev],
            TransformId::Vignette => &[ParamKey::Intensity, ParamKey::Radius],
            TransformId::GaussianBlur => &[ParamKey::Radius],
            TransformId::HueAdjust => &[ParamKey::Angle],
            TransformId::ToneCurveToLinear => &[ParamKey::BrightnessCurve],
        }
    }

    /// Check if `key` is a parameter of this transform.
    pub fn accepts(self, key: ParamKey) -> bool {
        self.parameter_keys().contains(&key)
    }
}

impl fmt::Display for TransformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named transform parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKey {
    Intensity,
    Radius,
    Brightness,
    Contrast,
    Saturation,
    Ev,
    Angle,
    BrightnessCurve,
}

impl ParamKey {
    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            ParamKey::Intensity => "intensity",
            ParamKey::Radius => "radius",
            ParamKey::Brightness => "brightness",
            ParamKey::Contrast => "contrast",
            ParamKey::Saturation => "saturation",
            ParamKey::Ev => "ev",
            ParamKey::Angle => "angle",
            ParamKey::BrightnessCurve => "brightness_curve",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameter value: a scalar or a two-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Scalar(f32),
    Vector(f32, f32),
}

/// Fixed-look photo effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoEffect {
    Mono,
    Transfer,
    Chrome,
    Noir,
}

/// Brightness, contrast and saturation applied as one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorControls {
    /// Additive bias (0 = unchanged).
    pub brightness: f32,
    /// Scale around mid-gray (1 = unchanged).
    pub contrast: f32,
    /// Mix from gray (0) to original (1) and beyond.
    pub saturation: f32,
}

impl Default for ColorControls {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }
}

impl ColorControls {
    /// Check if all values are neutral.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// A fully constructed, ready-to-run transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    SepiaTone { intensity: f32 },
    PhotoEffect(PhotoEffect),
    ColorControls(ColorControls),
    ExposureAdjust { ev: f32 },
    Vignette { intensity: f32, radius: f32 },
    GaussianBlur { radius: f32 },
    HueAdjust { angle: f32 },
    ToneCurveToLinear { gain: f32, gamma: f32 },
}

impl Transform {
    /// The identifier this transform was built from.
    pub fn id(&self) -> TransformId {
        match self {
            Transform::SepiaTone { .. } => TransformId::SepiaTone,
            Transform::PhotoEffect(PhotoEffect::Mono) => TransformId::PhotoEffectMono,
            Transform::PhotoEffect(PhotoEffect::Transfer) => TransformId::PhotoEffectTransfer,
            Transform::PhotoEffect(PhotoEffect::Chrome) => TransformId::PhotoEffectChrome,
            Transform::PhotoEffect(PhotoEffect::Noir) => TransformId::PhotoEffectNoir,
            Transform::ColorControls(_) => TransformId::ColorControls,
            Transform::ExposureAdjust { .. } => TransformId::ExposureAdjust,
            Transform::Vignette { .. } => TransformId::Vignette,
            Transform::GaussianBlur { .. } => TransformId::GaussianBlur,
            Transform::HueAdjust { .. } => TransformId::HueAdjust,
            Transform::ToneCurveToLinear { .. } => TransformId::ToneCurveToLinear,
        }
    }

    /// Run the transform on `input`, producing a new canvas.
    ///
    /// The output is clamped to the displayable range, so every stage of a
    /// chain hands a valid image to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Execution`] if the output contains non-finite
    /// values.
    pub fn apply(&self, input: &Canvas) -> Result<Canvas, FilterError> {
        let output = match *self {
            Transform::SepiaTone { intensity } => color::sepia_tone(input, intensity),
            Transform::PhotoEffect(effect) => color::photo_effect(input, effect),
            Transform::ColorControls(controls) => color::color_controls(input, &controls),
            Transform::ExposureAdjust { ev } => color::exposure_adjust(input, ev),
            Transform::Vignette { intensity, radius } => {
                vignette::vignette(input, intensity, radius)
            }
            Transform::GaussianBlur { radius } => blur::gaussian_blur(input, radius),
            Transform::HueAdjust { angle } => color::hue_adjust(input, angle),
            Transform::ToneCurveToLinear { gain, gamma } => {
                color::tone_curve_to_linear(input, gain, gamma)
            }
        };

        if output.data().iter().any(|v| !v.is_finite()) {
            return Err(FilterError::Execution {
                transform: self.id(),
                reason: "output contains non-finite values".to_string(),
            });
        }
        Ok(output.clamp_unit())
    }
}

/// Builds a [`Transform`] from an identifier and parameter overrides.
#[derive(Debug, Clone)]
pub struct TransformBuilder {
    id: TransformId,
    params: Vec<(ParamKey, ParamValue)>,
}

impl TransformBuilder {
    /// Start building `id` with all parameters at their defaults.
    pub fn new(id: TransformId) -> Self {
        Self {
            id,
            params: Vec::new(),
        }
    }

    /// Override a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownParameter`] if the transform does not
    /// accept `key`.
    pub fn set(mut self, key: ParamKey, value: ParamValue) -> Result<Self, FilterError> {
        if !self.id.accepts(key) {
            return Err(FilterError::UnknownParameter {
                transform: self.id,
                key,
            });
        }
        self.params.push((key, value));
        Ok(self)
    }

    /// Override a scalar parameter.
    pub fn scalar(self, key: ParamKey, value: f32) -> Result<Self, FilterError> {
        self.set(key, ParamValue::Scalar(value))
    }

    /// Validate the parameters and produce the transform.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] for non-finite values, a
    /// vector where a scalar is expected (or vice versa), and values outside
    /// the transform's domain.
    pub fn build(self) -> Result<Transform, FilterError> {
        let transform = match self.id {
            TransformId::SepiaTone => Transform::SepiaTone {
                intensity: self.scalar_or(ParamKey::Intensity, 1.0)?,
            },
            TransformId::PhotoEffectMono => Transform::PhotoEffect(PhotoEffect::Mono),
            TransformId::PhotoEffectTransfer => Transform::PhotoEffect(PhotoEffect::Transfer),
            TransformId::PhotoEffectChrome => Transform::PhotoEffect(PhotoEffect::Chrome),
            TransformId::PhotoEffectNoir => Transform::PhotoEffect(PhotoEffect::Noir),
            TransformId::ColorControls => {
                let defaults = ColorControls::default();
                Transform::ColorControls(ColorControls {
                    brightness: self.scalar_or(ParamKey::Brightness, defaults.brightness)?,
                    contrast: self.scalar_or(ParamKey::Contrast, defaults.contrast)?,
                    saturation: self.scalar_or(ParamKey::Saturation, defaults.saturation)?,
                })
            }
            TransformId::ExposureAdjust => Transform::ExposureAdjust {
                ev: self.scalar_or(ParamKey::Ev, 0.0)?,
            },
            TransformId::Vignette => {
                let radius = self.scalar_or(ParamKey::Radius, 1.0)?;
                if radius <= 0.0 {
                    return Err(self.invalid(ParamKey::Radius, "radius must be positive"));
                }
                Transform::Vignette {
                    intensity: self.scalar_or(ParamKey::Intensity, 0.0)?,
                    radius,
                }
            }
            TransformId::GaussianBlur => {
                let radius = self.scalar_or(ParamKey::Radius, 0.0)?;
                if !(0.0..=MAX_BLUR_RADIUS).contains(&radius) {
                    return Err(self.invalid(
                        ParamKey::Radius,
                        &format!("radius must be within 0..={}", MAX_BLUR_RADIUS),
                    ));
                }
                Transform::GaussianBlur { radius }
            }
            TransformId::HueAdjust => Transform::HueAdjust {
                angle: self.scalar_or(ParamKey::Angle, 0.0)?,
            },
            TransformId::ToneCurveToLinear => {
                let (gain, gamma) = self.vector_or(ParamKey::BrightnessCurve, (1.0, 1.0))?;
                if gain < 0.0 || gamma <= 0.0 {
                    return Err(self.invalid(
                        ParamKey::BrightnessCurve,
                        "gain must be non-negative and gamma positive",
                    ));
                }
                Transform::ToneCurveToLinear { gain, gamma }
            }
        };
        Ok(transform)
    }

    /// Last value set for `key`, if any.
    fn lookup(&self, key: ParamKey) -> Option<ParamValue> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    fn scalar_or(&self, key: ParamKey, default: f32) -> Result<f32, FilterError> {
        match self.lookup(key) {
            None => Ok(default),
            Some(ParamValue::Scalar(v)) if v.is_finite() => Ok(v),
            Some(ParamValue::Scalar(_)) => Err(self.invalid(key, "value must be finite")),
            Some(ParamValue::Vector(..)) => Err(self.invalid(key, "expected a scalar")),
        }
    }

    fn vector_or(&self, key: ParamKey, default: (f32, f32)) -> Result<(f32, f32), FilterError> {
        match self.lookup(key) {
            None => Ok(default),
            Some(ParamValue::Vector(x, y)) if x.is_finite() && y.is_finite() => Ok((x, y)),
            Some(ParamValue::Vector(..)) => Err(self.invalid(key, "value must be finite")),
            Some(ParamValue::Scalar(_)) => Err(self.invalid(key, "expected a vector")),
        }
    }

    fn invalid(&self, key: ParamKey, reason: &str) -> FilterError {
        FilterError::InvalidParameter {
            transform: self.id,
            key,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;

    fn canvas() -> Canvas {
        Canvas::from_image(&Image::filled(8, 8, [120, 80, 200])).unwrap()
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = TransformId::ALL.iter().map(|id| id.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TransformId::ALL.len());
    }

    #[test]
    fn test_every_transform_builds_with_defaults() {
        for id in TransformId::ALL {
            let transform = TransformBuilder::new(id).build().unwrap();
            assert_eq!(transform.id(), id);
        }
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let err = TransformBuilder::new(TransformId::ToneCurveToLinear)
            .scalar(ParamKey::Intensity, 0.5)
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::UnknownParameter {
                transform: TransformId::ToneCurveToLinear,
                key: ParamKey::Intensity,
            }
        );
    }

    #[test]
    fn test_photo_effects_take_no_parameters() {
        let result = TransformBuilder::new(TransformId::PhotoEffectMono)
            .scalar(ParamKey::Intensity, 1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let err = TransformBuilder::new(TransformId::ColorControls)
            .scalar(ParamKey::Brightness, f32::NAN)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter { .. }));
    }

    #[test]
    fn test_wrong_value_shape_rejected() {
        let err = TransformBuilder::new(TransformId::ToneCurveToLinear)
            .scalar(ParamKey::BrightnessCurve, 1.5)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter { .. }));

        let err = TransformBuilder::new(TransformId::SepiaTone)
            .set(ParamKey::Intensity, ParamValue::Vector(1.0, 1.0))
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter { .. }));
    }

    #[test]
    fn test_domain_checks() {
        assert!(TransformBuilder::new(TransformId::GaussianBlur)
            .scalar(ParamKey::Radius, -1.0)
            .unwrap()
            .build()
            .is_err());
        assert!(TransformBuilder::new(TransformId::GaussianBlur)
            .scalar(ParamKey::Radius, MAX_BLUR_RADIUS + 1.0)
            .unwrap()
            .build()
            .is_err());
        assert!(TransformBuilder::new(TransformId::Vignette)
            .scalar(ParamKey::Radius, 0.0)
            .unwrap()
            .build()
            .is_err());
        assert!(TransformBuilder::new(TransformId::ToneCurveToLinear)
            .set(ParamKey::BrightnessCurve, ParamValue::Vector(1.0, 0.0))
            .unwrap()
            .build()
            .is_err());
    }

    #[test]
    fn test_last_override_wins() {
        let transform = TransformBuilder::new(TransformId::SepiaTone)
            .scalar(ParamKey::Intensity, 0.2)
            .unwrap()
            .scalar(ParamKey::Intensity, 0.8)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(transform, Transform::SepiaTone { intensity: 0.8 });
    }

    #[test]
    fn test_neutral_stages_are_identity() {
        let input = canvas();
        let neutral = [
            TransformId::ColorControls,
            TransformId::ExposureAdjust,
            TransformId::Vignette,
            TransformId::GaussianBlur,
            TransformId::HueAdjust,
        ];
        for id in neutral {
            let out = TransformBuilder::new(id).build().unwrap().apply(&input).unwrap();
            assert_eq!(out.to_image(), input.to_image(), "{} is not neutral", id);
        }
    }

    #[test]
    fn test_non_finite_output_is_execution_failure() {
        let huge = Transform::ColorControls(ColorControls {
            brightness: 0.0,
            contrast: f32::MAX,
            saturation: f32::MAX,
        });
        let err = huge.apply(&canvas()).unwrap_err();
        assert!(matches!(err, FilterError::Execution { .. }));
    }
}
