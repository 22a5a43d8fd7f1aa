//! The image adjustment engine.
//!
//! Two mutually exclusive entry points:
//!
//! - [`apply_named_filter`] renders one look from the catalog.
//! - [`apply_manual_adjustments`] runs the five-stage manual chain.
//!
//! Both always return a displayable image. Any failure (unbuildable
//! transform, malformed source, unresolvable crop) is logged and the source
//! is returned unchanged. The fallible cores are exposed as
//! [`render_named_filter`] and [`render_manual_adjustments`].
//!
//! ## Manual Chain Order
//! 1. Color controls (brightness, contrast, saturation)
//! 2. Exposure (warmth, in EV)
//! 3. Vignette (structure, as intensity)
//! 4. Gaussian blur (blur radius)
//! 5. Hue rotation (hue * π radians)
//!
//! followed by a crop back to the source extent.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::canvas::Canvas;
use crate::catalog::FilterKind;
use crate::error::FilterError;
use crate::image::Image;
use crate::transform::{Transform, TransformBuilder};
use crate::AdjustmentParameters;

/// What to render for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderRequest {
    /// A look from the catalog.
    Filter(FilterKind),
    /// The manual chain with these parameters.
    Manual(AdjustmentParameters),
}

impl RenderRequest {
    /// Render this request against `source`, never failing.
    pub fn render(&self, source: &Image) -> Image {
        match self {
            RenderRequest::Filter(kind) => apply_named_filter(source, *kind),
            RenderRequest::Manual(params) => apply_manual_adjustments(source, params),
        }
    }
}

/// Apply a named look, returning the source unchanged on any failure.
pub fn apply_named_filter(source: &Image, kind: FilterKind) -> Image {
    fail_closed(source, || render_named_filter(source, kind))
}

/// Apply the manual chain, returning the source unchanged on any failure.
pub fn apply_manual_adjustments(source: &Image, params: &AdjustmentParameters) -> Image {
    fail_closed(source, || render_manual_adjustments(source, params))
}

/// Run `render`; on error log it and hand back a copy of `source`.
///
/// This is the single place where engine failures are recovered.
pub fn fail_closed<F>(source: &Image, render: F) -> Image
where
    F: FnOnce() -> Result<Image, FilterError>,
{
    match render() {
        Ok(image) => image,
        Err(err) => {
            warn!(
                error = %err,
                kind = ?err.kind(),
                width = source.width,
                height = source.height,
                "Render failed; returning source unchanged"
            );
            source.clone()
        }
    }
}

/// Build the look's transform with its presets and run it on `source`.
///
/// # Errors
///
/// Construction errors from the presets, [`FilterError::MalformedInput`] for
/// a bad source, and execution errors from the transform.
#[instrument(skip(source), fields(width = source.width, height = source.height))]
pub fn render_named_filter(source: &Image, kind: FilterKind) -> Result<Image, FilterError> {
    let transform = kind
        .presets()
        .iter()
        .try_fold(TransformBuilder::new(kind.transform_id()), |builder, (key, value)| {
            builder.set(*key, *value)
        })?
        .build()?;

    let input = Canvas::from_image(source)?;
    let output = transform.apply(&input)?;
    debug!(transform = %transform.id(), "Named filter rendered");
    Ok(output.to_image())
}

/// Run the five manual stages in order and crop back to the source extent.
///
/// # Errors
///
/// The first error of any stage aborts the whole chain; no prefix of the
/// chain is ever returned.
#[instrument(skip_all, fields(width = source.width, height = source.height))]
pub fn render_manual_adjustments(
    source: &Image,
    params: &AdjustmentParameters,
) -> Result<Image, FilterError> {
    let stages = params.chain()?;
    let input = Canvas::from_image(source)?;
    let output = run_chain(input, &stages)?;
    let cropped = output.crop_to(source.extent())?;
    Ok(cropped.to_image())
}

/// Feed `input` through `stages`, each consuming the previous output.
pub fn run_chain(input: Canvas, stages: &[Transform]) -> Result<Canvas, FilterError> {
    stages.iter().try_fold(input, |canvas, stage| {
        let output = stage.apply(&canvas)?;
        debug!(stage = %stage.id(), extent = ?output.extent(), "Stage applied");
        Ok(output)
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
