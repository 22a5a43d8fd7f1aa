//! Editing session: selection state, slider values and the render cache.
//!
//! The session decides which of the two render paths runs for the next
//! frame. A selected filter renders that look alone; every other state
//! renders the manual chain with whatever values the sliders have
//! accumulated so far.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{AdjustmentOption, FilterKind};
use crate::engine::RenderRequest;
use crate::image::Image;
use crate::AdjustmentParameters;

/// Lower end of the slider range.
pub const SLIDER_MIN: f32 = -1.0;
/// Upper end of the slider range.
pub const SLIDER_MAX: f32 = 1.0;

/// What the user currently has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    Filter(FilterKind),
    Option(AdjustmentOption),
}

/// State behind one editing screen.
#[derive(Debug, Clone)]
pub struct EditorSession {
    source: Image,
    selection: Selection,
    params: AdjustmentParameters,
    editing: bool,
    color: f32,
    fade: f32,
    cache: Option<(RenderRequest, Image)>,
}

impl EditorSession {
    /// Start a session on `source` with nothing selected.
    pub fn new(source: Image) -> Self {
        Self {
            source,
            selection: Selection::None,
            params: AdjustmentParameters::default(),
            editing: false,
            color: 0.0,
            fade: 0.0,
            cache: None,
        }
    }

    pub fn source(&self) -> &Image {
        &self.source
    }

    /// Swap in a new source photo. Selection and sliders are kept.
    pub fn set_source(&mut self, source: Image) {
        self.source = source;
        self.cache = None;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn params(&self) -> &AdjustmentParameters {
        &self.params
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Select a look, replacing any previous selection.
    pub fn select_filter(&mut self, kind: FilterKind) {
        debug!(filter = kind.key(), "Filter selected");
        self.selection = Selection::Filter(kind);
    }

    /// Select an adjustment option. Selecting the active option again
    /// closes it. Slider values are untouched either way.
    pub fn select_option(&mut self, option: AdjustmentOption) {
        self.selection = if self.selection == Selection::Option(option) {
            Selection::None
        } else {
            Selection::Option(option)
        };
        debug!(option = option.key(), selection = ?self.selection, "Option toggled");
    }

    /// Drop the current selection without touching slider values.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Flip between browsing looks and editing. Returns the new mode.
    pub fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        self.editing
    }

    /// Move a slider. The value is clamped to the slider range; non-finite
    /// values pass through so the engine can reject them.
    pub fn set_option_value(&mut self, option: AdjustmentOption, value: f32) {
        let value = if value.is_finite() {
            value.clamp(SLIDER_MIN, SLIDER_MAX)
        } else {
            value
        };
        match option {
            AdjustmentOption::Color => self.color = value,
            AdjustmentOption::Fade => self.fade = value,
            _ => {
                self.params.set(option, value);
            }
        }
    }

    /// Current slider value for `option`.
    pub fn option_value(&self, option: AdjustmentOption) -> f32 {
        match option {
            AdjustmentOption::Color => self.color,
            AdjustmentOption::Fade => self.fade,
            _ => self.params.get(option).unwrap_or_default(),
        }
    }

    /// Reset every slider to its neutral value.
    pub fn reset_adjustments(&mut self) {
        self.params = AdjustmentParameters::default();
        self.color = 0.0;
        self.fade = 0.0;
    }

    /// The render the current state calls for.
    pub fn render_request(&self) -> RenderRequest {
        match self.selection {
            Selection::Filter(kind) => RenderRequest::Filter(kind),
            Selection::None | Selection::Option(_) => RenderRequest::Manual(self.params),
        }
    }

    /// Render the current state, reusing the last output when the request
    /// has not changed.
    pub fn render(&mut self) -> &Image {
        let request = self.render_request();
        let cached = matches!(&self.cache, Some((last, _)) if *last == request);
        if !cached {
            let output = request.render(&self.source);
            self.cache = Some((request, output));
        } else {
            debug!("Render cache hit");
        }
        match &self.cache {
            Some((_, image)) => image,
            None => &self.source,
        }
    }
}
