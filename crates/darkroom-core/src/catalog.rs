//! Closed catalogs of named looks and manual adjustment options.

use serde::{Deserialize, Serialize};

use crate::transform::{ParamKey, ParamValue, TransformId};

/// A named stylistic look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Sepia,
    BlackWhite,
    Vintage,
    Clarendon,
    Gingham,
    Lark,
    Moon,
    LoFi,
}

impl FilterKind {
    /// Every look, in thumbnail strip order.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Sepia,
        FilterKind::BlackWhite,
        FilterKind::Vintage,
        FilterKind::Clarendon,
        FilterKind::Gingham,
        FilterKind::Lark,
        FilterKind::Moon,
        FilterKind::LoFi,
    ];

    /// The backend transform that renders this look.
    pub fn transform_id(self) -> TransformId {
        match self {
            FilterKind::Sepia => TransformId::SepiaTone,
            FilterKind::BlackWhite => TransformId::PhotoEffectMono,
            FilterKind::Vintage => TransformId::PhotoEffectTransfer,
            FilterKind::Clarendon => TransformId::ColorControls,
            FilterKind::Gingham => TransformId::PhotoEffectChrome,
            FilterKind::Lark => TransformId::Vignette,
            FilterKind::Moon => TransformId::PhotoEffectNoir,
            FilterKind::LoFi => TransformId::ToneCurveToLinear,
        }
    }

    /// Parameter overrides applied on top of the transform's defaults.
    pub fn presets(self) -> &'static [(ParamKey, ParamValue)] {
        match self {
            FilterKind::Sepia => &[(ParamKey::Intensity, ParamValue::Scalar(0.8))],
            FilterKind::Clarendon => &[(ParamKey::Contrast, ParamValue::Scalar(1.5))],
            FilterKind::Lark => &[
                (ParamKey::Radius, ParamValue::Scalar(0.5)),
                (ParamKey::Intensity, ParamValue::Scalar(1.0)),
            ],
            FilterKind::LoFi => &[(ParamKey::BrightnessCurve, ParamValue::Vector(1.5, 1.5))],
            FilterKind::BlackWhite
            | FilterKind::Vintage
            | FilterKind::Gingham
            | FilterKind::Moon => &[],
        }
    }

    /// Label shown under the thumbnail.
    pub fn display_name(self) -> &'static str {
        match self {
            FilterKind::Sepia => "Sepia",
            FilterKind::BlackWhite => "Black & White",
            FilterKind::Vintage => "Vintage",
            FilterKind::Clarendon => "Clarendon",
            FilterKind::Gingham => "Gingham",
            FilterKind::Lark => "Lark",
            FilterKind::Moon => "Moon",
            FilterKind::LoFi => "Lo-Fi",
        }
    }

    /// Stable snake_case key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            FilterKind::Sepia => "sepia",
            FilterKind::BlackWhite => "black_white",
            FilterKind::Vintage => "vintage",
            FilterKind::Clarendon => "clarendon",
            FilterKind::Gingham => "gingham",
            FilterKind::Lark => "lark",
            FilterKind::Moon => "moon",
            FilterKind::LoFi => "lo_fi",
        }
    }

    /// Look up a filter by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// A manual adjustment control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentOption {
    Brightness,
    Contrast,
    Saturation,
    Warmth,
    Structure,
    Color,
    Fade,
    Blur,
    Hue,
}

impl AdjustmentOption {
    /// Every option, in toolbar order.
    pub const ALL: [AdjustmentOption; 9] = [
        AdjustmentOption::Brightness,
        AdjustmentOption::Contrast,
        AdjustmentOption::Saturation,
        AdjustmentOption::Warmth,
        AdjustmentOption::Structure,
        AdjustmentOption::Color,
        AdjustmentOption::Fade,
        AdjustmentOption::Blur,
        AdjustmentOption::Hue,
    ];

    /// Label for the slider.
    pub fn display_name(self) -> &'static str {
        match self {
            AdjustmentOption::Brightness => "Brightness",
            AdjustmentOption::Contrast => "Contrast",
            AdjustmentOption::Saturation => "Saturation",
            AdjustmentOption::Warmth => "Warmth",
            AdjustmentOption::Structure => "Structure",
            AdjustmentOption::Color => "Color",
            AdjustmentOption::Fade => "Fade",
            AdjustmentOption::Blur => "Blur",
            AdjustmentOption::Hue => "Hue",
        }
    }

    /// Stable snake_case key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            AdjustmentOption::Brightness => "brightness",
            AdjustmentOption::Contrast => "contrast",
            AdjustmentOption::Saturation => "saturation",
            AdjustmentOption::Warmth => "warmth",
            AdjustmentOption::Structure => "structure",
            AdjustmentOption::Color => "color",
            AdjustmentOption::Fade => "fade",
            AdjustmentOption::Blur => "blur",
            AdjustmentOption::Hue => "hue",
        }
    }

    /// Look up an option by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.key() == key)
    }

    /// Whether moving this slider changes the rendered image.
    ///
    /// `Color` and `Fade` are selectable but have no transform behind them.
    pub fn is_wired(self) -> bool {
        !matches!(self, AdjustmentOption::Color | AdjustmentOption::Fade)
    }
}
