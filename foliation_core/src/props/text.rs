// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of text-drawing layers.

use alloc::string::String;

use peniko::Color;

use crate::props::color::ColorProperty;
use crate::props::declare_properties;
use crate::value::KvcValue;

declare_properties! {
    family: Text / TextLayerProperty;

    /// The text to render.
    Contents: String = "string";

    /// Point size of the rendered text. Animatable.
    FontSize: f64 = "fontSize", animatable;

    /// Color the text is rendered in. Animatable.
    ForegroundColor: Color = "foregroundColor", animatable;

    /// Horizontal alignment of the text within the layer's bounds.
    Alignment: AlignmentMode = "alignmentMode";

    /// How text is elided when it overflows the bounds.
    Truncation: TruncationMode = "truncationMode";

    /// Whether the text wraps to fit the layer's bounds.
    Wrapped: bool = "wrapped";
}

impl ColorProperty for ForegroundColor {}

/// Horizontal alignment of text within a layer's bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignmentMode {
    /// Alignment appropriate for the text's script.
    Natural,
    /// Left-aligned.
    Left,
    /// Right-aligned.
    Right,
    /// Centered.
    Center,
    /// Justified to both margins.
    Justified,
}

impl AlignmentMode {
    /// Returns the framework's wire name for this mode.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justified => "justified",
        }
    }
}

impl From<AlignmentMode> for KvcValue {
    fn from(v: AlignmentMode) -> Self {
        Self::Keyword(v.keyword())
    }
}

/// How overflowing text is elided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TruncationMode {
    /// No truncation.
    None,
    /// The start of the text is elided.
    Start,
    /// The end of the text is elided.
    End,
    /// The middle of the text is elided.
    Middle,
}

impl TruncationMode {
    /// Returns the framework's wire name for this mode.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Start => "start",
            Self::End => "end",
            Self::Middle => "middle",
        }
    }
}

impl From<TruncationMode> for KvcValue {
    fn from(v: TruncationMode) -> Self {
        Self::Keyword(v.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Capabilities, Family, LayerProperty, Settable};
    use alloc::string::ToString;

    #[test]
    fn contents_uses_the_framework_key() {
        assert_eq!(Contents::KEY_PATH.as_str(), "string");
        let p = Contents::new("hello".to_string());
        assert_eq!(p.value().map(String::as_str), Some("hello"));
    }

    #[test]
    fn foreground_color_scenario() {
        let p = ForegroundColor::unset();
        assert_eq!(p.value(), None);
        assert_eq!(ForegroundColor::KEY_PATH.as_str(), "foregroundColor");
    }

    #[test]
    fn font_size_is_animatable() {
        assert!(FontSize::CAPABILITIES.contains(Capabilities::ANIMATABLE));
        assert!(!Wrapped::CAPABILITIES.contains(Capabilities::ANIMATABLE));
    }

    #[test]
    fn text_family() {
        assert_eq!(Alignment::FAMILY, Family::Text);
        assert_eq!(
            KvcValue::from(TruncationMode::Middle),
            KvcValue::Keyword("middle")
        );
        assert_eq!(
            KvcValue::from(AlignmentMode::Justified),
            KvcValue::Keyword("justified")
        );
    }
}
