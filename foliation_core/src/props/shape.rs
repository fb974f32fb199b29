// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of path-stroking and filling layers.

use alloc::vec::Vec;

use peniko::Color;

use crate::props::color::ColorProperty;
use crate::props::declare_properties;
use crate::value::KvcValue;

declare_properties! {
    family: Shape / ShapeLayerProperty;

    /// Color used to fill the path. Animatable.
    FillColor: Color = "fillColor", animatable;

    /// Color used to stroke the path's outline. Animatable.
    StrokeColor: Color = "strokeColor", animatable;

    /// Width of the stroked path. Animatable.
    LineWidth: f64 = "lineWidth", animatable;

    /// Offset into the dash pattern at which stroking begins. Animatable.
    LineDashPhase: f64 = "lineDashPhase", animatable;

    /// Alternating painted and unpainted dash lengths. Animatable.
    LineDashPattern: Vec<i64> = "lineDashPattern", animatable;

    /// Limit on the ratio of miter length to line width. Animatable.
    MiterLimit: f64 = "miterLimit", animatable;

    /// Relative point at which stroking begins, in `[0, 1]`. Animatable.
    StrokeStart: f64 = "strokeStart", animatable;

    /// Relative point at which stroking ends, in `[0, 1]`. Animatable.
    StrokeEnd: f64 = "strokeEnd", animatable;

    /// Cap style for the ends of the stroked path.
    LineCapStyle: LineCap = "lineCap";

    /// Join style for the stroked path's corners.
    LineJoinStyle: LineJoin = "lineJoin";

    /// Rule deciding which regions the path fills.
    FillRuleStyle: FillRule = "fillRule";
}

impl ColorProperty for FillColor {}
impl ColorProperty for StrokeColor {}

/// Cap style drawn at the ends of an open stroked path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineCap {
    /// The stroke ends exactly at the path endpoint.
    Butt,
    /// A half-disc extends past the endpoint.
    Round,
    /// A half-square extends past the endpoint.
    Square,
}

impl LineCap {
    /// Returns the framework's wire name for this style.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl From<LineCap> for KvcValue {
    fn from(v: LineCap) -> Self {
        Self::Keyword(v.keyword())
    }
}

/// Join style drawn where stroked path segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineJoin {
    /// Segment edges are extended to a sharp point.
    Miter,
    /// The corner is rounded.
    Round,
    /// The corner is cut flat.
    Bevel,
}

impl LineJoin {
    /// Returns the framework's wire name for this style.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl From<LineJoin> for KvcValue {
    fn from(v: LineJoin) -> Self {
        Self::Keyword(v.keyword())
    }
}

/// Rule deciding which regions of a path are considered interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Winding-number rule.
    NonZero,
    /// Crossing-parity rule.
    EvenOdd,
}

impl FillRule {
    /// Returns the framework's wire name for this rule.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::NonZero => "non-zero",
            Self::EvenOdd => "even-odd",
        }
    }
}

impl From<FillRule> for KvcValue {
    fn from(v: FillRule) -> Self {
        Self::Keyword(v.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Capabilities, Family, LayerProperty, Settable};
    use alloc::vec;

    #[test]
    fn line_dash_pattern_round_trip() {
        let p = LineDashPattern::new(vec![1, 2, 3]);
        assert_eq!(p.value(), Some(&vec![1, 2, 3]));
        assert_eq!(LineDashPattern::KEY_PATH.as_str(), "lineDashPattern");
    }

    #[test]
    fn style_enums_lower_to_keywords() {
        assert_eq!(KvcValue::from(LineCap::Round), KvcValue::Keyword("round"));
        assert_eq!(KvcValue::from(LineJoin::Bevel), KvcValue::Keyword("bevel"));
        assert_eq!(
            KvcValue::from(FillRule::EvenOdd),
            KvcValue::Keyword("even-odd")
        );
    }

    #[test]
    fn style_properties_are_not_animatable() {
        assert!(
            !LineCapStyle::CAPABILITIES.contains(Capabilities::ANIMATABLE),
            "line cap is applied discretely"
        );
        assert!(StrokeEnd::CAPABILITIES.contains(Capabilities::ANIMATABLE));
    }

    #[test]
    fn shape_family() {
        assert_eq!(FillColor::FAMILY, Family::Shape);
        assert_eq!(LineCapStyle::KEY_PATH.as_str(), "lineCap");
    }
}
