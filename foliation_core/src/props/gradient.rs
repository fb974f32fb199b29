// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of color gradient layers.

use alloc::vec::Vec;

use peniko::Color;

use crate::props::declare_properties;
use crate::value::KvcValue;

declare_properties! {
    family: Gradient / GradientLayerProperty;

    /// Geometry of the gradient ramp.
    GradientType: GradientStyle = "type";

    /// Color of each gradient stop. Animatable.
    GradientColors: Vec<Color> = "colors", animatable;

    /// Location of each gradient stop, in `[0, 1]`. Animatable.
    Locations: Vec<f64> = "locations", animatable;

    /// Start point of the ramp, in unit coordinates. Animatable.
    StartPoint: kurbo::Point = "startPoint", animatable;

    /// End point of the ramp, in unit coordinates. Animatable.
    EndPoint: kurbo::Point = "endPoint", animatable;
}

/// Geometry of a gradient layer's color ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientStyle {
    /// Linear ramp between the start and end points.
    Axial,
    /// Concentric ramp radiating from the start point.
    Radial,
    /// Angular ramp swept around the start point.
    Conic,
}

impl GradientStyle {
    /// Returns the framework's wire name for this style.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Axial => "axial",
            Self::Radial => "radial",
            Self::Conic => "conic",
        }
    }
}

impl From<GradientStyle> for KvcValue {
    fn from(v: GradientStyle) -> Self {
        Self::Keyword(v.keyword())
    }
}
