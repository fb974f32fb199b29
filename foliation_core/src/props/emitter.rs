// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of particle emitter layers.

use crate::props::declare_properties;
use crate::value::KvcValue;

declare_properties! {
    family: Emitter / EmitterLayerProperty;

    /// Multiplier applied to each cell's birth rate. Animatable.
    BirthRate: f32 = "birthRate", animatable;

    /// Multiplier applied to each cell's lifetime. Animatable.
    Lifetime: f32 = "lifetime", animatable;

    /// Center of the emission shape. Animatable.
    EmitterPosition: kurbo::Point = "emitterPosition", animatable;

    /// Size of the emission shape. Animatable.
    EmitterSize: kurbo::Size = "emitterSize", animatable;

    /// Geometry particles are emitted from.
    Shape: EmitterShape = "emitterShape";

    /// Region of the shape particles are emitted from.
    Mode: EmitterMode = "emitterMode";

    /// Multiplier applied to each cell's velocity. Animatable.
    Velocity: f32 = "velocity", animatable;

    /// Multiplier applied to each cell's scale. Animatable.
    Scale: f32 = "scale", animatable;

    /// Multiplier applied to each cell's spin. Animatable.
    Spin: f32 = "spin", animatable;

    /// Seed for the emitter's random number generator.
    Seed: i64 = "seed";
}

/// Geometry particles are emitted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmitterShape {
    /// A single point.
    Point,
    /// A line across the emitter's size.
    Line,
    /// An axis-aligned rectangle.
    Rectangle,
    /// An axis-aligned box.
    Cuboid,
    /// A circle.
    Circle,
    /// A sphere.
    Sphere,
}

impl EmitterShape {
    /// Returns the framework's wire name for this shape.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Cuboid => "cuboid",
            Self::Circle => "circle",
            Self::Sphere => "sphere",
        }
    }
}

impl From<EmitterShape> for KvcValue {
    fn from(v: EmitterShape) -> Self {
        Self::Keyword(v.keyword())
    }
}

/// Region of the emission shape particles are born in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EmitterMode {
    /// From the shape's defining points.
    Points,
    /// From the shape's outline.
    Outline,
    /// From the shape's surface.
    Surface,
    /// From anywhere inside the shape.
    Volume,
}

impl EmitterMode {
    /// Returns the framework's wire name for this mode.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Outline => "outline",
            Self::Surface => "surface",
            Self::Volume => "volume",
        }
    }
}

impl From<EmitterMode> for KvcValue {
    fn from(v: EmitterMode) -> Self {
        Self::Keyword(v.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Capabilities, Family, LayerProperty, Settable};

    #[test]
    fn emitter_family() {
        assert_eq!(BirthRate::FAMILY, Family::Emitter);
        assert_eq!(EmitterPosition::KEY_PATH.as_str(), "emitterPosition");
    }

    #[test]
    fn multipliers_round_trip() {
        let p = Velocity::new(2.0);
        assert_eq!(p.value(), Some(&2.0));
        assert_eq!(Spin::unset().value(), None);
    }

    #[test]
    fn shape_and_mode_keywords() {
        assert_eq!(
            KvcValue::from(EmitterShape::Cuboid),
            KvcValue::Keyword("cuboid")
        );
        assert_eq!(
            KvcValue::from(EmitterMode::Outline),
            KvcValue::Keyword("outline")
        );
    }

    #[test]
    fn seed_is_not_animatable() {
        assert!(!Seed::CAPABILITIES.contains(Capabilities::ANIMATABLE));
        assert!(Lifetime::CAPABILITIES.contains(Capabilities::ANIMATABLE));
    }
}
