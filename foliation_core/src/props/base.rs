// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties common to every layer.

use peniko::Color;

use crate::props::color::ColorProperty;
use crate::props::declare_properties;

declare_properties! {
    family: Base / BaseLayerProperty;

    /// The opacity of the layer, in `[0, 1]`. Animatable.
    Opacity: f32 = "opacity", animatable;

    /// Whether the layer is omitted from display. Animatable.
    Hidden: bool = "hidden", animatable;

    /// Whether sublayers are clipped to the layer's bounds. Animatable.
    MasksToBounds: bool = "masksToBounds", animatable;

    /// Radius used to round the layer's corners. Animatable.
    CornerRadius: f64 = "cornerRadius", animatable;

    /// Width of the layer's border. Animatable.
    BorderWidth: f64 = "borderWidth", animatable;

    /// Color of the layer's border. Animatable.
    BorderColor: Color = "borderColor", animatable;

    /// Color the layer's bounds are filled with. Animatable.
    BackgroundColor: Color = "backgroundColor", animatable;

    /// Color of the layer's shadow. Animatable.
    ShadowColor: Color = "shadowColor", animatable;

    /// Opacity of the layer's shadow, in `[0, 1]`. Animatable.
    ShadowOpacity: f32 = "shadowOpacity", animatable;

    /// Offset of the layer's shadow. Animatable.
    ShadowOffset: kurbo::Size = "shadowOffset", animatable;

    /// Blur radius used to render the layer's shadow. Animatable.
    ShadowRadius: f64 = "shadowRadius", animatable;

    /// Position on the z axis, used for stacking order. Animatable.
    ZPosition: f64 = "zPosition", animatable;

    /// Anchor point of the layer's bounds, in unit coordinates. Animatable.
    AnchorPoint: kurbo::Point = "anchorPoint", animatable;
}

impl ColorProperty for BorderColor {}
impl ColorProperty for BackgroundColor {}
impl ColorProperty for ShadowColor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Capabilities, Family, LayerProperty, Settable};

    #[test]
    fn key_paths_are_type_level() {
        assert_eq!(Opacity::KEY_PATH.as_str(), "opacity");
        assert_eq!(MasksToBounds::KEY_PATH.as_str(), "masksToBounds");
        assert_eq!(ShadowOffset::KEY_PATH.as_str(), "shadowOffset");
        // The key path does not depend on the instance or its value.
        let _ = Opacity::new(0.25);
        let _ = Opacity::unset();
        assert_eq!(Opacity::KEY_PATH.as_str(), "opacity");
    }

    #[test]
    fn value_round_trip() {
        let p = CornerRadius::new(8.0);
        assert_eq!(p.value(), Some(&8.0));
        assert_eq!(p.into_value(), Some(8.0));

        let p = CornerRadius::unset();
        assert_eq!(p.value(), None);
    }

    #[test]
    fn family_and_capabilities() {
        assert_eq!(Opacity::FAMILY, Family::Base);
        assert!(Opacity::CAPABILITIES.contains(Capabilities::ANIMATABLE));
        assert!(Hidden::CAPABILITIES.contains(Capabilities::SETTABLE));
    }

    #[test]
    fn anchor_point_carries_unit_coordinates() {
        let p = AnchorPoint::new(kurbo::Point::new(0.5, 0.5));
        assert_eq!(p.value(), Some(&kurbo::Point::new(0.5, 0.5)));
    }
}
