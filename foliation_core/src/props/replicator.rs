// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of layers that tile copies of their sublayers.

use peniko::Color;

use crate::props::color::ColorProperty;
use crate::props::declare_properties;

declare_properties! {
    family: Replicator / ReplicatorLayerProperty;

    /// Number of copies drawn, including the original.
    InstanceCount: i64 = "instanceCount";

    /// Delay between the instance animations, in seconds. Animatable.
    InstanceDelay: f64 = "instanceDelay", animatable;

    /// Color the first instance is multiplied by. Animatable.
    InstanceColor: Color = "instanceColor", animatable;

    /// Red added to the instance color for each successive copy. Animatable.
    InstanceRedOffset: f32 = "instanceRedOffset", animatable;

    /// Green added to the instance color for each successive copy. Animatable.
    InstanceGreenOffset: f32 = "instanceGreenOffset", animatable;

    /// Blue added to the instance color for each successive copy. Animatable.
    InstanceBlueOffset: f32 = "instanceBlueOffset", animatable;

    /// Alpha added to the instance color for each successive copy. Animatable.
    InstanceAlphaOffset: f32 = "instanceAlphaOffset", animatable;

    /// Whether instances are distributed in depth rather than flattened.
    PreservesDepth: bool = "preservesDepth";
}

impl ColorProperty for InstanceColor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{Capabilities, Family, LayerProperty, Settable};

    #[test]
    fn instance_count_scenario() {
        let p = InstanceCount::new(5);
        assert_eq!(p.value(), Some(&5));
        assert_eq!(InstanceCount::KEY_PATH.as_str(), "instanceCount");
    }

    #[test]
    fn count_is_not_animatable() {
        assert!(!InstanceCount::CAPABILITIES.contains(Capabilities::ANIMATABLE));
        assert!(InstanceDelay::CAPABILITIES.contains(Capabilities::ANIMATABLE));
    }

    #[test]
    fn color_offsets() {
        assert_eq!(InstanceRedOffset::KEY_PATH.as_str(), "instanceRedOffset");
        let p = InstanceAlphaOffset::new(-0.1);
        assert_eq!(p.into_value(), Some(-0.1));
    }

    #[test]
    fn replicator_family() {
        assert_eq!(PreservesDepth::FAMILY, Family::Replicator);
    }
}
