// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits for property bindings.
//!
//! A binding's capability set is expressed as a trait intersection: every
//! binding implements [`LayerProperty`] (it provides a key path) and
//! [`Settable`] (its value may be written), exactly one of the six
//! layer-family markers, and — where the framework documents support —
//! [`Animatable`]. The markers carry no methods; they exist so that generic
//! bounds reject invalid combinations at compile time:
//!
//! ```compile_fail
//! use foliation_core::property::Animatable;
//! use foliation_core::props::replicator::InstanceCount;
//!
//! fn spin_up<P: Animatable>(_p: P) {}
//!
//! // `instanceCount` is not animatable.
//! spin_up(InstanceCount::new(5));
//! ```
//!
//! [`Family`] and [`Capabilities`] are runtime mirrors of the same tags for
//! diagnostics; they have no bearing on what compiles.

use bitflags::bitflags;

use crate::keypath::KeyPath;

/// The layer family a property belongs to.
///
/// Runtime mirror of the family marker traits. `Base` properties are those
/// the framework defines on every layer; the other five name the specialized
/// layer kinds with their own property sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Properties common to every layer.
    Base,
    /// Path-stroking and filling layers.
    Shape,
    /// Particle emitter layers.
    Emitter,
    /// Color gradient layers.
    Gradient,
    /// Layers that tile copies of their sublayers.
    Replicator,
    /// Text-drawing layers.
    Text,
}

impl Family {
    /// Returns the family's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Shape => "shape",
            Self::Emitter => "emitter",
            Self::Gradient => "gradient",
            Self::Replicator => "replicator",
            Self::Text => "text",
        }
    }
}

bitflags! {
    /// Runtime mirror of a binding type's capability tags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// The binding exposes a key path.
        const KEY_PATH = 1 << 0;
        /// The binding's value may be written.
        const SETTABLE = 1 << 1;
        /// The framework can interpolate the value over time.
        const ANIMATABLE = 1 << 2;
    }
}

/// A property binding: a statically-known value type tied to a constant key
/// path within one layer family.
///
/// The key path is an associated constant — a pure function of the binding
/// type, never of an instance.
pub trait LayerProperty {
    /// The property's native value domain.
    type Value;

    /// Key path used for key-value coding on the native layer.
    const KEY_PATH: KeyPath;

    /// Which layer family the property belongs to.
    const FAMILY: Family;

    /// Runtime mirror of the binding's capability tags.
    const CAPABILITIES: Capabilities;
}

/// A binding whose value may be written to a layer.
///
/// An absent value means "defer to the framework's default" — the update is
/// still recorded, clearing any explicit value previously set.
pub trait Settable: LayerProperty {
    /// Returns the carried value, if one was set.
    fn value(&self) -> Option<&Self::Value>;

    /// Consumes the binding and returns the carried value, if one was set.
    fn into_value(self) -> Option<Self::Value>;
}

/// Marker: the framework can interpolate this property across a time
/// interval.
pub trait Animatable: Settable {}

/// Marker: valid on every layer.
pub trait BaseLayerProperty: LayerProperty {}

/// Marker: valid on shape layers.
pub trait ShapeLayerProperty: LayerProperty {}

/// Marker: valid on particle emitter layers.
pub trait EmitterLayerProperty: LayerProperty {}

/// Marker: valid on gradient layers.
pub trait GradientLayerProperty: LayerProperty {}

/// Marker: valid on replicator layers.
pub trait ReplicatorLayerProperty: LayerProperty {}

/// Marker: valid on text layers.
pub trait TextLayerProperty: LayerProperty {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names() {
        assert_eq!(Family::Base.name(), "base");
        assert_eq!(Family::Replicator.name(), "replicator");
        assert_eq!(Family::Text.name(), "text");
    }

    #[test]
    fn capability_composition() {
        let caps = Capabilities::KEY_PATH | Capabilities::SETTABLE;
        assert!(caps.contains(Capabilities::SETTABLE));
        assert!(!caps.contains(Capabilities::ANIMATABLE));

        let caps = caps | Capabilities::ANIMATABLE;
        assert!(caps.contains(Capabilities::ANIMATABLE));
    }

    #[test]
    fn bounds_select_by_capability() {
        // Generic bounds admit exactly the tagged bindings; the negative
        // cases are compile errors (see the module docs).
        fn animatable_key<P: Animatable>(_p: &P) -> &'static str {
            P::KEY_PATH.as_str()
        }
        fn shape_key<P: ShapeLayerProperty>(_p: &P) -> &'static str {
            P::KEY_PATH.as_str()
        }
        fn replicator_key<P: ReplicatorLayerProperty>(_p: &P) -> &'static str {
            P::KEY_PATH.as_str()
        }

        let opacity = crate::props::base::Opacity::new(1.0);
        assert_eq!(animatable_key(&opacity), "opacity");

        let width = crate::props::shape::LineWidth::new(2.0);
        assert_eq!(shape_key(&width), "lineWidth");
        assert_eq!(animatable_key(&width), "lineWidth");

        let count = crate::props::replicator::InstanceCount::new(5);
        assert_eq!(replicator_key(&count), "instanceCount");
    }
}
