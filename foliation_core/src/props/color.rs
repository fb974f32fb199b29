// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color-space sub-bindings for color-valued properties.
//!
//! Color properties cross the key-value-coding boundary in sRGB, but a
//! caller working in linear light can address the *same* property through
//! [`Linear<P>`]: a sub-binding with `P`'s exact key path and family whose
//! value type is the linear-space representation. Key path and value type
//! are independent axes — the pair only has to agree with what the
//! framework expects at assignment time, and the conversion happens at the
//! boundary (see [`KvcValue`](crate::value::KvcValue)).

use core::fmt;
use core::marker::PhantomData;

use peniko::Color;
use peniko::color::{AlphaColor, LinearSrgb};

use crate::keypath::KeyPath;
use crate::property::{
    Animatable, BaseLayerProperty, Capabilities, EmitterLayerProperty, Family,
    GradientLayerProperty, LayerProperty, ReplicatorLayerProperty, Settable, ShapeLayerProperty,
    TextLayerProperty,
};

/// Marker: a binding whose value is a single sRGB color.
///
/// Implemented by the catalog's color properties so that [`Linear<P>`] can
/// re-expose them in linear space.
pub trait ColorProperty: Settable + LayerProperty<Value = Color> {}

/// The linear-color-space sub-binding of a color property `P`.
///
/// Shares `P`'s key path, family, and capabilities; only the declared value
/// type differs.
pub struct Linear<P: ColorProperty> {
    value: Option<AlphaColor<LinearSrgb>>,
    _marker: PhantomData<fn() -> P>,
}

impl<P: ColorProperty> Linear<P> {
    /// Creates a binding carrying an explicit linear-space color.
    #[must_use]
    pub const fn new(value: AlphaColor<LinearSrgb>) -> Self {
        Self {
            value: Some(value),
            _marker: PhantomData,
        }
    }

    /// Creates a binding with no explicit value, deferring to the
    /// framework's default for this property.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            value: None,
            _marker: PhantomData,
        }
    }
}

impl<P: ColorProperty> LayerProperty for Linear<P> {
    type Value = AlphaColor<LinearSrgb>;
    const KEY_PATH: KeyPath = P::KEY_PATH;
    const FAMILY: Family = P::FAMILY;
    const CAPABILITIES: Capabilities = P::CAPABILITIES;
}

impl<P: ColorProperty> Settable for Linear<P> {
    fn value(&self) -> Option<&AlphaColor<LinearSrgb>> {
        self.value.as_ref()
    }

    fn into_value(self) -> Option<AlphaColor<LinearSrgb>> {
        self.value
    }
}

// Capability tags follow the parent property.
impl<P: ColorProperty + Animatable> Animatable for Linear<P> {}
impl<P: ColorProperty + BaseLayerProperty> BaseLayerProperty for Linear<P> {}
impl<P: ColorProperty + ShapeLayerProperty> ShapeLayerProperty for Linear<P> {}
impl<P: ColorProperty + EmitterLayerProperty> EmitterLayerProperty for Linear<P> {}
impl<P: ColorProperty + GradientLayerProperty> GradientLayerProperty for Linear<P> {}
impl<P: ColorProperty + ReplicatorLayerProperty> ReplicatorLayerProperty for Linear<P> {}
impl<P: ColorProperty + TextLayerProperty> TextLayerProperty for Linear<P> {}

// Manual trait implementations so `P` itself is not required to be `Copy`,
// `Clone`, etc.

impl<P: ColorProperty> Copy for Linear<P> {}

impl<P: ColorProperty> Clone for Linear<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ColorProperty> PartialEq for Linear<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<P: ColorProperty> fmt::Debug for Linear<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Linear")
            .field("key_path", &P::KEY_PATH)
            .field("value", &self.value)
            .finish()
    }
}
