// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The property catalog, one module per layer family.
//!
//! Every type here follows the same shape: a struct carrying an optional
//! value of the property's native domain, constructed with
//! [`new`](base::Opacity::new) or [`unset`](base::Opacity::unset), plus
//! trait impls tying it to its constant key path, its one layer family, and
//! (where the framework documents it) animatability. The
//! `declare_properties!` macro keeps the declarations uniform; the key
//! paths are the framework's documented property names, verbatim.
//!
//! Enumerated styles (line caps, gradient types, …) are plain enums that
//! lower to their framework wire names as
//! [`KvcValue::Keyword`](crate::value::KvcValue::Keyword).

pub mod base;
pub mod color;
pub mod emitter;
pub mod gradient;
pub mod replicator;
pub mod shape;
pub mod text;

/// Declares the binding types of one layer family.
///
/// Each entry produces a struct with an `Option` value field, `new`/`unset`
/// constructors, and impls of `LayerProperty`, `Settable`, the family's
/// marker trait, and — with the trailing `animatable` flag — `Animatable`.
macro_rules! declare_properties {
    (
        family: $variant:ident / $marker:ident;
        $(
            $(#[$meta:meta])*
            $name:ident : $value:ty = $key:literal $(, $anim:ident)? ;
        )+
    ) => {$(
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            value: Option<$value>,
        }

        impl $name {
            /// Creates a binding carrying an explicit value.
            #[must_use]
            pub fn new(value: $value) -> Self {
                Self { value: Some(value) }
            }

            /// Creates a binding with no explicit value, deferring to the
            /// framework's default for this property.
            #[must_use]
            pub const fn unset() -> Self {
                Self { value: None }
            }
        }

        impl $crate::property::LayerProperty for $name {
            type Value = $value;
            const KEY_PATH: $crate::keypath::KeyPath =
                $crate::keypath::KeyPath::new($key);
            const FAMILY: $crate::property::Family =
                $crate::property::Family::$variant;
            const CAPABILITIES: $crate::property::Capabilities =
                $crate::props::capability_set!($($anim)?);
        }

        impl $crate::property::Settable for $name {
            fn value(&self) -> Option<&$value> {
                self.value.as_ref()
            }

            fn into_value(self) -> Option<$value> {
                self.value
            }
        }

        impl $crate::property::$marker for $name {}

        $crate::props::mark_animatable!($name $(, $anim)?);
    )+};
}

macro_rules! capability_set {
    (animatable) => {
        $crate::property::Capabilities::KEY_PATH
            .union($crate::property::Capabilities::SETTABLE)
            .union($crate::property::Capabilities::ANIMATABLE)
    };
    () => {
        $crate::property::Capabilities::KEY_PATH
            .union($crate::property::Capabilities::SETTABLE)
    };
}

macro_rules! mark_animatable {
    ($name:ident, animatable) => {
        impl $crate::property::Animatable for $name {}
    };
    ($name:ident) => {};
}

pub(crate) use capability_set;
pub(crate) use declare_properties;
pub(crate) use mark_animatable;
