// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime value shapes for the key-value-coding boundary.
//!
//! The native framework accepts a closed set of value shapes when assigning
//! through a key path. [`KvcValue`] enumerates them, and `From` conversions
//! cover every native value domain the catalog uses, so a typed binding can
//! be lowered to a `(key path, value)` pair without the caller naming the
//! variant.
//!
//! Colors cross the boundary in sRGB. A binding that carries a linear-space
//! color (see [`Linear`](crate::props::color::Linear)) is converted here.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::{AlphaColor, LinearSrgb, Srgb};

/// A property value in the shape the key-value-coding boundary accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum KvcValue {
    /// A boolean property.
    Bool(bool),
    /// An integral count or index.
    Integer(i64),
    /// A floating-point scalar.
    Number(f64),
    /// Free-form text.
    Text(String),
    /// The wire name of an enumerated style.
    Keyword(&'static str),
    /// A single sRGB color.
    Color(Color),
    /// An ordered list of sRGB colors.
    Colors(Vec<Color>),
    /// An ordered list of scalars.
    Numbers(Vec<f64>),
    /// An ordered list of integers.
    Integers(Vec<i64>),
    /// A 2-D point.
    Point(kurbo::Point),
    /// A 2-D size.
    Size(kurbo::Size),
}

impl From<bool> for KvcValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for KvcValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for KvcValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for KvcValue {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for KvcValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Color> for KvcValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<AlphaColor<LinearSrgb>> for KvcValue {
    fn from(v: AlphaColor<LinearSrgb>) -> Self {
        Self::Color(v.convert::<Srgb>())
    }
}

impl From<Vec<Color>> for KvcValue {
    fn from(v: Vec<Color>) -> Self {
        Self::Colors(v)
    }
}

impl From<Vec<f64>> for KvcValue {
    fn from(v: Vec<f64>) -> Self {
        Self::Numbers(v)
    }
}

impl From<Vec<i64>> for KvcValue {
    fn from(v: Vec<i64>) -> Self {
        Self::Integers(v)
    }
}

impl From<kurbo::Point> for KvcValue {
    fn from(v: kurbo::Point) -> Self {
        Self::Point(v)
    }
}

impl From<kurbo::Size> for KvcValue {
    fn from(v: kurbo::Size) -> Self {
        Self::Size(v)
    }
}
