// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-path identity and composition.
//!
//! Every binding type carries a [`KeyPath`]: the immutable string under which
//! the native framework reads and writes the property via key-value coding.
//! Key paths are associated constants, so all instances of a binding type
//! share the same path and no instance is needed to look it up.
//!
//! Dotted composition ([`join`], [`KeyPath::append`]) addresses
//! sub-properties of a structured value, e.g. `"transform"` + `"scale.x"`
//! yields `"transform.scale.x"`.

use alloc::string::String;
use core::fmt;

/// A static key-path string identifying a property within the framework's
/// key-value-coding namespace.
///
/// Obtained from a binding type's
/// [`KEY_PATH`](crate::property::LayerProperty::KEY_PATH) constant rather
/// than constructed per instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPath(&'static str);

impl KeyPath {
    /// Creates a key path from a static string.
    #[inline]
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Returns the underlying string.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Returns a new dotted path addressing `segment` beneath this path.
    ///
    /// # Panics
    ///
    /// Panics if `segment` is empty.
    #[must_use]
    pub fn append(self, segment: &str) -> String {
        join(self.0, segment)
    }

    /// Iterates the dot-separated components of this path.
    pub fn components(self) -> impl Iterator<Item = &'static str> {
        self.0.split('.')
    }
}

impl fmt::Debug for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPath({:?})", self.0)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Joins a base path and a segment with a `.` separator.
///
/// # Panics
///
/// Panics if `segment` is empty.
#[must_use]
pub fn join(base: &str, segment: &str) -> String {
    assert!(!segment.is_empty(), "key path segment must not be empty");
    let mut path = String::with_capacity(base.len() + 1 + segment.len());
    path.push_str(base);
    path.push('.');
    path.push_str(segment);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn as_str_round_trip() {
        let kp = KeyPath::new("instanceCount");
        assert_eq!(kp.as_str(), "instanceCount");
    }

    #[test]
    fn append_builds_dotted_path() {
        let kp = KeyPath::new("transform");
        assert_eq!(kp.append("scale"), "transform.scale");
        assert_eq!(kp.append("scale.x"), "transform.scale.x");
    }

    #[test]
    fn join_composes() {
        assert_eq!(join("bounds", "size"), "bounds.size");
        assert_eq!(join("bounds.size", "width"), "bounds.size.width");
    }

    #[test]
    #[should_panic(expected = "key path segment must not be empty")]
    fn join_rejects_empty_segment() {
        let _ = join("transform", "");
    }

    #[test]
    fn components_split_on_dots() {
        let kp = KeyPath::new("sublayerTransform.rotation.z");
        let parts: alloc::vec::Vec<_> = kp.components().collect();
        assert_eq!(parts, ["sublayerTransform", "rotation", "z"]);
    }

    #[test]
    fn single_component() {
        let kp = KeyPath::new("opacity");
        assert_eq!(kp.components().count(), 1);
    }

    #[test]
    fn debug_and_display() {
        let kp = KeyPath::new("lineDashPattern");
        assert_eq!(format!("{kp:?}"), "KeyPath(\"lineDashPattern\")");
        assert_eq!(format!("{kp}"), "lineDashPattern");
    }
}
