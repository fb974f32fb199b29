// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transaction building.
//!
//! A [`Transaction`] collects typed bindings into an ordered batch of
//! [`PropertyUpdate`] records — the `(key path, value)` pairs the native
//! boundary consumes. The typed surface is where the capability tags do
//! their work:
//!
//! - [`set`](Transaction::set) accepts any [`Settable`] binding and records
//!   a non-animated update.
//! - [`animate`](Transaction::animate) additionally requires [`Animatable`],
//!   so asking the framework to interpolate a property it cannot animate is
//!   a compile error, not a silent no-op.
//!
//! An absent binding value is recorded as `value: None`, telling the
//! framework to fall back to the property's default.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::keypath;
use crate::property::{Animatable, Settable};
use crate::value::KvcValue;

/// A single `(key path, value)` pair ready for key-value-coding assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyUpdate {
    /// The dotted key path to assign through. Borrowed for plain bindings,
    /// owned when composed via [`Transaction::set_nested`].
    pub key_path: Cow<'static, str>,
    /// The value to assign, or `None` to clear back to the framework default.
    pub value: Option<KvcValue>,
    /// Whether the assignment should be interpolated by the framework.
    pub animated: bool,
}

/// An ordered batch of property updates applied as one unit.
///
/// Mirrors the native framework's transaction scope: backends wrap the
/// batch in the platform's begin/commit pair and honor
/// [`actions_disabled`](Self::actions_disabled) by suppressing implicit
/// animations for the non-animated updates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transaction {
    updates: Vec<PropertyUpdate>,
    actions_disabled: bool,
}

impl Transaction {
    /// Creates an empty transaction with implicit animations left enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            updates: Vec::new(),
            actions_disabled: false,
        }
    }

    /// Creates an empty transaction that suppresses implicit animations.
    #[must_use]
    pub const fn with_actions_disabled() -> Self {
        Self {
            updates: Vec::new(),
            actions_disabled: true,
        }
    }

    /// Records a non-animated update from a typed binding.
    pub fn set<P>(&mut self, binding: P)
    where
        P: Settable,
        P::Value: Into<KvcValue>,
    {
        self.updates.push(PropertyUpdate {
            key_path: Cow::Borrowed(P::KEY_PATH.as_str()),
            value: binding.into_value().map(Into::into),
            animated: false,
        });
    }

    /// Records an animated update from a typed binding.
    ///
    /// Only bindings tagged [`Animatable`] are accepted.
    pub fn animate<P>(&mut self, binding: P)
    where
        P: Animatable,
        P::Value: Into<KvcValue>,
    {
        self.updates.push(PropertyUpdate {
            key_path: Cow::Borrowed(P::KEY_PATH.as_str()),
            value: binding.into_value().map(Into::into),
            animated: true,
        });
    }

    /// Records a non-animated update against a sub-property of the binding's
    /// key path, e.g. `segment = "scale.x"` beneath `"transform"`.
    ///
    /// # Panics
    ///
    /// Panics if `segment` is empty.
    pub fn set_nested<P>(&mut self, binding: P, segment: &str)
    where
        P: Settable,
        P::Value: Into<KvcValue>,
    {
        self.updates.push(PropertyUpdate {
            key_path: Cow::Owned(keypath::join(P::KEY_PATH.as_str(), segment)),
            value: binding.into_value().map(Into::into),
            animated: false,
        });
    }

    /// Returns the recorded updates in insertion order.
    #[must_use]
    pub fn updates(&self) -> &[PropertyUpdate] {
        &self.updates
    }

    /// Returns the number of recorded updates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    /// Returns `true` if no updates have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Whether backends should suppress implicit animations while applying.
    #[must_use]
    pub const fn actions_disabled(&self) -> bool {
        self.actions_disabled
    }
}

/// Extension for lowering a single binding without a [`Transaction`].
pub trait SettableExt: Settable {
    /// Consumes the binding and returns its standalone, non-animated update.
    #[must_use]
    fn update(self) -> PropertyUpdate;
}

impl<P> SettableExt for P
where
    P: Settable,
    P::Value: Into<KvcValue>,
{
    fn update(self) -> PropertyUpdate {
        PropertyUpdate {
            key_path: Cow::Borrowed(P::KEY_PATH.as_str()),
            value: self.into_value().map(Into::into),
            animated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::base::{CornerRadius, Opacity};
    use crate::props::replicator::InstanceCount;
    use crate::props::shape::LineDashPattern;
    use alloc::vec;

    #[test]
    fn set_records_in_insertion_order() {
        let mut txn = Transaction::new();
        txn.set(Opacity::new(0.5));
        txn.set(CornerRadius::new(4.0));

        assert_eq!(txn.len(), 2);
        assert_eq!(txn.updates()[0].key_path, "opacity");
        assert_eq!(txn.updates()[0].value, Some(KvcValue::Number(0.5)));
        assert!(!txn.updates()[0].animated);
        assert_eq!(txn.updates()[1].key_path, "cornerRadius");
    }

    #[test]
    fn animate_marks_updates() {
        let mut txn = Transaction::new();
        txn.animate(Opacity::new(0.0));

        assert!(txn.updates()[0].animated);
        assert!(!txn.actions_disabled());
    }

    #[test]
    fn unset_binding_clears_value() {
        let mut txn = Transaction::with_actions_disabled();
        txn.set(InstanceCount::unset());

        assert!(txn.actions_disabled());
        assert_eq!(txn.updates()[0].key_path, "instanceCount");
        assert_eq!(txn.updates()[0].value, None);
    }

    #[test]
    fn set_nested_composes_key_path() {
        let mut txn = Transaction::new();
        txn.set_nested(CornerRadius::new(2.0), "presentation");

        assert_eq!(txn.updates()[0].key_path, "cornerRadius.presentation");
    }

    #[test]
    fn empty_transaction() {
        let txn = Transaction::new();
        assert!(txn.is_empty());
        assert_eq!(txn.len(), 0);
    }

    #[test]
    fn standalone_update() {
        let update = LineDashPattern::new(vec![1, 2, 3]).update();
        assert_eq!(update.key_path, "lineDashPattern");
        assert_eq!(update.value, Some(KvcValue::Integers(vec![1, 2, 3])));
        assert!(!update.animated);
    }
}
