// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed key-value-coded property bindings for animation layer trees.
//!
//! `foliation_core` wraps each string-keyed layer property of a native
//! animation framework in a small value-carrying binding type. The binding
//! pairs a statically-typed value with the key path the framework uses for
//! runtime key-value coding, and tags — at the type level — which layer
//! family the property belongs to and whether the framework can animate it.
//! Mistakes the framework would only surface at runtime (a boolean assigned
//! to a color key, a shape property applied to a gradient layer, an attempt
//! to animate a non-animatable property) become compile errors instead.
//!
//! # Architecture
//!
//! The crate is organized around a one-way flow from typed bindings to the
//! untyped boundary of the native framework:
//!
//! ```text
//!   props::* (typed bindings)
//!       │
//!       ▼
//!   Transaction::set() / animate() ──► PropertyUpdate (key path, value)
//!                                           │
//!                                           ▼
//!                              PropertySink::apply() (native KVC boundary)
//! ```
//!
//! **[`keypath`]** — [`KeyPath`](keypath::KeyPath) newtype over the static
//! key-path string, plus dotted-path composition for addressable
//! sub-properties.
//!
//! **[`property`]** — The capability traits: key-path provision, settability,
//! animatability, and the six layer-family markers, together with their
//! runtime mirrors ([`Family`](property::Family),
//! [`Capabilities`](property::Capabilities)).
//!
//! **[`value`]** — [`KvcValue`](value::KvcValue), the closed set of value
//! shapes the key-value-coding boundary accepts.
//!
//! **[`update`]** — [`Transaction`](update::Transaction) batches typed
//! bindings into ordered [`PropertyUpdate`](update::PropertyUpdate) records.
//!
//! **[`sink`]** — The [`PropertySink`](sink::PropertySink) trait that
//! platform glue implements to carry updates across the native boundary.
//!
//! **[`props`]** — The property catalog, one module per layer family.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod keypath;
pub mod property;
pub mod props;
pub mod sink;
pub mod update;
pub mod value;
