// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary contract for native-framework integrations.
//!
//! Foliation stops at the edge of the native animation framework. Everything
//! inside this workspace is typed; the framework itself is reached through
//! string-keyed reflection by platform glue that implements [`PropertySink`]:
//!
//! - **Applier** — Walks a [`Transaction`]'s updates and performs the
//!   key-value-coded assignment on the live layer object, wrapping the batch
//!   in the platform's transaction begin/commit pair and honoring
//!   [`Transaction::actions_disabled`].
//!
//! - **Thread discipline** — Whatever rules the framework imposes on layer
//!   mutation (main-thread-only, transaction nesting) are the sink's
//!   responsibility. Transactions themselves are immutable value objects and
//!   may be built on any thread.
//!
//! # Crate boundaries
//!
//! `foliation_core` owns the typed catalog, the value model, and this
//! contract module. Platform crates depend on `foliation_core` and provide
//! the reflection glue. Application code depends on both and hands built
//! transactions to the sink.

use crate::update::Transaction;

/// Applies a transaction's updates to a native layer via key-value coding.
///
/// Both real platform appliers and test doubles implement this trait; the
/// typed side of the boundary never needs to know which it is talking to.
pub trait PropertySink {
    /// Applies the given transaction to the backing layer object.
    fn apply(&mut self, txn: &Transaction);
}
