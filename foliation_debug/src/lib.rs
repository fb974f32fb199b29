// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for foliation diagnostics.
//!
//! This crate provides [`PropertySink`](foliation_core::sink::PropertySink)
//! implementations for development and tests:
//!
//! - [`recorder::RecorderSink`] — retains applied transactions and counts
//!   updates per key path.
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-update output.
//! - [`json::export`] — writes recorded transactions as JSON for external
//!   inspection tooling.

pub mod json;
pub mod pretty;
pub mod recorder;
