// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable transaction output.
//!
//! [`PrettyPrintSink`] implements [`PropertySink`] and writes one line per
//! update to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use foliation_core::sink::PropertySink;
use foliation_core::update::Transaction;

/// Writes human-readable update lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> PropertySink for PrettyPrintSink<W> {
    fn apply(&mut self, txn: &Transaction) {
        let _ = writeln!(
            self.writer,
            "[txn] updates={} actions_disabled={}",
            txn.len(),
            txn.actions_disabled(),
        );
        for update in txn.updates() {
            let verb = if update.animated { "animate" } else { "set" };
            match &update.value {
                Some(value) => {
                    let _ = writeln!(
                        self.writer,
                        "  [{verb}] {key}={value:?}",
                        key = update.key_path,
                    );
                }
                None => {
                    let _ = writeln!(
                        self.writer,
                        "  [{verb}] {key}=<unset>",
                        key = update.key_path,
                    );
                }
            }
        }
    }
}
