// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transaction recording.
//!
//! [`RecorderSink`] implements [`PropertySink`] and retains every applied
//! [`Transaction`] in order, aggregating update counts per key path. It
//! doubles as the test double for code that drives a sink.

use hashbrown::HashMap;

use foliation_core::sink::PropertySink;
use foliation_core::update::Transaction;

/// A [`PropertySink`] that retains applied transactions for inspection.
#[derive(Debug, Default)]
pub struct RecorderSink {
    transactions: Vec<Transaction>,
    counts: HashMap<String, u64>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the applied transactions in application order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the total number of updates across all transactions.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.transactions.iter().map(Transaction::len).sum()
    }

    /// Returns how many updates were applied against `key_path`.
    #[must_use]
    pub fn count_for(&self, key_path: &str) -> u64 {
        self.counts.get(key_path).copied().unwrap_or(0)
    }

    /// Consumes the recorder and returns the applied transactions.
    #[must_use]
    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}

impl PropertySink for RecorderSink {
    fn apply(&mut self, txn: &Transaction) {
        for update in txn.updates() {
            *self.counts.entry_ref(update.key_path.as_ref()).or_insert(0) += 1;
        }
        self.transactions.push(txn.clone());
    }
}
