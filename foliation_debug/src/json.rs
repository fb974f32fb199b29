// Copyright 2026 the Foliation Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON transaction export.
//!
//! [`export`] writes a slice of applied transactions (e.g. from a
//! [`RecorderSink`](super::recorder::RecorderSink)) as a JSON array, for
//! diffing in tests or loading into external inspection tooling.

use std::io::{self, Write};

use serde_json::{Value, json};

use foliation_core::update::Transaction;
use foliation_core::value::KvcValue;

/// Exports transactions as a JSON array of transaction objects.
///
/// Each transaction object carries its `actionsDisabled` flag and an
/// `updates` array of `{keyPath, value, animated}` objects. Absent binding
/// values serialize as `null`; colors serialize as `[r, g, b, a]` component
/// arrays in sRGB.
pub fn export(transactions: &[Transaction], writer: &mut dyn Write) -> io::Result<()> {
    let doc: Vec<Value> = transactions
        .iter()
        .map(|txn| {
            let updates: Vec<Value> = txn
                .updates()
                .iter()
                .map(|update| {
                    json!({
                        "keyPath": update.key_path.as_ref(),
                        "value": update.value.as_ref().map_or(Value::Null, value_json),
                        "animated": update.animated,
                    })
                })
                .collect();
            json!({
                "actionsDisabled": txn.actions_disabled(),
                "updates": updates,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)
}

fn value_json(value: &KvcValue) -> Value {
    match value {
        KvcValue::Bool(b) => json!(b),
        KvcValue::Integer(i) => json!(i),
        KvcValue::Number(n) => json!(n),
        KvcValue::Text(s) => json!(s),
        KvcValue::Keyword(k) => json!(k),
        KvcValue::Color(c) => json!(c.components),
        KvcValue::Colors(cs) => Value::Array(cs.iter().map(|c| json!(c.components)).collect()),
        KvcValue::Numbers(ns) => json!(ns),
        KvcValue::Integers(is) => json!(is),
        KvcValue::Point(p) => json!([p.x, p.y]),
        KvcValue::Size(s) => json!([s.width, s.height]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliation_core::props::replicator::InstanceCount;
    use foliation_core::props::shape::{LineCap, LineCapStyle, LineDashPattern};
    use foliation_core::props::text::ForegroundColor;

    fn export_to_value(transactions: &[Transaction]) -> Value {
        let mut buf = Vec::new();
        export(transactions, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn exports_updates_with_key_paths() {
        let mut txn = Transaction::with_actions_disabled();
        txn.set(InstanceCount::new(5));
        txn.set(LineDashPattern::new(vec![1, 2, 3]));

        let doc = export_to_value(&[txn]);
        assert_eq!(doc[0]["actionsDisabled"], json!(true));
        assert_eq!(doc[0]["updates"][0]["keyPath"], json!("instanceCount"));
        assert_eq!(doc[0]["updates"][0]["value"], json!(5));
        assert_eq!(doc[0]["updates"][1]["value"], json!([1, 2, 3]));
    }

    #[test]
    fn absent_values_are_null() {
        let mut txn = Transaction::new();
        txn.set(ForegroundColor::unset());

        let doc = export_to_value(&[txn]);
        assert_eq!(doc[0]["updates"][0]["keyPath"], json!("foregroundColor"));
        assert_eq!(doc[0]["updates"][0]["value"], Value::Null);
        assert_eq!(doc[0]["updates"][0]["animated"], json!(false));
    }

    #[test]
    fn keywords_export_as_strings() {
        let mut txn = Transaction::new();
        txn.set(LineCapStyle::new(LineCap::Round));

        let doc = export_to_value(&[txn]);
        assert_eq!(doc[0]["updates"][0]["value"], json!("round"));
    }
}
