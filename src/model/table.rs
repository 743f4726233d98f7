//! Flattens an arbitrary nested attribute record into ordered,
//! displayable key/value rows.
//!
//! Total over any JSON-shaped input and pure: nulls and empty containers
//! are suppressed, sequences become nested rows, and everything else
//! renders as text. Key order follows the record's own order.

use serde_json::{Map, Value};

/// One rendered key/value row of a record table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
	pub key: String,
	pub value: DisplayValue,
}

/// Renderable form of a record value.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayValue {
	/// A scalar, or a one-level mapping serialized as JSON text.
	Text(String),
	/// A sequence, one entry per element.
	Seq(Vec<SeqEntry>),
}

/// One element of a rendered sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum SeqEntry {
	/// A record element, flattened into its own sub-table.
	Rows(Vec<TableRow>),
	/// A scalar element paired with its 1-based position.
	Item { index: usize, text: String },
}

/// Flatten a record into displayable rows, preserving key order.
pub fn flatten(record: &Map<String, Value>) -> Vec<TableRow> {
	record
		.iter()
		.filter_map(|(key, value)| {
			display_value(value).map(|value| TableRow {
				key: key.clone(),
				value,
			})
		})
		.collect()
}

fn display_value(value: &Value) -> Option<DisplayValue> {
	match value {
		Value::Null => None,
		Value::Object(map) if map.is_empty() => None,
		Value::Array(items) if items.is_empty() => None,
		Value::Array(items) => Some(DisplayValue::Seq(
			items
				.iter()
				.enumerate()
				.map(|(index, item)| match item {
					Value::Object(map) => SeqEntry::Rows(flatten(map)),
					other => SeqEntry::Item {
						index: index + 1,
						text: scalar_text(other),
					},
				})
				.collect(),
		)),
		// One level only: a nested mapping renders as its JSON text.
		Value::Object(_) => Some(DisplayValue::Text(value.to_string())),
		scalar => Some(DisplayValue::Text(scalar_text(scalar))),
	}
}

/// Literal text form of a scalar; strings render unquoted.
fn scalar_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn rows(value: Value) -> Vec<TableRow> {
		flatten(value.as_object().unwrap())
	}

	#[test]
	fn empty_record_flattens_to_nothing() {
		assert!(rows(json!({})).is_empty());
	}

	#[test]
	fn null_values_are_suppressed() {
		let rows = rows(json!({ "a": null, "b": "x" }));
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].key, "b");
		assert_eq!(rows[0].value, DisplayValue::Text("x".to_owned()));
	}

	#[test]
	fn empty_containers_are_suppressed() {
		assert!(rows(json!({ "a": {}, "b": [] })).is_empty());
	}

	#[test]
	fn zero_false_and_empty_string_are_data() {
		let rows = rows(json!({ "count": 0, "verified": false, "note": "" }));
		let texts: Vec<_> = rows
			.iter()
			.map(|r| match &r.value {
				DisplayValue::Text(t) => t.as_str(),
				other => panic!("unexpected value: {other:?}"),
			})
			.collect();
		assert_eq!(texts, vec!["0", "false", ""]);
	}

	#[test]
	fn record_sequences_become_nested_tables() {
		let rows = rows(json!({ "items": [{ "a": 1 }, { "a": 2 }] }));
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].key, "items");
		let DisplayValue::Seq(entries) = &rows[0].value else {
			panic!("expected a sequence");
		};
		assert_eq!(entries.len(), 2);
		for (entry, expected) in entries.iter().zip(["1", "2"]) {
			let SeqEntry::Rows(sub) = entry else {
				panic!("expected nested rows");
			};
			assert_eq!(sub.len(), 1);
			assert_eq!(sub[0].key, "a");
			assert_eq!(sub[0].value, DisplayValue::Text(expected.to_owned()));
		}
	}

	#[test]
	fn scalar_sequences_are_enumerated_from_one() {
		let rows = rows(json!({ "tags": ["x", "y"] }));
		assert_eq!(
			rows[0].value,
			DisplayValue::Seq(vec![
				SeqEntry::Item {
					index: 1,
					text: "x".to_owned()
				},
				SeqEntry::Item {
					index: 2,
					text: "y".to_owned()
				},
			])
		);
	}

	#[test]
	fn mixed_sequences_keep_element_positions() {
		let rows = rows(json!({ "mixed": [{ "a": 1 }, "x"] }));
		let DisplayValue::Seq(entries) = &rows[0].value else {
			panic!("expected a sequence");
		};
		assert!(matches!(&entries[0], SeqEntry::Rows(_)));
		assert_eq!(
			entries[1],
			SeqEntry::Item {
				index: 2,
				text: "x".to_owned()
			}
		);
	}

	#[test]
	fn nested_mappings_render_as_json_text() {
		let rows = rows(json!({ "context": { "city": "Berlin", "zip": 10115 } }));
		assert_eq!(
			rows[0].value,
			DisplayValue::Text(r#"{"city":"Berlin","zip":10115}"#.to_owned())
		);
	}

	#[test]
	fn nulls_inside_nested_records_are_suppressed() {
		let rows = rows(json!({ "items": [{ "a": 1, "b": null }] }));
		let DisplayValue::Seq(entries) = &rows[0].value else {
			panic!("expected a sequence");
		};
		let SeqEntry::Rows(sub) = &entries[0] else {
			panic!("expected nested rows");
		};
		assert_eq!(sub.len(), 1);
		assert_eq!(sub[0].key, "a");
	}

	#[test]
	fn key_order_is_preserved() {
		let rows = rows(json!({ "z": 1, "a": 2, "m": 3 }));
		let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
		assert_eq!(keys, vec!["z", "a", "m"]);
	}

	#[test]
	fn flattening_rendered_scalars_is_idempotent() {
		let first = rows(json!({ "name": "Ada", "visits": 7 }));
		let mut rendered = Map::new();
		for row in &first {
			let DisplayValue::Text(text) = &row.value else {
				panic!("expected text");
			};
			rendered.insert(row.key.clone(), Value::String(text.clone()));
		}
		let second = flatten(&rendered);
		let texts = |rows: &[TableRow]| -> Vec<String> {
			rows.iter()
				.map(|r| match &r.value {
					DisplayValue::Text(t) => t.clone(),
					other => panic!("unexpected value: {other:?}"),
				})
				.collect()
		};
		assert_eq!(texts(&first), texts(&second));
	}
}
