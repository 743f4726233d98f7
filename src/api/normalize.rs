//! Compatibility shim for legacy payload field names.
//!
//! The service schema renamed `perma_id` to `profile_id` and
//! `app_context` to `application_data`, and hierarchy links carried
//! relation-specific id keys. Older deployments still answer with the
//! old names, so every payload is rewritten here, once, before
//! deserialization. Nothing past this module sees a legacy name.

use serde_json::{Map, Value};

/// Canonicalize a profile document (or profile-list entry).
pub fn profile(value: Value) -> Value {
	let Value::Object(map) = value else {
		return value;
	};
	let mut out = Map::with_capacity(map.len());
	for (key, value) in map {
		match key.as_str() {
			"perma_id" => {
				out.insert("profile_id".to_owned(), value);
			}
			"app_context" => {
				out.insert("application_data".to_owned(), value);
			}
			"profile_hierarchy" => {
				out.insert(key, hierarchy(value));
			}
			_ => {
				out.insert(key, value);
			}
		}
	}
	Value::Object(out)
}

/// Canonicalize an event payload (`perma_id` → `profile_id`).
pub fn event(value: Value) -> Value {
	let Value::Object(map) = value else {
		return value;
	};
	let mut out = Map::with_capacity(map.len());
	for (key, value) in map {
		match key.as_str() {
			"perma_id" => {
				out.insert("profile_id".to_owned(), value);
			}
			_ => {
				out.insert(key, value);
			}
		}
	}
	Value::Object(out)
}

fn hierarchy(value: Value) -> Value {
	let Value::Object(map) = value else {
		return value;
	};
	let mut out = Map::with_capacity(map.len());
	for (key, value) in map {
		match key.as_str() {
			"peer_profile_ids" | "child_profile_ids" => {
				out.insert(key, links(value));
			}
			_ => {
				out.insert(key, value);
			}
		}
	}
	Value::Object(out)
}

fn links(value: Value) -> Value {
	let Value::Array(items) = value else {
		return value;
	};
	Value::Array(items.into_iter().map(link).collect())
}

fn link(value: Value) -> Value {
	let Value::Object(map) = value else {
		return value;
	};
	let mut out = Map::with_capacity(map.len());
	for (key, value) in map {
		match key.as_str() {
			"peer_profile_id" | "child_profile_id" | "perma_id" => {
				out.insert("profile_id".to_owned(), value);
			}
			_ => {
				out.insert(key, value);
			}
		}
	}
	Value::Object(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn renames_legacy_profile_fields() {
		let canonical = profile(json!({
			"perma_id": "p-1",
			"app_context": [{ "app_id": "shop" }],
			"identity": { "email": "a@b.c" }
		}));
		assert_eq!(canonical["profile_id"], json!("p-1"));
		assert_eq!(canonical["application_data"], json!([{ "app_id": "shop" }]));
		assert!(canonical.get("perma_id").is_none());
		assert!(canonical.get("app_context").is_none());
	}

	#[test]
	fn renames_hierarchy_link_ids() {
		let canonical = profile(json!({
			"profile_id": "p-1",
			"profile_hierarchy": {
				"parent_profile_id": "master",
				"peer_profile_ids": [{ "peer_profile_id": "peer-a", "rule_name": "email" }],
				"child_profile_ids": [{ "child_profile_id": "kid" }]
			}
		}));
		let hierarchy = &canonical["profile_hierarchy"];
		assert_eq!(
			hierarchy["peer_profile_ids"][0],
			json!({ "profile_id": "peer-a", "rule_name": "email" })
		);
		assert_eq!(hierarchy["child_profile_ids"][0], json!({ "profile_id": "kid" }));
	}

	#[test]
	fn canonical_input_passes_through() {
		let input = json!({
			"profile_id": "p-1",
			"application_data": [],
			"profile_hierarchy": { "list_profile": true, "peer_profile_ids": [] }
		});
		assert_eq!(profile(input.clone()), input);
	}

	#[test]
	fn preserves_key_order() {
		let canonical = profile(json!({ "identity": {}, "perma_id": "p-1", "personality": {} }));
		let keys: Vec<_> = canonical.as_object().unwrap().keys().cloned().collect();
		assert_eq!(keys, vec!["identity", "profile_id", "personality"]);
	}

	#[test]
	fn non_object_payloads_are_left_alone() {
		assert_eq!(profile(json!("oops")), json!("oops"));
		assert_eq!(event(json!(null)), json!(null));
	}

	#[test]
	fn renames_event_profile_id() {
		let canonical = event(json!({ "perma_id": "p-1", "event_name": "login" }));
		assert_eq!(canonical["profile_id"], json!("p-1"));
		assert!(canonical.get("perma_id").is_none());
	}
}
