//! Canonical serde data model for everything the profile service returns.
//!
//! Canonical field names are `profile_id` and `application_data`; payloads
//! still carrying the legacy names are rewritten once at the service
//! boundary (see `api::normalize`) so nothing here ever sees them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of the profile list endpoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProfileSummary {
	#[serde(default)]
	pub profile_id: String,
	#[serde(default)]
	pub user_ids: Vec<String>,
}

/// A unified profile document.
///
/// Attribute groups (`identity`, `personality` and the per-application
/// entries) are open-shaped: the service adds and renames fields without
/// notice, so they stay as ordered JSON maps and are only interpreted by
/// the table flattener.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProfileRecord {
	#[serde(default)]
	pub profile_id: String,
	#[serde(default)]
	pub user_ids: Vec<String>,
	#[serde(default)]
	pub identity: Map<String, Value>,
	#[serde(default)]
	pub personality: Map<String, Value>,
	#[serde(default)]
	pub application_data: Vec<Map<String, Value>>,
	#[serde(default)]
	pub profile_hierarchy: Option<ProfileHierarchy>,
}

/// Parent/peer/child linkage produced by the server-side resolution rules.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ProfileHierarchy {
	#[serde(default)]
	pub parent_profile_id: Option<String>,
	#[serde(default)]
	pub peer_profile_ids: Vec<HierarchyLink>,
	#[serde(default)]
	pub child_profile_ids: Vec<HierarchyLink>,
	/// Marks a top-of-hierarchy master; mutually exclusive with a parent.
	#[serde(default)]
	pub list_profile: bool,
}

/// One linked profile and the rule that produced the linkage.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct HierarchyLink {
	#[serde(default)]
	pub profile_id: String,
	#[serde(default)]
	pub rule_name: Option<String>,
}

/// The `app_id` of an application-data entry, if present.
pub fn application_id(entry: &Map<String, Value>) -> Option<String> {
	entry.get("app_id").and_then(Value::as_str).map(str::to_owned)
}

/// One raw ingested event.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct EventRecord {
	#[serde(default)]
	pub event_id: String,
	#[serde(default)]
	pub app_id: String,
	#[serde(default)]
	pub profile_id: String,
	#[serde(default)]
	pub event_name: String,
	#[serde(default)]
	pub event_type: String,
	/// Seconds since the Unix epoch.
	#[serde(default)]
	pub event_timestamp: i64,
	#[serde(default)]
	pub properties: Map<String, Value>,
}

/// A server-side identity-resolution rule.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct UnificationRule {
	#[serde(default)]
	pub rule_name: String,
	#[serde(default)]
	pub is_active: bool,
	#[serde(default)]
	pub rules: Vec<UnificationCriterion>,
}

/// One attribute/priority entry of a unification rule.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct UnificationCriterion {
	#[serde(default)]
	pub attribute: String,
	#[serde(default)]
	pub priority: u32,
}

/// A profile-enrichment (trait) rule as accepted and returned by the
/// service. `trait_type` is `"static"` or `"computed"`; the optional
/// fields only apply to one of the two.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EnrichmentRule {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rule_id: Option<String>,
	#[serde(default)]
	pub trait_name: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub description: String,
	#[serde(default)]
	pub trait_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
	#[serde(default)]
	pub value_type: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub computation: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub source_fields: Vec<String>,
	/// Lookback window in seconds, for `count` computations.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time_range: Option<u64>,
	#[serde(default)]
	pub merge_strategy: String,
	#[serde(default)]
	pub masking_required: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub masking_strategy: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub trigger: Option<TraitTrigger>,
	#[serde(default)]
	pub enabled: bool,
}

impl EnrichmentRule {
	/// Check the constraints the service rejects server-side anyway, so the
	/// form can surface them before submitting.
	pub fn validate(&self) -> Result<(), &'static str> {
		if self.trait_type != "computed" {
			return Ok(());
		}
		let filled = self
			.source_fields
			.iter()
			.filter(|field| !field.trim().is_empty())
			.count();
		match self.computation.as_deref() {
			Some("copy") if filled < 1 => Err("Source field is required for 'copy' computation."),
			Some("concat") if filled < 2 => {
				Err("Two source fields are required for 'concat' computation.")
			}
			_ => Ok(()),
		}
	}
}

/// Compose the fully-qualified trait name from a property group key and an
/// optional suffix, e.g. `identity_attributes.full_name`.
pub fn qualified_trait_name(group_key: &str, suffix: &str) -> String {
	if suffix.is_empty() {
		group_key.to_owned()
	} else {
		format!("{group_key}.{suffix}")
	}
}

/// Event trigger of an enrichment rule.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TraitTrigger {
	#[serde(default)]
	pub event_type: String,
	#[serde(default)]
	pub event_name: String,
	#[serde(default)]
	pub conditions: Vec<RuleCondition>,
}

/// One field/operator/value condition of a trigger.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RuleCondition {
	#[serde(default)]
	pub field: String,
	#[serde(default)]
	pub operator: String,
	#[serde(default)]
	pub value: String,
}

/// An event schema: name, type and typed property list.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EventSchema {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub schema_id: Option<String>,
	#[serde(default)]
	pub event_name: String,
	#[serde(default)]
	pub event_type: String,
	#[serde(default)]
	pub properties: Vec<SchemaProperty>,
}

/// One declared property of an event schema.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SchemaProperty {
	#[serde(default)]
	pub property_name: String,
	#[serde(default)]
	pub property_type: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn profile_deserializes_with_missing_groups() {
		let profile: ProfileRecord = serde_json::from_value(json!({
			"profile_id": "p-1",
			"identity": { "email": "a@b.c" }
		}))
		.unwrap();
		assert_eq!(profile.profile_id, "p-1");
		assert!(profile.personality.is_empty());
		assert!(profile.profile_hierarchy.is_none());
	}

	#[test]
	fn application_id_reads_the_app_id_field() {
		let entry = json!({ "app_id": "shop", "sessions": 3 });
		assert_eq!(
			application_id(entry.as_object().unwrap()),
			Some("shop".to_owned())
		);
		let anonymous = json!({ "sessions": 3 });
		assert_eq!(application_id(anonymous.as_object().unwrap()), None);
	}

	#[test]
	fn qualified_trait_name_joins_group_and_suffix() {
		assert_eq!(
			qualified_trait_name("identity_attributes", "full_name"),
			"identity_attributes.full_name"
		);
		assert_eq!(qualified_trait_name("traits", ""), "traits");
	}

	#[test]
	fn static_rules_always_validate() {
		let rule = EnrichmentRule {
			trait_type: "static".to_owned(),
			..Default::default()
		};
		assert!(rule.validate().is_ok());
	}

	#[test]
	fn copy_computation_requires_a_source_field() {
		let mut rule = EnrichmentRule {
			trait_type: "computed".to_owned(),
			computation: Some("copy".to_owned()),
			source_fields: vec![" ".to_owned()],
			..Default::default()
		};
		assert!(rule.validate().is_err());
		rule.source_fields = vec!["identity.email".to_owned()];
		assert!(rule.validate().is_ok());
	}

	#[test]
	fn concat_computation_requires_two_source_fields() {
		let mut rule = EnrichmentRule {
			trait_type: "computed".to_owned(),
			computation: Some("concat".to_owned()),
			source_fields: vec!["first_name".to_owned()],
			..Default::default()
		};
		assert!(rule.validate().is_err());
		rule.source_fields.push("last_name".to_owned());
		assert!(rule.validate().is_ok());
	}

	#[test]
	fn enrichment_rule_serializes_without_empty_optionals() {
		let rule = EnrichmentRule {
			trait_name: "traits.visits".to_owned(),
			trait_type: "static".to_owned(),
			value: Some("gold".to_owned()),
			merge_strategy: "overwrite".to_owned(),
			enabled: true,
			..Default::default()
		};
		let encoded = serde_json::to_value(&rule).unwrap();
		let object = encoded.as_object().unwrap();
		assert!(!object.contains_key("computation"));
		assert!(!object.contains_key("source_fields"));
		assert!(!object.contains_key("rule_id"));
		assert_eq!(object["value"], json!("gold"));
	}
}
