//! Query-string construction for the event search endpoint.

use url::form_urlencoded;

/// One filter condition from the event explorer form.
///
/// `property_key`/`property_value` are only meaningful when `field` is
/// `"properties"`, where the pair expands to a `properties.<key>` query
/// parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventCondition {
	pub field: String,
	pub operator: String,
	pub value: String,
	pub property_key: String,
	pub property_value: String,
}

/// Build the URL-encoded query string for an event search.
///
/// The service only understands `equals`; other operators and incomplete
/// conditions are dropped. The time-range filter (seconds of lookback) is
/// always appended.
pub fn build(conditions: &[EventCondition], time_range_secs: u64) -> String {
	let mut query = form_urlencoded::Serializer::new(String::new());
	for condition in conditions {
		if condition.operator != "equals" {
			continue;
		}
		if condition.field == "properties" {
			if !condition.property_key.is_empty() && !condition.property_value.is_empty() {
				query.append_pair(
					&format!("properties.{}", condition.property_key),
					&condition.property_value,
				);
			}
		} else if !condition.field.is_empty() && !condition.value.is_empty() {
			query.append_pair(&condition.field, &condition.value);
		}
	}
	query.append_pair("time_range", &time_range_secs.to_string());
	query.finish()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn equals(field: &str, value: &str) -> EventCondition {
		EventCondition {
			field: field.to_owned(),
			operator: "equals".to_owned(),
			value: value.to_owned(),
			..Default::default()
		}
	}

	#[test]
	fn no_conditions_still_carries_the_time_range() {
		assert_eq!(build(&[], 900), "time_range=900");
	}

	#[test]
	fn plain_conditions_become_pairs() {
		let query = build(&[equals("event_type", "track"), equals("event_name", "login")], 3600);
		assert_eq!(query, "event_type=track&event_name=login&time_range=3600");
	}

	#[test]
	fn property_conditions_expand_to_dotted_keys() {
		let condition = EventCondition {
			field: "properties".to_owned(),
			operator: "equals".to_owned(),
			property_key: "plan".to_owned(),
			property_value: "gold".to_owned(),
			..Default::default()
		};
		assert_eq!(build(&[condition], 900), "properties.plan=gold&time_range=900");
	}

	#[test]
	fn incomplete_conditions_are_dropped() {
		let incomplete = EventCondition {
			field: "properties".to_owned(),
			operator: "equals".to_owned(),
			property_key: "plan".to_owned(),
			..Default::default()
		};
		assert_eq!(build(&[incomplete, equals("event_type", "")], 900), "time_range=900");
	}

	#[test]
	fn unsupported_operators_are_dropped() {
		let mut condition = equals("event_type", "track");
		condition.operator = "contains".to_owned();
		assert_eq!(build(&[condition], 900), "time_range=900");
	}

	#[test]
	fn values_are_url_encoded() {
		let query = build(&[equals("event_name", "add to cart")], 900);
		assert_eq!(query, "event_name=add+to+cart&time_range=900");
	}
}
