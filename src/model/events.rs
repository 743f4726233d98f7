//! Pure helpers over fetched event lists.

use super::profile::EventRecord;

/// Sort events newest-first. The sort is stable, so events sharing a
/// timestamp keep their ingestion order.
pub fn sort_newest_first(events: &mut [EventRecord]) {
	events.sort_by(|a, b| b.event_timestamp.cmp(&a.event_timestamp));
}

/// Group events by application, preserving first-seen application order
/// and the relative order of events within each group.
pub fn group_by_app(events: &[EventRecord]) -> Vec<(String, Vec<EventRecord>)> {
	let mut groups: Vec<(String, Vec<EventRecord>)> = Vec::new();
	for event in events {
		match groups.iter_mut().find(|(app, _)| *app == event.app_id) {
			Some((_, bucket)) => bucket.push(event.clone()),
			None => groups.push((event.app_id.clone(), vec![event.clone()])),
		}
	}
	groups
}

#[cfg(test)]
mod tests {
	use super::*;

	fn event(app_id: &str, name: &str, timestamp: i64) -> EventRecord {
		EventRecord {
			app_id: app_id.to_owned(),
			event_name: name.to_owned(),
			event_timestamp: timestamp,
			..Default::default()
		}
	}

	#[test]
	fn sorts_newest_first() {
		let mut events = vec![event("a", "old", 10), event("a", "new", 30), event("a", "mid", 20)];
		sort_newest_first(&mut events);
		let names: Vec<_> = events.iter().map(|e| e.event_name.as_str()).collect();
		assert_eq!(names, vec!["new", "mid", "old"]);
	}

	#[test]
	fn groups_by_app_in_first_seen_order() {
		let events = vec![
			event("shop", "view", 3),
			event("crm", "sync", 2),
			event("shop", "buy", 1),
		];
		let groups = group_by_app(&events);
		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].0, "shop");
		assert_eq!(groups[0].1.len(), 2);
		assert_eq!(groups[1].0, "crm");
	}
}
