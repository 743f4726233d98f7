//! Explicit visual configuration shared by the views.

use crate::model::hierarchy::NodeRole;

/// Color palette and per-kind color assignments.
///
/// Constructed once, provided through context and passed explicitly into
/// render calls; an alternate palette is a constructor away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
	pub primary: &'static str,
	pub secondary: &'static str,
	pub info: &'static str,
	pub success: &'static str,
	pub warning: &'static str,
	pub danger: &'static str,
	pub background: &'static str,
	pub surface: &'static str,
	pub text_primary: &'static str,
	pub text_secondary: &'static str,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			primary: "#FF7300",
			secondary: "#009EDA",
			info: "#0288D1",
			success: "#2E7D32",
			warning: "#ED6C02",
			danger: "#D32F2F",
			background: "#F4F4F4",
			surface: "#FFFFFF",
			text_primary: "#333333",
			text_secondary: "#666666",
		}
	}
}

impl Theme {
	/// Chip color for an event type; unknown types get the neutral color.
	pub fn event_type_color(&self, event_type: &str) -> &'static str {
		match event_type.to_ascii_lowercase().as_str() {
			"identify" => self.primary,
			"track" => self.secondary,
			"page" => self.info,
			"screen" => self.warning,
			"group" => self.success,
			"alias" => self.danger,
			_ => self.text_secondary,
		}
	}

	/// Node chip color for a hierarchy role.
	pub fn role_color(&self, role: NodeRole) -> &'static str {
		match role {
			NodeRole::Master => self.primary,
			NodeRole::Current => self.info,
			NodeRole::Peer | NodeRole::Child => self.secondary,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn event_type_lookup_ignores_case() {
		let theme = Theme::default();
		assert_eq!(theme.event_type_color("Identify"), theme.primary);
		assert_eq!(theme.event_type_color("track"), theme.secondary);
	}

	#[test]
	fn unknown_event_types_get_the_neutral_color() {
		let theme = Theme::default();
		assert_eq!(theme.event_type_color("telemetry"), theme.text_secondary);
	}

	#[test]
	fn roles_map_onto_the_palette() {
		let theme = Theme::default();
		assert_eq!(theme.role_color(NodeRole::Master), theme.primary);
		assert_eq!(theme.role_color(NodeRole::Current), theme.info);
		assert_eq!(theme.role_color(NodeRole::Peer), theme.role_color(NodeRole::Child));
	}
}
