//! Thin async client for the profile service HTTP API.
//!
//! Read endpoints degrade to an empty result on any failure (the views
//! render that as a loading/absent state); mutations return a `Result`
//! so the form that issued them can surface the error.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::model::profile::{
	EnrichmentRule, EventRecord, EventSchema, ProfileRecord, ProfileSummary, UnificationRule,
};

pub mod normalize;
pub mod query;

pub use query::EventCondition;

/// Base URL of the profile service REST API.
pub const API_BASE_URL: &str = "http://localhost:8900/api/v1";

/// Failure surfaced to the view layer by mutating calls.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),
	#[error("unexpected payload: {0}")]
	Payload(#[from] serde_json::Error),
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
	Ok(reqwest::get(url).await?.error_for_status()?.json().await?)
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Option<T> {
	match serde_json::from_value(value) {
		Ok(decoded) => Some(decoded),
		Err(err) => {
			log::error!("malformed {what}: {err}");
			None
		}
	}
}

/// List all unified profiles.
pub async fn fetch_profiles() -> Vec<ProfileSummary> {
	match get_json::<Vec<Value>>(&format!("{API_BASE_URL}/profile/")).await {
		Ok(values) => values
			.into_iter()
			.filter_map(|value| decode(normalize::profile(value), "profile summary"))
			.collect(),
		Err(err) => {
			log::error!("error fetching profiles: {err}");
			Vec::new()
		}
	}
}

/// Fetch one profile document; any failure is "no profile available".
pub async fn fetch_profile(profile_id: &str) -> Option<ProfileRecord> {
	match get_json::<Value>(&format!("{API_BASE_URL}/{profile_id}/profile")).await {
		Ok(value) => decode(normalize::profile(value), "profile"),
		Err(err) => {
			log::error!("error fetching profile {profile_id}: {err}");
			None
		}
	}
}

/// Delete a profile.
pub async fn delete_profile(profile_id: &str) -> Result<(), ApiError> {
	reqwest::Client::new()
		.delete(format!("{API_BASE_URL}/{profile_id}/profile"))
		.send()
		.await?
		.error_for_status()?;
	Ok(())
}

/// Fetch the raw events attached to a profile, in service order.
pub async fn fetch_profile_events(profile_id: &str) -> Vec<EventRecord> {
	match get_json::<Vec<Value>>(&format!("{API_BASE_URL}/{profile_id}/events")).await {
		Ok(values) => values
			.into_iter()
			.filter_map(|value| decode(normalize::event(value), "event"))
			.collect(),
		Err(err) => {
			log::error!("error fetching events for {profile_id}: {err}");
			Vec::new()
		}
	}
}

/// Search one application's events with the explorer filters.
pub async fn search_events(
	app_id: &str,
	conditions: &[EventCondition],
	time_range_secs: u64,
) -> Vec<EventRecord> {
	let query = query::build(conditions, time_range_secs);
	match get_json::<Vec<Value>>(&format!("{API_BASE_URL}/app/{app_id}/events?{query}")).await {
		Ok(values) => values
			.into_iter()
			.filter_map(|value| decode(normalize::event(value), "event"))
			.collect(),
		Err(err) => {
			log::error!("error searching events for {app_id}: {err}");
			Vec::new()
		}
	}
}

/// List the identity-resolution rules.
pub async fn fetch_unification_rules() -> Vec<UnificationRule> {
	match get_json(&format!("{API_BASE_URL}/resolution-rules/")).await {
		Ok(rules) => rules,
		Err(err) => {
			log::error!("error fetching unification rules: {err}");
			Vec::new()
		}
	}
}

/// List the profile-enrichment rules.
pub async fn fetch_enrichment_rules() -> Vec<EnrichmentRule> {
	match get_json(&format!("{API_BASE_URL}/enrichment-rules/")).await {
		Ok(rules) => rules,
		Err(err) => {
			log::error!("error fetching enrichment rules: {err}");
			Vec::new()
		}
	}
}

/// Create an enrichment rule.
pub async fn create_enrichment_rule(rule: &EnrichmentRule) -> Result<(), ApiError> {
	reqwest::Client::new()
		.post(format!("{API_BASE_URL}/enrichment-rules"))
		.json(rule)
		.send()
		.await?
		.error_for_status()?;
	Ok(())
}

/// Delete an enrichment rule.
pub async fn delete_enrichment_rule(rule_id: &str) -> Result<(), ApiError> {
	reqwest::Client::new()
		.delete(format!("{API_BASE_URL}/enrichment-rules/{rule_id}"))
		.send()
		.await?
		.error_for_status()?;
	Ok(())
}

/// List the event schemas.
pub async fn fetch_event_schemas() -> Vec<EventSchema> {
	match get_json(&format!("{API_BASE_URL}/event-schema/")).await {
		Ok(schemas) => schemas,
		Err(err) => {
			log::error!("error fetching event schemas: {err}");
			Vec::new()
		}
	}
}

/// Create an event schema.
pub async fn create_event_schema(schema: &EventSchema) -> Result<(), ApiError> {
	reqwest::Client::new()
		.post(format!("{API_BASE_URL}/event-schema"))
		.json(schema)
		.send()
		.await?
		.error_for_status()?;
	Ok(())
}

/// Delete an event schema.
pub async fn delete_event_schema(schema_id: &str) -> Result<(), ApiError> {
	reqwest::Client::new()
		.delete(format!("{API_BASE_URL}/event-schema/{schema_id}"))
		.send()
		.await?
		.error_for_status()?;
	Ok(())
}
