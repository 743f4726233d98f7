use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use serde_json::{Map, Value};
use web_sys::MouseEvent;

use super::format_timestamp;
use crate::api;
use crate::components::hierarchy_graph::HierarchyGraphCanvas;
use crate::components::record_table::RecordTable;
use crate::components::ui::{Chip, TabBar};
use crate::model::events::{group_by_app, sort_newest_first};
use crate::model::profile::{self, EventRecord, ProfileRecord};
use crate::model::{hierarchy, table};
use crate::theme::Theme;

/// Profile detail: attribute cards, per-application data, grouped events,
/// the hierarchy graph and deletion.
#[component]
pub fn Profile() -> impl IntoView {
	let params = use_params_map();
	let profile_id = params.read_untracked().get("id").unwrap_or_default();

	let profile = RwSignal::new(None::<ProfileRecord>);
	let user_events = RwSignal::new(Vec::<EventRecord>::new());
	let selected_app = RwSignal::new(None::<String>);
	let selected_events_app = RwSignal::new(None::<String>);
	let confirm_delete = RwSignal::new(false);
	let delete_error = RwSignal::new(None::<String>);

	{
		let profile_id = profile_id.clone();
		leptos::task::spawn_local(async move {
			let fetched = api::fetch_profile(&profile_id).await;
			if let Some(record) = &fetched {
				// A single application preselects both tab bars.
				if record.application_data.len() == 1 {
					let app = profile::application_id(&record.application_data[0]);
					selected_app.set(app.clone());
					selected_events_app.set(app);
				}
			}
			profile.set(fetched);

			let mut fetched_events = api::fetch_profile_events(&profile_id).await;
			sort_newest_first(&mut fetched_events);
			user_events.set(fetched_events);
		});
	}

	let graph = Signal::derive(move || {
		profile
			.get()
			.map(|record| hierarchy::build(&record))
			.unwrap_or_default()
	});

	let navigate = use_navigate();
	let delete_id = profile_id.clone();
	let on_delete = move |_: MouseEvent| {
		let navigate = navigate.clone();
		let profile_id = delete_id.clone();
		leptos::task::spawn_local(async move {
			match api::delete_profile(&profile_id).await {
				Ok(()) => navigate("/profiles", Default::default()),
				Err(err) => {
					delete_error.set(Some(format!("Failed to delete user profile: {err}")))
				}
			}
		});
	};

	view! {
		<div class="page">
			{move || match profile.get() {
				None => view! { <p>"Loading..."</p> }.into_any(),
				Some(record) => {
					view! {
						<div class="profile-detail">
							<div class="page-header">
								<h2>"User Profile"</h2>
								<button class="danger" on:click=move |_| confirm_delete.set(true)>
									"Delete Profile"
								</button>
							</div>

							<div class="card-grid">
								<div class="card">
									<h3>"Identity Data"</h3>
									<RecordTable rows=table::flatten(&record.identity) />
								</div>
								<div class="card">
									<h3>"Personality Data"</h3>
									<RecordTable rows=table::flatten(&record.personality) />
								</div>
							</div>

							<ApplicationDataSection
								entries=record.application_data.clone()
								selected=selected_app
							/>

							<EventsSection events=user_events selected=selected_events_app />

							<section class="panel">
								<h3>"Profile Hierarchy"</h3>
								<HierarchyGraphCanvas graph=graph />
							</section>
						</div>
					}
						.into_any()
				}
			}}

			{move || {
				confirm_delete.get().then(|| {
					let on_delete = on_delete.clone();
					view! {
						<div class="dialog-backdrop">
							<div class="dialog">
								<h3>"Confirm Deletion"</h3>
								<p>
									"Are you sure you want to delete this user profile? This action cannot be undone."
								</p>
								{move || {
									delete_error.get().map(|err| view! { <p class="error">{err}</p> })
								}}
								<div class="dialog-actions">
									<button on:click=move |_| confirm_delete.set(false)>"Cancel"</button>
									<button class="danger" on:click=on_delete>
										"Delete"
									</button>
								</div>
							</div>
						</div>
					}
				})
			}}
		</div>
	}
}

/// Per-application attribute groups, one tab per app id.
#[component]
fn ApplicationDataSection(
	entries: Vec<Map<String, Value>>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let labels: Vec<String> = entries.iter().filter_map(profile::application_id).collect();
	let entries = StoredValue::new(entries);

	view! {
		<section class="panel">
			<h3>"Application Data"</h3>
			<TabBar labels=labels selected=selected />
			{move || {
				let id = selected.get()?;
				let entry = entries.with_value(|entries| {
					entries
						.iter()
						.find(|entry| {
							profile::application_id(entry).as_deref() == Some(id.as_str())
						})
						.cloned()
				})?;
				Some(view! {
					<div class="card">
						<RecordTable rows=table::flatten(&entry) />
					</div>
				})
			}}
		</section>
	}
}

/// Events attached to the profile, grouped per application.
#[component]
fn EventsSection(
	events: RwSignal<Vec<EventRecord>>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let theme = use_context::<Theme>().unwrap_or_default();
	let groups = Signal::derive(move || group_by_app(&events.get()));

	view! {
		<section class="panel">
			<h3>"User Events"</h3>
			{move || {
				let labels: Vec<String> = groups.get().iter().map(|(app, _)| app.clone()).collect();
				view! { <TabBar labels=labels selected=selected /> }
			}}
			{move || {
				let id = selected.get()?;
				let (_, bucket) = groups.get().into_iter().find(|(app, _)| *app == id)?;
				Some(view! {
					<div class="scroll-box">
						<table class="data-table">
							<thead>
								<tr>
									<th>"Event Name"</th>
									<th>"Event Type"</th>
									<th>"Timestamp"</th>
								</tr>
							</thead>
							<tbody>
								{bucket
									.into_iter()
									.map(|event| {
										let color = theme.event_type_color(&event.event_type);
										view! {
											<tr>
												<td>{event.event_name}</td>
												<td>
													<Chip label=event.event_type.clone() color=color />
												</td>
												<td>{format_timestamp(event.event_timestamp)}</td>
											</tr>
										}
									})
									.collect_view()}
							</tbody>
						</table>
					</div>
				})
			}}
		</section>
	}
}
