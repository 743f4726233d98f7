use leptos::prelude::*;

use crate::api::{self, EventCondition};
use crate::components::ui::Chip;
use crate::model::profile::EventRecord;
use crate::theme::Theme;

const APPLICATIONS: &[&str] = &["custodian_client_app"];

const FIELD_OPTIONS: &[(&str, &str)] = &[
	("Event Type", "event_type"),
	("Event Name", "event_name"),
	("Properties", "properties"),
];
const OPERATOR_OPTIONS: &[&str] = &["equals"];
const TIME_OPTIONS: &[(&str, u64)] = &[
	("Last 15 minutes", 900),
	("Last 30 minutes", 1800),
	("Last 1 hour", 3600),
	("Last 3 hours", 10800),
	("Last 6 hours", 21600),
	("Last 12 hours", 43200),
	("Last 1 day", 86400),
	("Last 3 days", 259200),
	("Last 1 week", 604800),
	("Last 2 weeks", 1209600),
	("Last 1 month", 2592000),
];

fn default_condition() -> EventCondition {
	EventCondition {
		field: "event_type".to_owned(),
		operator: "equals".to_owned(),
		..Default::default()
	}
}

/// Raw event search per application: editable conditions, a time filter
/// and an on-demand fetch.
#[component]
pub fn EventExplorer() -> impl IntoView {
	let theme = use_context::<Theme>().unwrap_or_default();
	let active_app = RwSignal::new(0usize);
	let conditions = RwSignal::new(vec![default_condition()]);
	let time_filter = RwSignal::new(43200u64);
	let events = RwSignal::new(Vec::<EventRecord>::new());

	let fetch_events = move || {
		let Some(app) = APPLICATIONS.get(active_app.get_untracked()) else {
			return;
		};
		let conditions = conditions.get_untracked();
		let time_range = time_filter.get_untracked();
		leptos::task::spawn_local(async move {
			events.set(api::search_events(app, &conditions, time_range).await);
		});
	};
	fetch_events();

	view! {
		<div class="page">
			<h2>"Event Explorer"</h2>

			<div class="tab-bar">
				{APPLICATIONS
					.iter()
					.enumerate()
					.map(|(index, app)| {
						view! {
							<button
								class="tab"
								class:active=move || active_app.get() == index
								on:click=move |_| {
									active_app.set(index);
									events.set(Vec::new());
									fetch_events();
								}
							>
								{*app}
							</button>
						}
					})
					.collect_view()}
			</div>

			{move || {
				conditions
					.get()
					.into_iter()
					.enumerate()
					.map(|(index, condition)| {
						let is_properties = condition.field == "properties";
						view! {
							<div class="form-row">
								<select
									prop:value=condition.field.clone()
									on:change=move |ev| {
										let field = event_target_value(&ev);
										conditions
											.update(|list| {
												if let Some(c) = list.get_mut(index) {
													c.field = field;
												}
											});
									}
								>
									{FIELD_OPTIONS
										.iter()
										.map(|(label, value)| {
											view! { <option value=*value>{*label}</option> }
										})
										.collect_view()}
								</select>
								<select
									prop:value=condition.operator.clone()
									on:change=move |ev| {
										let operator = event_target_value(&ev);
										conditions
											.update(|list| {
												if let Some(c) = list.get_mut(index) {
													c.operator = operator;
												}
											});
									}
								>
									{OPERATOR_OPTIONS
										.iter()
										.map(|op| view! { <option value=*op>{*op}</option> })
										.collect_view()}
								</select>

								{if is_properties {
									view! {
										<input
											type="text"
											placeholder="Property Name"
											prop:value=condition.property_key.clone()
											on:input=move |ev| {
												let key = event_target_value(&ev);
												conditions
													.update(|list| {
														if let Some(c) = list.get_mut(index) {
															c.property_key = key;
														}
													});
											}
										/>
										<input
											type="text"
											placeholder="Property Value"
											prop:value=condition.property_value.clone()
											on:input=move |ev| {
												let value = event_target_value(&ev);
												conditions
													.update(|list| {
														if let Some(c) = list.get_mut(index) {
															c.property_value = value;
														}
													});
											}
										/>
									}
										.into_any()
								} else {
									view! {
										<input
											type="text"
											placeholder="Value"
											prop:value=condition.value.clone()
											on:input=move |ev| {
												let value = event_target_value(&ev);
												conditions
													.update(|list| {
														if let Some(c) = list.get_mut(index) {
															c.value = value;
														}
													});
											}
										/>
									}
										.into_any()
								}}

								<button on:click=move |_| {
									conditions
										.update(|list| {
											list.remove(index);
										});
								}>"Remove"</button>
							</div>
						}
					})
					.collect_view()
			}}

			<div class="form-row">
				<button on:click=move |_| {
					conditions.update(|list| list.push(default_condition()));
				}>"Add Condition"</button>
				<select
					prop:value=move || time_filter.get().to_string()
					on:change=move |ev| {
						if let Ok(seconds) = event_target_value(&ev).parse() {
							time_filter.set(seconds);
						}
					}
				>
					{TIME_OPTIONS
						.iter()
						.map(|(label, seconds)| {
							view! { <option value=seconds.to_string()>{*label}</option> }
						})
						.collect_view()}
				</select>
				<button on:click=move |_| fetch_events()>"Fetch Events"</button>
			</div>

			<div class="panel">
				<h3>"Events"</h3>
				{move || {
					let events = events.get();
					if events.is_empty() {
						return view! { <p>"No events found."</p> }.into_any();
					}
					view! {
						<table class="data-table">
							<thead>
								<tr>
									<th>"Event Type"</th>
									<th>"Event Name"</th>
									<th>"Time"</th>
									<th>"User"</th>
									<th>"Event Properties"</th>
								</tr>
							</thead>
							<tbody>
								{events
									.into_iter()
									.map(|event| {
										let color = theme.event_type_color(&event.event_type);
										let properties = serde_json::to_string_pretty(&event.properties)
											.unwrap_or_default();
										view! {
											<tr>
												<td>
													<Chip label=event.event_type.clone() color=color />
												</td>
												<td>{event.event_name}</td>
												<td>{super::format_timestamp(event.event_timestamp)}</td>
												<td>{event.profile_id}</td>
												<td>
													<pre>{properties}</pre>
												</td>
											</tr>
										}
									})
									.collect_view()}
							</tbody>
						</table>
					}
						.into_any()
				}}
			</div>
		</div>
	}
}
