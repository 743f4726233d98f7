use leptos::prelude::*;

use crate::api;
use crate::components::ui::Chip;
use crate::model::profile::{EventSchema, SchemaProperty};
use crate::theme::Theme;

const PROPERTY_TYPES: &[&str] = &["string", "int", "boolean", "date", "arrayOfString", "arrayOfInt"];
const EVENT_TYPES: &[&str] = &["identify", "page", "track"];

fn load_schemas(schemas: RwSignal<Vec<EventSchema>>) {
	leptos::task::spawn_local(async move {
		schemas.set(api::fetch_event_schemas().await);
	});
}

/// Event schema management: list, create, delete.
#[component]
pub fn EventSchemas() -> impl IntoView {
	let theme = use_context::<Theme>().unwrap_or_default();
	let schemas = RwSignal::new(Vec::<EventSchema>::new());
	let form_open = RwSignal::new(false);
	let form_error = RwSignal::new(None::<String>);
	let event_name = RwSignal::new(String::new());
	let event_type = RwSignal::new("track".to_owned());
	let properties = RwSignal::new(Vec::<SchemaProperty>::new());
	load_schemas(schemas);

	let reset_form = move || {
		event_name.set(String::new());
		event_type.set("track".to_owned());
		properties.set(Vec::new());
		form_error.set(None);
		form_open.set(false);
	};

	let on_submit = move |_| {
		let schema = EventSchema {
			schema_id: None,
			event_name: event_name.get(),
			event_type: event_type.get(),
			properties: properties.get(),
		};
		leptos::task::spawn_local(async move {
			match api::create_event_schema(&schema).await {
				Ok(()) => {
					reset_form();
					load_schemas(schemas);
				}
				Err(err) => form_error.set(Some(format!("Error adding event schema: {err}"))),
			}
		});
	};

	let delete_schema = move |schema_id: String| {
		leptos::task::spawn_local(async move {
			match api::delete_event_schema(&schema_id).await {
				Ok(()) => load_schemas(schemas),
				Err(err) => log::error!("error deleting schema {schema_id}: {err}"),
			}
		});
	};

	view! {
		<div class="page">
			<div class="page-header">
				<h2>"Event Schemas"</h2>
				<button on:click=move |_| form_open.set(true)>"Add Schema"</button>
			</div>

			{move || {
				form_open.get().then(|| {
					view! {
						<div class="card form">
							<h3>"New Event Schema"</h3>
							<div class="form-row">
								<input
									type="text"
									placeholder="Event Name"
									prop:value=move || event_name.get()
									on:input=move |ev| event_name.set(event_target_value(&ev))
								/>
								<select
									prop:value=move || event_type.get()
									on:change=move |ev| event_type.set(event_target_value(&ev))
								>
									{EVENT_TYPES
										.iter()
										.map(|ty| view! { <option value=*ty>{*ty}</option> })
										.collect_view()}
								</select>
							</div>

							{move || {
								properties
									.get()
									.into_iter()
									.enumerate()
									.map(|(index, property)| {
										view! {
											<div class="form-row">
												<input
													type="text"
													placeholder="Property Name"
													prop:value=property.property_name.clone()
													on:input=move |ev| {
														let name = event_target_value(&ev);
														properties
															.update(|list| {
																if let Some(p) = list.get_mut(index) {
																	p.property_name = name;
																}
															});
													}
												/>
												<select
													prop:value=property.property_type.clone()
													on:change=move |ev| {
														let ty = event_target_value(&ev);
														properties
															.update(|list| {
																if let Some(p) = list.get_mut(index) {
																	p.property_type = ty;
																}
															});
													}
												>
													{PROPERTY_TYPES
														.iter()
														.map(|ty| view! { <option value=*ty>{*ty}</option> })
														.collect_view()}
												</select>
												<button on:click=move |_| {
													properties.update(|list| {
														list.remove(index);
													});
												}>"Remove"</button>
											</div>
										}
									})
									.collect_view()
							}}

							<button on:click=move |_| {
								properties
									.update(|list| {
										list.push(SchemaProperty {
											property_name: String::new(),
											property_type: "string".to_owned(),
										});
									});
							}>"Add Property"</button>

							{move || form_error.get().map(|err| view! { <p class="error">{err}</p> })}

							<div class="dialog-actions">
								<button on:click=move |_| reset_form()>"Cancel"</button>
								<button on:click=on_submit>"Save"</button>
							</div>
						</div>
					}
				})
			}}

			<div class="card">
				{move || {
					let schemas = schemas.get();
					if schemas.is_empty() {
						return view! { <p>"No schemas found."</p> }.into_any();
					}
					view! {
						<table class="data-table">
							<thead>
								<tr>
									<th>"Event Name"</th>
									<th>"Event Type"</th>
									<th>"Properties"</th>
									<th></th>
								</tr>
							</thead>
							<tbody>
								{schemas
									.into_iter()
									.map(|schema| {
										let color = theme.event_type_color(&schema.event_type);
										view! {
											<tr>
												<td>{schema.event_name}</td>
												<td>
													<Chip label=schema.event_type.clone() color=color />
												</td>
												<td>
													{schema
														.properties
														.into_iter()
														.map(|property| {
															view! {
																<Chip
																	label=format!(
																		"{} ({})",
																		property.property_name,
																		property.property_type,
																	)
																	color=theme.text_secondary
																/>
															}
														})
														.collect_view()}
												</td>
												<td>
													{schema
														.schema_id
														.map(|schema_id| {
															view! {
																<button
																	class="danger"
																	on:click=move |_| delete_schema(schema_id.clone())
																>
																	"Delete"
																</button>
															}
														})}
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
