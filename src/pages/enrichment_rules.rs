use leptos::prelude::*;

use crate::api;
use crate::components::ui::Chip;
use crate::model::profile::{qualified_trait_name, EnrichmentRule, RuleCondition, TraitTrigger};
use crate::theme::Theme;

const PROPERTY_GROUPS: &[(&str, &str)] = &[
	("Identity Attribute", "identity_attributes"),
	("Traits", "traits"),
	("Application Data", "application_data"),
];
const TRAIT_TYPES: &[&str] = &["static", "computed"];
const VALUE_TYPES: &[&str] = &["string", "int", "boolean", "date", "arrayOfString", "arrayOfInt"];
const COMPUTATION_METHODS: &[&str] = &["copy", "concat", "count"];
const MERGE_STRATEGIES: &[&str] = &["overwrite", "combine", "ignore"];
const MASKING_STRATEGIES: &[&str] = &["hash", "truncate", "redact"];
const TRIGGER_EVENT_TYPES: &[&str] = &["identify", "page", "track"];
const CONDITION_OPERATORS: &[&str] = &[
	"equals",
	"not_equals",
	"exists",
	"not_exists",
	"contains",
	"not_contains",
	"greater_than",
	"greater_than_equals",
	"less_than",
	"less_than_equals",
];
const TIME_RANGES: &[(&str, u64)] = &[
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

fn group_key(group_label: &str) -> &'static str {
	PROPERTY_GROUPS
		.iter()
		.find(|(label, _)| *label == group_label)
		.map(|(_, key)| *key)
		.unwrap_or("identity_attributes")
}

fn load_rules(rules: RwSignal<Vec<EnrichmentRule>>) {
	leptos::task::spawn_local(async move {
		rules.set(api::fetch_enrichment_rules().await);
	});
}

/// Profile-enrichment trait rules: list, create, delete.
#[component]
pub fn EnrichmentRules() -> impl IntoView {
	let theme = use_context::<Theme>().unwrap_or_default();
	let rules = RwSignal::new(Vec::<EnrichmentRule>::new());
	load_rules(rules);

	let property_group = RwSignal::new("Identity Attribute".to_owned());
	let property_suffix = RwSignal::new(String::new());
	let description = RwSignal::new(String::new());
	let trait_type = RwSignal::new("static".to_owned());
	let static_value = RwSignal::new(String::new());
	let value_type = RwSignal::new("string".to_owned());
	let computation = RwSignal::new(String::new());
	let source_a = RwSignal::new(String::new());
	let source_b = RwSignal::new(String::new());
	let time_range = RwSignal::new(TIME_RANGES[0].1);
	let merge_strategy = RwSignal::new("overwrite".to_owned());
	let masking_required = RwSignal::new(false);
	let masking_strategy = RwSignal::new(String::new());
	let trigger_event_type = RwSignal::new(String::new());
	let trigger_event_name = RwSignal::new(String::new());
	let conditions = RwSignal::new(vec![RuleCondition::default()]);
	let enabled = RwSignal::new(true);
	let form_error = RwSignal::new(None::<String>);

	let reset_form = move || {
		property_group.set("Identity Attribute".to_owned());
		property_suffix.set(String::new());
		description.set(String::new());
		trait_type.set("static".to_owned());
		static_value.set(String::new());
		value_type.set("string".to_owned());
		computation.set(String::new());
		source_a.set(String::new());
		source_b.set(String::new());
		time_range.set(TIME_RANGES[0].1);
		merge_strategy.set("overwrite".to_owned());
		masking_required.set(false);
		masking_strategy.set(String::new());
		trigger_event_type.set(String::new());
		trigger_event_name.set(String::new());
		conditions.set(vec![RuleCondition::default()]);
		enabled.set(true);
		form_error.set(None);
	};

	let on_submit = move |_| {
		let computed = trait_type.get() == "computed";
		let rule = EnrichmentRule {
			rule_id: None,
			trait_name: qualified_trait_name(
				group_key(&property_group.get()),
				property_suffix.get().trim(),
			),
			description: description.get(),
			trait_type: trait_type.get(),
			value: (!computed).then(|| static_value.get()),
			value_type: value_type.get(),
			computation: computed
				.then(|| computation.get())
				.filter(|method| !method.is_empty()),
			source_fields: if computed {
				[source_a.get(), source_b.get()]
					.into_iter()
					.filter(|field| !field.trim().is_empty())
					.collect()
			} else {
				Vec::new()
			},
			time_range: (computed && computation.get() == "count").then(|| time_range.get()),
			merge_strategy: merge_strategy.get(),
			masking_required: masking_required.get(),
			masking_strategy: masking_required
				.get()
				.then(|| masking_strategy.get())
				.filter(|strategy| !strategy.is_empty()),
			trigger: Some(TraitTrigger {
				event_type: trigger_event_type.get(),
				event_name: trigger_event_name.get(),
				conditions: conditions.get(),
			}),
			enabled: enabled.get(),
		};

		if let Err(message) = rule.validate() {
			form_error.set(Some(message.to_owned()));
			return;
		}
		form_error.set(None);

		leptos::task::spawn_local(async move {
			match api::create_enrichment_rule(&rule).await {
				Ok(()) => {
					reset_form();
					load_rules(rules);
				}
				Err(err) => form_error.set(Some(format!("Failed to create trait rule: {err}"))),
			}
		});
	};

	let delete_rule = move |rule_id: String| {
		leptos::task::spawn_local(async move {
			match api::delete_enrichment_rule(&rule_id).await {
				Ok(()) => load_rules(rules),
				Err(err) => log::error!("error deleting trait rule {rule_id}: {err}"),
			}
		});
	};

	view! {
		<div class="page">
			<h2>"Profile Enrichment"</h2>

			<div class="card form">
				<h3>"Create Profile Enrichment Trait"</h3>

				<div class="form-row">
					<select
						prop:value=move || property_group.get()
						on:change=move |ev| property_group.set(event_target_value(&ev))
					>
						{PROPERTY_GROUPS
							.iter()
							.map(|(label, _)| view! { <option value=*label>{*label}</option> })
							.collect_view()}
					</select>
					<input
						type="text"
						placeholder="Property Suffix, e.g. full_name"
						prop:value=move || property_suffix.get()
						on:input=move |ev| property_suffix.set(event_target_value(&ev))
					/>
				</div>

				<div class="form-row">
					<input
						type="text"
						placeholder="Description"
						prop:value=move || description.get()
						on:input=move |ev| description.set(event_target_value(&ev))
					/>
					<select
						prop:value=move || trait_type.get()
						on:change=move |ev| trait_type.set(event_target_value(&ev))
					>
						{TRAIT_TYPES
							.iter()
							.map(|ty| view! { <option value=*ty>{*ty}</option> })
							.collect_view()}
					</select>
					<select
						prop:value=move || value_type.get()
						on:change=move |ev| value_type.set(event_target_value(&ev))
					>
						{VALUE_TYPES
							.iter()
							.map(|ty| view! { <option value=*ty>{*ty}</option> })
							.collect_view()}
					</select>
				</div>

				{move || {
					(trait_type.get() == "static")
						.then(|| {
							view! {
								<div class="form-row">
									<input
										type="text"
										placeholder="Value"
										prop:value=move || static_value.get()
										on:input=move |ev| static_value.set(event_target_value(&ev))
									/>
								</div>
							}
						})
				}}

				{move || {
					(trait_type.get() == "computed")
						.then(|| {
							view! {
								<div class="form-row">
									<select
										prop:value=move || computation.get()
										on:change=move |ev| computation.set(event_target_value(&ev))
									>
										<option value="">"Computation Method"</option>
										{COMPUTATION_METHODS
											.iter()
											.map(|method| view! { <option value=*method>{*method}</option> })
											.collect_view()}
									</select>

									{move || {
										let method = computation.get();
										(method == "copy" || method == "concat")
											.then(|| {
												view! {
													<input
														type="text"
														placeholder="Source Field"
														prop:value=move || source_a.get()
														on:input=move |ev| source_a.set(event_target_value(&ev))
													/>
												}
											})
									}}
									{move || {
										(computation.get() == "concat")
											.then(|| {
												view! {
													<input
														type="text"
														placeholder="Second Source Field"
														prop:value=move || source_b.get()
														on:input=move |ev| source_b.set(event_target_value(&ev))
													/>
												}
											})
									}}
									{move || {
										(computation.get() == "count")
											.then(|| {
												view! {
													<select
														prop:value=move || time_range.get().to_string()
														on:change=move |ev| {
															if let Ok(seconds) = event_target_value(&ev).parse() {
																time_range.set(seconds);
															}
														}
													>
														{TIME_RANGES
															.iter()
															.map(|(label, seconds)| {
																view! {
																	<option value=seconds.to_string()>{*label}</option>
																}
															})
															.collect_view()}
													</select>
												}
											})
									}}
								</div>
							}
						})
				}}

				<div class="form-row">
					<select
						prop:value=move || merge_strategy.get()
						on:change=move |ev| merge_strategy.set(event_target_value(&ev))
					>
						{MERGE_STRATEGIES
							.iter()
							.map(|strategy| view! { <option value=*strategy>{*strategy}</option> })
							.collect_view()}
					</select>
					<label>
						<input
							type="checkbox"
							prop:checked=move || masking_required.get()
							on:change=move |ev| masking_required.set(event_target_checked(&ev))
						/>
						"Masking Required"
					</label>
					{move || {
						masking_required
							.get()
							.then(|| {
								view! {
									<select
										prop:value=move || masking_strategy.get()
										on:change=move |ev| masking_strategy.set(event_target_value(&ev))
									>
										<option value="">"Masking Strategy"</option>
										{MASKING_STRATEGIES
											.iter()
											.map(|strategy| {
												view! { <option value=*strategy>{*strategy}</option> }
											})
											.collect_view()}
									</select>
								}
							})
					}}
					<label>
						<input
							type="checkbox"
							prop:checked=move || enabled.get()
							on:change=move |ev| enabled.set(event_target_checked(&ev))
						/>
						"Enabled"
					</label>
				</div>

				<h4>"Trigger"</h4>
				<div class="form-row">
					<select
						prop:value=move || trigger_event_type.get()
						on:change=move |ev| trigger_event_type.set(event_target_value(&ev))
					>
						<option value="">"Event Type"</option>
						{TRIGGER_EVENT_TYPES
							.iter()
							.map(|ty| view! { <option value=*ty>{*ty}</option> })
							.collect_view()}
					</select>
					<input
						type="text"
						placeholder="Event Name"
						prop:value=move || trigger_event_name.get()
						on:input=move |ev| trigger_event_name.set(event_target_value(&ev))
					/>
				</div>

				{move || {
					conditions
						.get()
						.into_iter()
						.enumerate()
						.map(|(index, condition)| {
							view! {
								<div class="form-row">
									<input
										type="text"
										placeholder="Field"
										prop:value=condition.field.clone()
										on:input=move |ev| {
											let field = event_target_value(&ev);
											conditions
												.update(|list| {
													if let Some(c) = list.get_mut(index) {
														c.field = field;
													}
												});
										}
									/>
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
										<option value="">"Operator"</option>
										{CONDITION_OPERATORS
											.iter()
											.map(|op| view! { <option value=*op>{*op}</option> })
											.collect_view()}
									</select>
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
				<button on:click=move |_| {
					conditions.update(|list| list.push(RuleCondition::default()));
				}>"Add Condition"</button>

				{move || form_error.get().map(|err| view! { <p class="error">{err}</p> })}

				<div class="dialog-actions">
					<button on:click=move |_| reset_form()>"Reset"</button>
					<button on:click=on_submit>"Create Trait"</button>
				</div>
			</div>

			<div class="card">
				{move || {
					let rules = rules.get();
					if rules.is_empty() {
						return view! { <p>"No enrichment rules found."</p> }.into_any();
					}
					view! {
						<table class="data-table">
							<thead>
								<tr>
									<th>"Trait Name"</th>
									<th>"Type"</th>
									<th>"Merge Strategy"</th>
									<th>"Status"</th>
									<th></th>
								</tr>
							</thead>
							<tbody>
								{rules
									.into_iter()
									.map(|rule| {
										let (status, color) = if rule.enabled {
											("Enabled", theme.success)
										} else {
											("Disabled", theme.text_secondary)
										};
										view! {
											<tr>
												<td>{rule.trait_name}</td>
												<td>{rule.trait_type}</td>
												<td>{rule.merge_strategy}</td>
												<td>
													<Chip label=status color=color />
												</td>
												<td>
													{rule
														.rule_id
														.map(|rule_id| {
															view! {
																<button
																	class="danger"
																	on:click=move |_| delete_rule(rule_id.clone())
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
