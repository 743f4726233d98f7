use leptos::prelude::*;

use crate::api;
use crate::components::ui::Chip;
use crate::model::profile::UnificationRule;
use crate::theme::Theme;

/// Read-only list of the server-side identity-resolution rules.
#[component]
pub fn UnificationRules() -> impl IntoView {
	let theme = use_context::<Theme>().unwrap_or_default();
	let rules = RwSignal::new(Vec::<UnificationRule>::new());
	leptos::task::spawn_local(async move {
		rules.set(api::fetch_unification_rules().await);
	});

	view! {
		<div class="page">
			<h2>"Unification Rules"</h2>
			<div class="card">
				{move || {
					let rules = rules.get();
					if rules.is_empty() {
						return view! { <p>"No unification rules found."</p> }.into_any();
					}
					view! {
						<table class="data-table">
							<thead>
								<tr>
									<th>"Rule Name"</th>
									<th>"Status"</th>
									<th>"Rules"</th>
								</tr>
							</thead>
							<tbody>
								{rules
									.into_iter()
									.map(|rule| {
										let name = if rule.rule_name.is_empty() {
											"Unnamed Rule".to_owned()
										} else {
											rule.rule_name
										};
										let (status, color) = if rule.is_active {
											("Active", theme.success)
										} else {
											("Inactive", theme.text_secondary)
										};
										view! {
											<tr>
												<td>{name}</td>
												<td>
													<Chip label=status color=color />
												</td>
												<td>
													<table class="data-table nested">
														<thead>
															<tr>
																<th>"Attribute"</th>
																<th>"Priority"</th>
															</tr>
														</thead>
														<tbody>
															{rule
																.rules
																.into_iter()
																.map(|criterion| {
																	view! {
																		<tr>
																			<td>{criterion.attribute}</td>
																			<td>{criterion.priority.to_string()}</td>
																		</tr>
																	}
																})
																.collect_view()}
														</tbody>
													</table>
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
