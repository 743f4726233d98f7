use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::ui::Chip;
use crate::model::profile::ProfileSummary;
use crate::theme::Theme;

/// Profile list: one row per unified profile, linking to its detail page.
#[component]
pub fn Profiles() -> impl IntoView {
	let theme = use_context::<Theme>().unwrap_or_default();
	let navigate = use_navigate();
	let profiles = RwSignal::new(Vec::<ProfileSummary>::new());
	leptos::task::spawn_local(async move {
		profiles.set(api::fetch_profiles().await);
	});

	view! {
		<div class="page">
			<h2>"User Profiles"</h2>
			<table class="data-table">
				<thead>
					<tr>
						<th>"Profile ID"</th>
						<th>"Attached Users"</th>
					</tr>
				</thead>
				<tbody>
					{move || {
						profiles
							.get()
							.into_iter()
							.map(|profile| {
								let navigate = navigate.clone();
								let target = format!("/profiles/{}", profile.profile_id);
								view! {
									<tr
										class="clickable"
										on:click=move |_| navigate(&target, Default::default())
									>
										<td>{profile.profile_id}</td>
										<td>
											{if profile.user_ids.is_empty() {
												view! {
													<Chip label="Anonymous Profile" color=theme.primary />
												}
													.into_any()
											} else {
												view! { <span>{profile.user_ids.join(", ")}</span> }
													.into_any()
											}}
										</td>
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>
		</div>
	}
}
