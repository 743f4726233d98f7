use leptos::prelude::*;

/// Small colored status label.
#[component]
pub fn Chip(#[prop(into)] label: String, color: &'static str) -> impl IntoView {
	view! {
		<span class="chip" style=format!("background-color: {color}")>
			{label}
		</span>
	}
}

/// Horizontal tab bar; clicking a tab stores its label in `selected`.
#[component]
pub fn TabBar(labels: Vec<String>, selected: RwSignal<Option<String>>) -> impl IntoView {
	view! {
		<div class="tab-bar">
			{labels
				.into_iter()
				.map(|label| {
					let value = label.clone();
					let clicked = label.clone();
					view! {
						<button
							class="tab"
							class:active=move || selected.get().as_deref() == Some(value.as_str())
							on:click=move |_| selected.set(Some(clicked.clone()))
						>
							{label}
						</button>
					}
				})
				.collect_view()}
		</div>
	}
}
