use leptos::prelude::*;

/// 404 fallback route.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page">
			<h2>"Page Not Found"</h2>
			<p>"The page you were looking for does not exist."</p>
		</div>
	}
}
