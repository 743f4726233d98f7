//! Leptos client-side console for a customer-data platform: unified
//! profiles with their hierarchy graph, unification and enrichment rules,
//! event schemas and raw event exploration, all over the profile service
//! HTTP API.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
mod components;
mod model;
mod pages;
mod theme;

// Top-Level pages
use crate::pages::enrichment_rules::EnrichmentRules;
use crate::pages::event_explorer::EventExplorer;
use crate::pages::event_schemas::EventSchemas;
use crate::pages::not_found::NotFound;
use crate::pages::profile::Profile;
use crate::pages::profiles::Profiles;
use crate::pages::unification_rules::UnificationRules;
use crate::theme::Theme;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the console screens and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(Theme::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Profile Console" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<nav class="top-nav">
				<A href="/profiles">"Profiles"</A>
				<A href="/unification-rules">"Unification Rules"</A>
				<A href="/enrichment-rules">"Profile Enrichment"</A>
				<A href="/event-schemas">"Event Schemas"</A>
				<A href="/event-explorer">"Event Explorer"</A>
			</nav>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Profiles />
				<Route path=path!("/profiles") view=Profiles />
				<Route path=path!("/profiles/:id") view=Profile />
				<Route path=path!("/unification-rules") view=UnificationRules />
				<Route path=path!("/enrichment-rules") view=EnrichmentRules />
				<Route path=path!("/event-schemas") view=EventSchemas />
				<Route path=path!("/event-explorer") view=EventExplorer />
			</Routes>
		</Router>
	}
}
