//! Console screens, one module per route.

use wasm_bindgen::JsValue;

pub mod enrichment_rules;
pub mod event_explorer;
pub mod event_schemas;
pub mod not_found;
pub mod profile;
pub mod profiles;
pub mod unification_rules;

/// Format an epoch-seconds timestamp in the browser locale.
pub(crate) fn format_timestamp(secs: i64) -> String {
	js_sys::Date::new(&JsValue::from_f64(secs as f64 * 1000.0))
		.to_locale_string("default", &JsValue::UNDEFINED)
		.into()
}
