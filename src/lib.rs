//! particle-field: Interactive particle background for web pages.
//!
//! This crate provides a WASM-based canvas component that renders a field of
//! particles reacting to the pointer, springing back to rest and linking up
//! with nearby neighbours.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

/// Leptos components.
pub mod components;

pub use components::particle_field::{
	FieldConfig, FieldHandle, FieldState, ParticleFieldCanvas, SetupError, Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"particle-field: loaded config ({} particles, theme {})",
				config.count, config.theme
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the field configuration from the DOM and renders a fullscreen field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-field">
			<ParticleFieldCanvas config=config fullscreen=true />
			<div class="field-overlay">
				<h1>"Particle Field"</h1>
				<p class="subtitle">"Move the pointer across the field to push particles aside."</p>
			</div>
		</div>
	}
}
