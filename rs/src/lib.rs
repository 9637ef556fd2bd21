//! canvas-banner: animated particle background for a page banner.
//!
//! This crate provides a WASM-based canvas component that renders drifting,
//! pointer-shy particles joined by distance-faded lines behind a page header.

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_banner::{
	BannerConfig, BannerEngine, BannerError, Effect, ParticleBanner, Surface, SurfaceError,
	SurfaceSize, Viewport,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("canvas-banner: logging initialized");
}

/// Load banner config from a script element with id="banner-config".
/// Expected format: JSON object, every field optional.
fn load_banner_config() -> Option<BannerConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("banner-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match BannerConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"canvas-banner: loaded config ({:?}, {} particles)",
				config.effect, config.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("canvas-banner: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads banner config from DOM and renders the banner header.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_banner_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="canvas-banner" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<header class="banner">
			<ParticleBanner config=config />
			<div class="banner-overlay">
				<h1>"Welcome"</h1>
				<p class="subtitle">"Move the pointer across the banner."</p>
			</div>
		</header>
	}
}
