//! Banner configuration, deserialized from page-embedded JSON.

use serde::Deserialize;

use super::error::BannerError;

/// Which visual the banner runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
	/// Bouncing particles joined by faded lines.
	#[default]
	Constellation,
	/// Rising stars with a pointer-following trail.
	Starfield,
}

/// Tunables for the banner. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
	pub effect: Effect,
	/// Particles created on every (re)initialization.
	pub particle_count: usize,
	/// Pairs closer than this are joined by a line.
	pub link_distance: f64,
	/// Pointer influence radius.
	pub pointer_radius: f64,
	/// Displacement, in pixels, of a particle sitting right next to the pointer.
	pub repulsion_strength: f64,
	/// Stars seeded for the starfield effect.
	pub star_count: usize,
	/// Theme preset name, see [`Theme::by_name`](super::theme::Theme::by_name).
	pub theme: String,
	/// Fixed RNG seed; entropy is used when absent.
	pub seed: Option<u64>,
}

impl Default for BannerConfig {
	fn default() -> Self {
		Self {
			effect: Effect::Constellation,
			particle_count: 60,
			link_distance: 120.0,
			pointer_radius: 100.0,
			repulsion_strength: 3.0,
			star_count: 80,
			theme: "default".to_string(),
			seed: None,
		}
	}
}

impl BannerConfig {
	/// Parse a JSON object; missing fields take their defaults.
	pub fn from_json(text: &str) -> Result<Self, BannerError> {
		Ok(serde_json::from_str(text)?)
	}
}
