//! Visual theming for the particle banner.
//!
//! Colors for the background wash, the particles, and the connection lines.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Scale the existing alpha by `factor`, clamped to [0, 1].
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}

	/// Hex for opaque colors, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Three-stop diagonal gradient painted under everything else.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Color stops at offsets 0.0, 0.5 and 1.0
	pub stops: [Color; 3],
}

impl BackgroundStyle {
	/// Stops paired with their gradient offsets.
	pub fn offsets(&self) -> [(f64, Color); 3] {
		[
			(0.0, self.stops[0]),
			(0.5, self.stops[1]),
			(1.0, self.stops[2]),
		]
	}
}

/// Connection line style.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Accent color; alpha is replaced per line
	pub color: Color,
	/// Alpha of a line between two coincident particles
	pub opacity: f64,
	pub width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	/// Base particle color, multiplied by each particle's own opacity
	pub particle: Color,
	pub link: LinkStyle,
}

impl Theme {
	/// Soft violet wash with blue links (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: BackgroundStyle {
				stops: [
					Color::rgba(102, 126, 234, 0.08),
					Color::rgba(118, 75, 162, 0.06),
					Color::rgba(240, 147, 251, 0.08),
				],
			},
			particle: Color::WHITE,
			link: LinkStyle {
				color: Color::rgb(102, 126, 234),
				opacity: 0.5,
				width: 1.0,
			},
		}
	}

	/// Darker wash, cooler links
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				stops: [
					Color::rgba(18, 20, 28, 0.15),
					Color::rgba(25, 28, 38, 0.1),
					Color::rgba(60, 70, 110, 0.12),
				],
			},
			particle: Color::WHITE,
			link: LinkStyle {
				color: Color::rgb(100, 120, 150),
				opacity: 0.45,
				width: 1.0,
			},
		}
	}

	/// Barely-there wash, white links
	pub fn minimal() -> Self {
		Self {
			name: "minimal",
			background: BackgroundStyle {
				stops: [
					Color::rgba(255, 255, 255, 0.02),
					Color::rgba(255, 255, 255, 0.01),
					Color::rgba(255, 255, 255, 0.02),
				],
			},
			particle: Color::WHITE,
			link: LinkStyle {
				color: Color::WHITE,
				opacity: 0.3,
				width: 0.8,
			},
		}
	}

	/// Look up a preset by name, falling back to the default theme.
	pub fn by_name(name: &str) -> Self {
		match name {
			"midnight" => Self::midnight(),
			"minimal" => Self::minimal(),
			_ => Self::default_theme(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_css_output() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(
			Color::rgba(1, 2, 3, 0.5).to_css(),
			"rgba(1, 2, 3, 0.5)"
		);
	}

	#[test]
	fn test_fade_scales_and_clamps() {
		let c = Color::rgba(0, 0, 0, 0.8).fade(0.5);
		assert!((c.a - 0.4).abs() < 1e-12);
		assert_eq!(Color::WHITE.fade(3.0).a, 1.0);
		assert_eq!(Color::WHITE.fade(-1.0).a, 0.0);
	}

	#[test]
	fn test_by_name_falls_back() {
		assert_eq!(Theme::by_name("midnight").name, "midnight");
		assert_eq!(Theme::by_name("nope").name, "default");
	}

	#[test]
	fn test_background_stops_are_translucent() {
		for theme in [Theme::default_theme(), Theme::midnight(), Theme::minimal()] {
			for (_, stop) in theme.background.offsets() {
				assert!(stop.a < 0.5, "{} wash should stay faint", theme.name);
			}
		}
	}

	#[test]
	fn test_color_alpha_defaults_to_opaque() {
		let c: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
		assert_eq!(c, Color::rgb(1, 2, 3));
	}
}
