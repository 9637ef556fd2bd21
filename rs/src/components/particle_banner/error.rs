//! Error types for mounting the banner and drawing on it.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while mounting the banner onto a canvas.
#[derive(Debug, Error)]
pub enum BannerError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,
	/// `getContext("2d")` returned nothing.
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("2d context has an unexpected type")]
	ContextCast,
	/// The embedded JSON config did not parse.
	#[error("invalid banner config: {0}")]
	Config(#[from] serde_json::Error),
	/// A DOM call threw; holds the stringified JS value.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for BannerError {
	fn from(value: JsValue) -> Self {
		Self::Js(describe(&value))
	}
}

/// A drawing primitive the surface refused.
#[derive(Debug, Error)]
#[error("draw call `{op}` failed: {reason}")]
pub struct SurfaceError {
	/// Name of the refused primitive.
	pub op: &'static str,
	pub reason: String,
}

impl SurfaceError {
	pub fn new(op: &'static str, reason: impl Into<String>) -> Self {
		Self {
			op,
			reason: reason.into(),
		}
	}

	pub fn from_js(op: &'static str, value: &JsValue) -> Self {
		Self::new(op, describe(value))
	}
}

fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_surface_error_message() {
		let err = SurfaceError::new("arc", "negative radius");
		assert_eq!(err.to_string(), "draw call `arc` failed: negative radius");
	}

	#[test]
	fn test_config_error_wraps_serde() {
		let parse = serde_json::from_str::<u32>("nope").unwrap_err();
		let err = BannerError::from(parse);
		assert!(err.to_string().starts_with("invalid banner config:"));
	}
}
