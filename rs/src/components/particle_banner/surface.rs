//! The 2D drawing primitives the banner needs, and their canvas implementation.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::error::SurfaceError;
use super::theme::Color;

/// Abstract 2D raster surface.
///
/// Every primitive may fail; callers decide whether a failure matters. The
/// renderer logs and skips failed primitives so a frame is never abandoned.
pub trait Surface {
	/// Clear a rectangle to transparent.
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError>;

	/// Fill a rectangle with a linear gradient running from its top-left to
	/// bottom-right corner. `stops` are `(offset, color)` pairs.
	fn fill_gradient_rect(
		&mut self,
		x: f64,
		y: f64,
		w: f64,
		h: f64,
		stops: &[(f64, Color)],
	) -> Result<(), SurfaceError>;

	/// Fill a full circle centred on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color)
	-> Result<(), SurfaceError>;

	/// Stroke a single segment with the given line width.
	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		width: f64,
	) -> Result<(), SurfaceError>;

	/// Stroke connected segments through `points`. Fewer than two points draw nothing.
	fn stroke_polyline(
		&mut self,
		points: &[(f64, f64)],
		color: Color,
		width: f64,
	) -> Result<(), SurfaceError>;
}

impl Surface for CanvasRenderingContext2d {
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError> {
		CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
		Ok(())
	}

	fn fill_gradient_rect(
		&mut self,
		x: f64,
		y: f64,
		w: f64,
		h: f64,
		stops: &[(f64, Color)],
	) -> Result<(), SurfaceError> {
		let gradient = self.create_linear_gradient(x, y, x + w, y + h);
		for (offset, color) in stops {
			gradient
				.add_color_stop(*offset as f32, &color.to_css())
				.map_err(|e| SurfaceError::from_js("add_color_stop", &e))?;
		}

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill_rect(x, y, w, h);
		Ok(())
	}

	fn fill_circle(
		&mut self,
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	) -> Result<(), SurfaceError> {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		self.arc(x, y, radius, 0.0, PI * 2.0)
			.map_err(|e| SurfaceError::from_js("arc", &e))?;
		self.fill();
		Ok(())
	}

	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		width: f64,
	) -> Result<(), SurfaceError> {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
		Ok(())
	}

	fn stroke_polyline(
		&mut self,
		points: &[(f64, f64)],
		color: Color,
		width: f64,
	) -> Result<(), SurfaceError> {
		let [first, rest @ ..] = points else {
			return Ok(());
		};
		if rest.is_empty() {
			return Ok(());
		}
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(first.0, first.1);
		for p in rest {
			self.line_to(p.0, p.1);
		}
		self.stroke();
		Ok(())
	}
}
