//! Surface sizing from the host viewport.

/// Display widths at or above this use the taller banner.
pub const WIDE_BREAKPOINT: f64 = 992.0;

/// Width and height of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
	pub width: f64,
	pub height: f64,
}

/// Viewport measurements taken when the page loads or resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Physical display width (`screen.width`).
	pub display_width: f64,
	/// Viewport height (`innerHeight`).
	pub height: f64,
	/// Content width of the element hosting the canvas.
	pub container_width: f64,
}

impl Viewport {
	/// Half the viewport height on wide displays, two sevenths otherwise.
	/// Width always follows the host container.
	pub fn surface_size(&self) -> SurfaceSize {
		let height = if self.display_width >= WIDE_BREAKPOINT {
			self.height / 2.0
		} else {
			self.height * 2.0 / 7.0
		};
		SurfaceSize {
			width: self.container_width.max(0.0),
			height: height.max(0.0),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_wide_display_uses_half_height() {
		let vp = Viewport {
			display_width: 1920.0,
			height: 900.0,
			container_width: 1900.0,
		};
		assert_eq!(
			vp.surface_size(),
			SurfaceSize {
				width: 1900.0,
				height: 450.0
			}
		);
	}

	#[test]
	fn test_breakpoint_is_inclusive() {
		let vp = Viewport {
			display_width: 992.0,
			height: 700.0,
			container_width: 992.0,
		};
		assert_eq!(vp.surface_size().height, 350.0);
	}

	#[test]
	fn test_narrow_display_uses_two_sevenths() {
		let vp = Viewport {
			display_width: 991.0,
			height: 700.0,
			container_width: 375.0,
		};
		let size = vp.surface_size();
		assert_eq!(size.height, 700.0 * 2.0 / 7.0);
		assert_eq!(size.width, 375.0);
	}
}
