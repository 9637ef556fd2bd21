//! Latest known pointer / touch location.

/// Pointer position in surface space, or absent when nothing is tracked.
#[derive(Clone, Debug)]
pub struct PointerState {
	position: Option<(f64, f64)>,
	/// Distance within which particles are pushed away.
	pub radius: f64,
	/// Frames since the last move; drives the trail effect's idle cut-off.
	idle_frames: u32,
}

impl PointerState {
	/// An absent pointer with the given influence radius.
	pub fn new(radius: f64) -> Self {
		Self {
			position: None,
			radius,
			idle_frames: u32::MAX,
		}
	}

	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}

	pub fn is_present(&self) -> bool {
		self.position.is_some()
	}

	/// Move the pointer to `(x, y)` and reset the idle counter.
	pub fn set(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
		self.idle_frames = 0;
	}

	/// Forget the pointer. Calling this when already absent is a no-op.
	pub fn clear(&mut self) {
		self.position = None;
	}

	/// True if the pointer moved within the last `window` frames.
	pub fn moved_within(&self, window: u32) -> bool {
		self.is_present() && self.idle_frames < window
	}

	/// Advance the idle counter by one frame.
	pub fn tick(&mut self) {
		self.idle_frames = self.idle_frames.saturating_add(1);
	}

	/// Distance from `(x, y)` to the pointer when it is present and within the
	/// influence radius, together with the pointer position.
	pub fn influence(&self, x: f64, y: f64) -> Option<((f64, f64), f64)> {
		let (px, py) = self.position?;
		let dist = ((x - px).powi(2) + (y - py).powi(2)).sqrt();
		(dist < self.radius).then_some(((px, py), dist))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clear_is_idempotent() {
		let mut p = PointerState::new(100.0);
		p.clear();
		assert!(!p.is_present());
		p.clear();
		assert!(!p.is_present());
		assert_eq!(p.position(), None);
	}

	#[test]
	fn test_set_then_clear() {
		let mut p = PointerState::new(100.0);
		p.set(3.0, 4.0);
		assert_eq!(p.position(), Some((3.0, 4.0)));
		p.clear();
		assert!(!p.is_present());
	}

	#[test]
	fn test_influence_respects_radius() {
		let mut p = PointerState::new(10.0);
		assert!(p.influence(0.0, 0.0).is_none());
		p.set(0.0, 0.0);
		let (_, d) = p.influence(3.0, 4.0).unwrap();
		assert!((d - 5.0).abs() < 1e-12);
		assert!(p.influence(10.0, 0.0).is_none());
	}

	#[test]
	fn test_moved_within_counts_frames() {
		let mut p = PointerState::new(10.0);
		assert!(!p.moved_within(6));
		p.set(1.0, 1.0);
		assert!(p.moved_within(6));
		for _ in 0..6 {
			p.tick();
		}
		assert!(!p.moved_within(6));
	}
}
