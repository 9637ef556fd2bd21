//! Starfield effect: slowly rising stars plus a fading trail of dots that
//! follows the pointer while it moves.
//!
//! Trail dots live in a dense `Vec` in spawn order. Dead dots are compacted
//! out with `retain` every frame, so "the previous dot" is always the
//! previous index.

use rand::Rng;

use super::pointer::PointerState;

/// The pointer counts as moving for this many frames after its last move.
pub const TRAIL_IDLE_FRAMES: u32 = 6;

const STAR_DRIFT: f64 = 0.15;
const STAR_WRAP_MARGIN: f64 = 10.0;
const DOT_MIN_GAP: f64 = 2.0;
const DOT_JITTER: f64 = 50.0;
const DOT_START_ALPHA: f64 = 0.5;
const DOT_FADE: f64 = 0.005;
const DOT_SPEED: f64 = 0.5;
/// How many earlier dots each dot links back to.
const LINK_DEPTH: usize = 3;

/// A background star rising slowly up the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub alpha: f64,
}

/// One fading dot of the pointer trail.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailDot {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub alpha: f64,
	/// Heading in radians.
	pub heading: f64,
}

impl TrailDot {
	fn spawn<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64) -> Self {
		Self {
			x,
			y,
			radius: f64::from(rng.gen_range(1u8..=5)),
			alpha: DOT_START_ALPHA,
			heading: f64::from(rng.gen_range(200u16..340)).to_radians(),
		}
	}
}

/// Integer pixel in `[0, extent)`, or 0 for an empty extent.
fn pixel<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
	if extent >= 1.0 {
		(rng.gen_range(0.0..extent)).floor()
	} else {
		0.0
	}
}

/// `±(0..jitter) + 1`, the offset of a new dot from the pointer.
fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
	sign * rng.gen_range(0.0..DOT_JITTER).floor() + 1.0
}

/// Stars plus the pointer trail, stored densely and compacted every frame.
pub struct Starfield {
	pub stars: Vec<Star>,
	pub dots: Vec<TrailDot>,
	width: f64,
	height: f64,
}

impl Starfield {
	pub fn new<R: Rng + ?Sized>(rng: &mut R, star_count: usize, width: f64, height: f64) -> Self {
		let mut field = Self {
			stars: Vec::with_capacity(star_count),
			dots: Vec::new(),
			width,
			height,
		};
		field.reseed(rng, star_count, width, height);
		field
	}

	/// Scatter a fresh set of stars and drop the whole trail.
	pub fn reseed<R: Rng + ?Sized>(
		&mut self,
		rng: &mut R,
		star_count: usize,
		width: f64,
		height: f64,
	) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.dots.clear();
		self.stars.clear();
		for _ in 0..star_count {
			let star = Star {
				x: pixel(rng, self.width),
				y: pixel(rng, self.height),
				radius: f64::from(rng.gen_range(1u8..=2)),
				alpha: f64::from(rng.gen_range(1u8..=10)) / 20.0,
			};
			self.stars.push(star);
		}
	}

	pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, pointer: &PointerState) {
		for star in &mut self.stars {
			star.y -= STAR_DRIFT;
			if star.y <= -STAR_WRAP_MARGIN {
				star.y = self.height + STAR_WRAP_MARGIN;
			}
		}

		for dot in &mut self.dots {
			dot.alpha -= DOT_FADE;
			dot.x += dot.heading.cos() * DOT_SPEED;
			dot.y += dot.heading.sin() * DOT_SPEED;
		}
		self.dots.retain(|d| d.alpha > 0.0);

		if pointer.moved_within(TRAIL_IDLE_FRAMES) {
			if let Some((px, py)) = pointer.position() {
				self.spawn_near(rng, px, py);
			}
		}
	}

	fn spawn_near<R: Rng + ?Sized>(&mut self, rng: &mut R, px: f64, py: f64) {
		let Some(last) = self.dots.last() else {
			self.dots.push(TrailDot::spawn(rng, px, py));
			return;
		};
		if (last.x - px).abs() < DOT_MIN_GAP || (last.y - py).abs() < DOT_MIN_GAP {
			return;
		}
		let (x, y) = (px + jitter(rng), py + jitter(rng));
		self.dots.push(TrailDot::spawn(rng, x, y));
	}

	/// Polyline through dot `idx` and up to three dots spawned before it.
	pub fn trail_points(&self, idx: usize) -> Vec<(f64, f64)> {
		let start = idx.saturating_sub(LINK_DEPTH);
		self.dots[start..=idx]
			.iter()
			.rev()
			.map(|d| (d.x, d.y))
			.collect()
	}
}
