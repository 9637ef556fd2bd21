//! Drifting particles that bounce off the surface edges and shy away from the pointer.

use rand::Rng;

use super::pointer::PointerState;

/// A single moving point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// In [1, 4), fixed at creation.
	pub radius: f64,
	/// In [0.3, 0.8), fixed at creation.
	pub opacity: f64,
}

/// Uniform sample from `[low, high)`, or `low` when the range is empty.
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
	if high > low {
		rng.gen_range(low..high)
	} else {
		low
	}
}

/// Limit a displacement `delta` of `pos` so it does not leave `[0, max]`.
/// A position already outside is never pushed further out.
fn within(pos: f64, delta: f64, max: f64) -> f64 {
	delta.clamp((-pos).min(0.0), (max - pos).max(0.0))
}

/// Step `pos` by `vel` along one axis, turning `vel` toward the interior first
/// if the step would leave `[0, max]`.
/// A zero-length axis has no interior, so motion along it stops.
fn bounce(pos: &mut f64, vel: &mut f64, max: f64) {
	if max <= 0.0 {
		*vel = 0.0;
		return;
	}
	let next = *pos + *vel;
	if next < 0.0 {
		*vel = vel.abs();
	} else if next > max {
		*vel = -vel.abs();
	}
	*pos += *vel;
}

impl Particle {
	/// A particle at a uniform position inside `width` x `height` with a
	/// velocity in [-0.5, 0.5) on each axis.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
		Self {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			vx: uniform(rng, -0.5, 0.5),
			vy: uniform(rng, -0.5, 0.5),
			radius: uniform(rng, 1.0, 4.0),
			opacity: uniform(rng, 0.3, 0.8),
		}
	}

	/// Move one frame, reflecting velocity off the edges of `width` x `height`.
	pub fn advance(&mut self, width: f64, height: f64) {
		bounce(&mut self.x, &mut self.vx, width);
		bounce(&mut self.y, &mut self.vy, height);
	}

	/// Push the particle straight away from the pointer if it is inside the
	/// pointer's radius. Only the position moves; velocity is kept.
	///
	/// The part of the push that would carry the particle past an edge of
	/// `width` x `height` is dropped, so the pointer can pin a particle against
	/// an edge but never drive it off the surface.
	pub fn repel(&mut self, pointer: &PointerState, strength: f64, width: f64, height: f64) {
		let Some(((px, py), dist)) = pointer.influence(self.x, self.y) else {
			return;
		};
		if dist <= f64::EPSILON {
			return;
		}
		let force = (pointer.radius - dist) / pointer.radius;
		self.x += within(self.x, (self.x - px) / dist * force * strength, width);
		self.y += within(self.y, (self.y - py) / dist * force * strength, height);
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
	}
}

/// A pair of particles close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle; always less than `b`.
	pub a: usize,
	pub b: usize,
	pub distance: f64,
}

/// The particle population and the bounds it lives in.
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleSystem {
	/// `count` random particles inside `width` x `height`.
	pub fn new<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f64, height: f64) -> Self {
		let mut system = Self {
			particles: Vec::with_capacity(count),
			width,
			height,
		};
		system.reseed(rng, count, width, height);
		system
	}

	/// Drop every particle and create `count` fresh ones inside the new bounds.
	pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.particles.clear();
		self.particles
			.extend((0..count).map(|_| Particle::random(rng, self.width, self.height)));
	}

	/// Advance every particle and apply pointer repulsion.
	pub fn update(&mut self, pointer: &PointerState, strength: f64) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
			p.repel(pointer, strength, self.width, self.height);
		}
	}

	/// Every unordered pair `(a, b)` with `a < b` closer than `max_distance`.
	pub fn links(&self, max_distance: f64) -> Vec<Link> {
		let mut links = Vec::new();
		for (a, pa) in self.particles.iter().enumerate() {
			for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
				let distance = pa.distance_to(pb);
				if distance < max_distance {
					links.push(Link { a, b, distance });
				}
			}
		}
		links
	}
}
