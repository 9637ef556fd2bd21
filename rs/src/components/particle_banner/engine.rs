//! Banner animation state and the per-frame step.
//!
//! One `BannerEngine` owns everything the animation mutates: the particle
//! population, the pointer, the surface size, and the RNG. The host drives it
//! from a single thread: event handlers call the `on_*` methods, and the
//! animation-frame callback calls [`BannerEngine::frame`] until it returns
//! `false`.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::particles::{Particle, ParticleSystem};
use super::pointer::PointerState;
use super::render;
use super::surface::Surface;
use super::theme::Theme;
use super::trail::Starfield;
use super::types::{BannerConfig, Effect};
use super::viewport::{SurfaceSize, Viewport};

/// Owns the banner's animation state and advances it one frame at a time.
///
/// Generic over the RNG so tests can seed it; the browser build uses
/// [`SmallRng`].
pub struct BannerEngine<R: Rng = SmallRng> {
	config: BannerConfig,
	theme: Theme,
	size: SurfaceSize,
	pointer: PointerState,
	particles: ParticleSystem,
	starfield: Starfield,
	rng: R,
	initialized: bool,
	running: bool,
	frames: u64,
}

impl BannerEngine<SmallRng> {
	/// Build an engine from config, seeding the RNG from `config.seed` or entropy.
	pub fn new(config: BannerConfig) -> Self {
		let rng = match config.seed {
			Some(seed) => SmallRng::seed_from_u64(seed),
			None => SmallRng::from_entropy(),
		};
		Self::with_rng(config, rng)
	}
}

impl<R: Rng> BannerEngine<R> {
	/// Build an engine around a caller-supplied RNG. Nothing is seeded until
	/// [`init`](Self::init) or [`on_resize`](Self::on_resize) runs.
	pub fn with_rng(config: BannerConfig, mut rng: R) -> Self {
		let theme = Theme::by_name(&config.theme);
		let pointer = PointerState::new(config.pointer_radius);
		let particles = ParticleSystem::new(&mut rng, 0, 0.0, 0.0);
		let starfield = Starfield::new(&mut rng, 0, 0.0, 0.0);
		Self {
			config,
			theme,
			size: SurfaceSize::default(),
			pointer,
			particles,
			starfield,
			rng,
			initialized: false,
			running: false,
			frames: 0,
		}
	}

	/// Replace the population with `count` fresh particles inside `width` x `height`.
	///
	/// With the starfield effect the stars are re-seeded instead and the
	/// particle population is left empty, since nothing would move or draw it.
	pub fn init(&mut self, width: f64, height: f64, count: usize) {
		self.size = SurfaceSize {
			width: width.max(0.0),
			height: height.max(0.0),
		};
		let SurfaceSize { width, height } = self.size;
		match self.config.effect {
			Effect::Constellation => {
				self.particles.reseed(&mut self.rng, count, width, height);
				info!("canvas-banner: seeded {count} particles on {width}x{height}");
			}
			Effect::Starfield => {
				self.particles.reseed(&mut self.rng, 0, width, height);
				self.starfield
					.reseed(&mut self.rng, self.config.star_count, width, height);
				info!(
					"canvas-banner: seeded {} stars on {width}x{height}",
					self.config.star_count
				);
			}
		}
		self.initialized = true;
	}

	/// Advance the simulation one frame and draw it.
	pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
		let SurfaceSize { width, height } = self.size;
		render::draw_background(surface, width, height, &self.theme);

		match self.config.effect {
			Effect::Constellation => {
				self.particles
					.update(&self.pointer, self.config.repulsion_strength);
				render::draw_particles(surface, &self.particles, &self.theme);
				render::draw_links(
					surface,
					&self.particles,
					self.config.link_distance,
					&self.theme,
				);
			}
			Effect::Starfield => {
				self.starfield.update(&mut self.rng, &self.pointer);
				render::draw_starfield(surface, &self.starfield);
			}
		}

		self.pointer.tick();
		self.frames += 1;
	}

	/// Run one step if the engine is running. Returns whether another frame
	/// should be requested.
	pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
		if !self.running {
			return false;
		}
		self.step(surface);
		true
	}

	/// Mark the loop as running so [`frame`](Self::frame) steps again.
	pub fn start(&mut self) {
		if !self.running {
			debug!("canvas-banner: animation started");
		}
		self.running = true;
	}

	/// Stop the animation. Every later [`frame`](Self::frame) call is a no-op
	/// returning `false`, so a host that reschedules on `true` stops
	/// requesting frames. Call this on teardown.
	pub fn stop(&mut self) {
		if self.running {
			debug!("canvas-banner: animation stopped after {} frames", self.frames);
		}
		self.running = false;
	}

	/// Whether frames are currently being stepped.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Whether [`init`](Self::init) has run at least once.
	pub fn is_initialized(&self) -> bool {
		self.initialized
	}

	/// Resize the surface from fresh viewport measurements and re-seed the
	/// population. Returns the new surface size for the canvas element.
	pub fn on_resize(&mut self, viewport: Viewport) -> SurfaceSize {
		let size = viewport.surface_size();
		self.init(size.width, size.height, self.config.particle_count);
		size
	}

	/// Record the pointer at surface coordinates `(x, y)`.
	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.pointer.set(x, y);
	}

	/// Same as a pointer move. The host must also suppress the default
	/// touch gesture (scrolling) for the event.
	pub fn on_touch_move(&mut self, x: f64, y: f64) {
		self.pointer.set(x, y);
	}

	/// The pointer left the surface; repulsion stops until it returns.
	pub fn on_pointer_leave(&mut self) {
		self.pointer.clear();
	}

	/// Same as a pointer leave.
	pub fn on_touch_end(&mut self) {
		self.pointer.clear();
	}

	/// The current particle population.
	pub fn particles(&self) -> &[Particle] {
		&self.particles.particles
	}

	/// Mutable access to the population, for placing particles by hand.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles.particles
	}

	/// Stars and trail dots of the starfield effect.
	pub fn starfield(&self) -> &Starfield {
		&self.starfield
	}

	/// Current pointer state.
	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	/// Surface size set by the last init or resize.
	pub fn size(&self) -> SurfaceSize {
		self.size
	}

	/// The config the engine was built with.
	pub fn config(&self) -> &BannerConfig {
		&self.config
	}

	/// Frames stepped since construction.
	pub fn frames(&self) -> u64 {
		self.frames
	}
}

#[cfg(test)]
mod tests {
	use super::super::surface::recording::{DrawOp, RecordingSurface};
	use super::*;

	fn seeded() -> BannerEngine {
		BannerEngine::new(BannerConfig {
			seed: Some(1234),
			..BannerConfig::default()
		})
	}

	#[test]
	fn test_init_population_invariant() {
		let mut engine = seeded();
		assert!(!engine.is_initialized());
		engine.init(320.0, 240.0, 45);
		assert!(engine.is_initialized());
		assert_eq!(engine.particles().len(), 45);
		for p in engine.particles() {
			assert!((0.0..320.0).contains(&p.x));
			assert!((0.0..240.0).contains(&p.y));
			assert!((0.3..0.8).contains(&p.opacity));
			assert!((1.0..4.0).contains(&p.radius));
		}
	}

	#[test]
	fn test_reinit_clears_previous_population() {
		let mut engine = seeded();
		engine.init(100.0, 100.0, 30);
		engine.init(50.0, 50.0, 7);
		assert_eq!(engine.particles().len(), 7);
	}

	#[test]
	fn test_boundary_reflection_in_one_step() {
		let mut engine = seeded();
		engine.init(200.0, 100.0, 1);
		{
			let p = &mut engine.particles_mut()[0];
			p.x = 200.0 - 0.1;
			p.y = 50.0;
			p.vx = 0.5;
			p.vy = 0.0;
		}
		engine.step(&mut RecordingSurface::default());
		let p = &engine.particles()[0];
		assert!(p.vx < 0.0);
		assert!(p.x <= 200.0);
	}

	#[test]
	fn test_pointer_pushes_particle_further_away() {
		let place = |engine: &mut BannerEngine| {
			engine.init(400.0, 400.0, 1);
			let p = &mut engine.particles_mut()[0];
			p.x = 210.0;
			p.y = 200.0;
			p.vx = 0.1;
			p.vy = 0.1;
		};
		let dist = |p: &Particle| ((p.x - 200.0).powi(2) + (p.y - 200.0).powi(2)).sqrt();

		let mut without = seeded();
		place(&mut without);
		without.step(&mut RecordingSurface::default());

		let mut with = seeded();
		place(&mut with);
		with.on_pointer_move(200.0, 200.0);
		with.step(&mut RecordingSurface::default());

		let (a, b) = (&without.particles()[0], &with.particles()[0]);
		assert!(dist(b) > dist(a));
		assert_eq!((a.vx, a.vy), (b.vx, b.vy));
	}

	#[test]
	fn test_pointer_near_left_edge_cannot_push_particle_off() {
		let mut engine = seeded();
		engine.init(400.0, 200.0, 1);
		{
			let p = &mut engine.particles_mut()[0];
			p.x = 1.0;
			p.y = 100.0;
			p.vx = 0.3;
			p.vy = 0.0;
		}
		engine.on_pointer_move(5.0, 100.0);

		let mut surface = RecordingSurface::default();
		let mut outside_run = 0;
		for _ in 0..60 {
			engine.step(&mut surface);
			let p = &engine.particles()[0];
			let outside = !(0.0..=400.0).contains(&p.x) || !(0.0..=200.0).contains(&p.y);
			outside_run = if outside { outside_run + 1 } else { 0 };
			assert!(outside_run <= 1, "outside for {outside_run} frames, x = {}", p.x);
		}
		let p = &engine.particles()[0];
		assert!(p.x >= 0.0);
		// the push only moves the particle; its velocity is untouched
		assert_eq!(p.vx, 0.3);
	}

	#[test]
	fn test_connection_pass_has_no_self_or_duplicate_pairs() {
		let mut engine = seeded();
		engine.init(60.0, 60.0, 12);
		let mut surface = RecordingSurface::default();
		engine.step(&mut surface);

		let mut seen: Vec<((u64, u64), (u64, u64))> = Vec::new();
		for op in surface.lines() {
			let DrawOp::Line { from, to, .. } = op else {
				continue;
			};
			assert_ne!(from, to);
			let key = |p: &(f64, f64)| (p.0.to_bits(), p.1.to_bits());
			let (a, b) = (key(from), key(to));
			let pair = if a < b { (a, b) } else { (b, a) };
			assert!(!seen.contains(&pair));
			seen.push(pair);
		}
		// 12 particles in a 60x60 box, all within the 120px link distance
		assert_eq!(seen.len(), 12 * 11 / 2);
	}

	#[test]
	fn test_resize_uses_breakpoint_and_reseeds() {
		let mut engine = seeded();
		let wide = engine.on_resize(Viewport {
			display_width: 1280.0,
			height: 800.0,
			container_width: 1200.0,
		});
		assert_eq!(wide.height, 400.0);
		assert_eq!(wide.width, 1200.0);
		assert_eq!(engine.particles().len(), 60);

		let narrow = engine.on_resize(Viewport {
			display_width: 414.0,
			height: 896.0,
			container_width: 414.0,
		});
		assert_eq!(narrow.height, 896.0 * 2.0 / 7.0);
		assert_eq!(engine.size(), narrow);
	}

	#[test]
	fn test_pointer_leave_when_absent() {
		let mut engine = seeded();
		engine.on_pointer_leave();
		assert!(!engine.pointer().is_present());
		engine.on_touch_move(5.0, 5.0);
		engine.on_touch_end();
		engine.on_pointer_leave();
		assert!(!engine.pointer().is_present());
	}

	#[test]
	fn test_ten_steps_stay_in_bounds() {
		let mut engine = seeded();
		engine.init(800.0, 400.0, 60);
		let mut surface = RecordingSurface::default();
		for _ in 0..10 {
			engine.step(&mut surface);
		}
		assert_eq!(engine.particles().len(), 60);
		for p in engine.particles() {
			assert!((0.0..=800.0).contains(&p.x), "x out of bounds: {}", p.x);
			assert!((0.0..=400.0).contains(&p.y), "y out of bounds: {}", p.y);
		}
		assert_eq!(engine.frames(), 10);
	}

	#[test]
	fn test_stop_halts_frames() {
		let mut engine = seeded();
		engine.init(100.0, 100.0, 5);
		let mut surface = RecordingSurface::default();
		assert!(!engine.frame(&mut surface));
		assert!(surface.ops.is_empty());

		engine.start();
		assert!(engine.frame(&mut surface));
		assert_eq!(surface.circles(), 5);

		engine.stop();
		let drawn = surface.ops.len();
		assert!(!engine.frame(&mut surface));
		assert_eq!(surface.ops.len(), drawn);
		assert!(!engine.is_running());
	}

	#[test]
	fn test_surface_failure_keeps_loop_alive() {
		let mut engine = seeded();
		engine.init(100.0, 100.0, 5);
		engine.start();
		let mut surface = RecordingSurface::failing("clear_rect");
		for _ in 0..3 {
			assert!(engine.frame(&mut surface));
		}
		assert_eq!(surface.circles(), 15);
	}

	#[test]
	fn test_starfield_effect_runs() {
		let mut engine = BannerEngine::new(BannerConfig {
			effect: Effect::Starfield,
			star_count: 10,
			seed: Some(9),
			..BannerConfig::default()
		});
		engine.init(300.0, 150.0, 60);
		assert_eq!(engine.starfield().stars.len(), 10);
		assert!(engine.particles().is_empty());
		engine.on_pointer_move(100.0, 100.0);
		let mut surface = RecordingSurface::default();
		engine.step(&mut surface);
		assert_eq!(engine.starfield().dots.len(), 1);
		// 10 stars and 1 trail dot
		assert_eq!(surface.circles(), 11);
	}
}
