//! Drawing for both banner effects.
//!
//! Passes run in z-order:
//! 1. Clear and gradient wash
//! 2. Particles (or stars and trail dots)
//! 3. Connection lines (or trail polylines)
//!
//! A primitive the surface rejects is logged and skipped; the rest of the
//! frame still draws.

use log::debug;

use super::error::SurfaceError;
use super::particles::ParticleSystem;
use super::surface::Surface;
use super::theme::{Color, Theme};
use super::trail::Starfield;

fn attempt(result: Result<(), SurfaceError>) {
	if let Err(e) = result {
		debug!("canvas-banner: {e}");
	}
}

/// Alpha of a connection line: full `opacity` at distance 0, fading to 0 at `max`.
pub fn link_alpha(distance: f64, max: f64, opacity: f64) -> f64 {
	if max <= 0.0 {
		return 0.0;
	}
	(opacity * (1.0 - distance / max)).clamp(0.0, 1.0)
}

pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, width: f64, height: f64, theme: &Theme) {
	attempt(surface.clear_rect(0.0, 0.0, width, height));
	attempt(surface.fill_gradient_rect(0.0, 0.0, width, height, &theme.background.offsets()));
}

pub fn draw_particles<S: Surface + ?Sized>(surface: &mut S, system: &ParticleSystem, theme: &Theme) {
	for p in &system.particles {
		attempt(surface.fill_circle(p.x, p.y, p.radius, theme.particle.fade(p.opacity)));
	}
}

/// Connection pass: one line per close pair, never a particle to itself.
pub fn draw_links<S: Surface + ?Sized>(
	surface: &mut S,
	system: &ParticleSystem,
	link_distance: f64,
	theme: &Theme,
) {
	let style = &theme.link;
	for link in system.links(link_distance) {
		let (a, b) = (&system.particles[link.a], &system.particles[link.b]);
		let alpha = link_alpha(link.distance, link_distance, style.opacity);
		attempt(surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			style.color.with_alpha(alpha),
			style.width,
		));
	}
}

pub fn draw_starfield<S: Surface + ?Sized>(surface: &mut S, field: &Starfield) {
	for star in &field.stars {
		attempt(surface.fill_circle(
			star.x,
			star.y,
			star.radius,
			Color::WHITE.with_alpha(star.alpha),
		));
	}

	for (idx, dot) in field.dots.iter().enumerate() {
		attempt(surface.fill_circle(dot.x, dot.y, dot.radius, Color::WHITE.with_alpha(dot.alpha)));
		attempt(surface.stroke_polyline(
			&field.trail_points(idx),
			Color::WHITE.with_alpha(dot.alpha / 4.0),
			1.0,
		));
	}
}
