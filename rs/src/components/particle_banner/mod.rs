//! Animated particle background for a page banner.
//!
//! Renders a continuously running particle simulation on an HTML canvas:
//! - Particles drift and bounce off the canvas edges
//! - The pointer (mouse or touch) pushes nearby particles away
//! - Close pairs are joined by lines that fade with distance
//! - A window resize re-sizes the canvas and re-seeds the population
//!
//! The simulation itself ([`BannerEngine`]) draws through the [`Surface`]
//! trait and knows nothing about the DOM, so it runs the same against a
//! canvas context or an in-memory test surface.
//!
//! # Example
//!
//! ```ignore
//! use canvas_banner::{BannerConfig, ParticleBanner};
//!
//! let config = BannerConfig { particle_count: 80, ..BannerConfig::default() };
//! view! { <ParticleBanner config=config /> }
//! ```

mod component;
mod engine;
mod error;
mod particles;
mod pointer;
mod render;
mod surface;
pub mod theme;
mod trail;
mod types;
mod viewport;

pub use component::ParticleBanner;
pub use engine::BannerEngine;
pub use error::{BannerError, SurfaceError};
pub use particles::Particle;
pub use pointer::PointerState;
pub use surface::Surface;
pub use theme::Theme;
pub use types::{BannerConfig, Effect};
pub use viewport::{SurfaceSize, Viewport};
