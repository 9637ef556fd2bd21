//! Leptos component wrapping the particle banner canvas.
//!
//! The component sizes the canvas from the viewport, wires pointer and touch
//! handlers into the engine, and drives it with `requestAnimationFrame`. The
//! frame loop and the window `resize` listener are both released when the
//! component is cleaned up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::engine::BannerEngine;
use super::error::BannerError;
use super::types::BannerConfig;
use super::viewport::Viewport;

type SharedEngine = Rc<RefCell<BannerEngine>>;
type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancellable `requestAnimationFrame` loop around a shared engine.
#[derive(Clone)]
struct AnimationLoop {
	engine: SharedEngine,
	callback: SharedCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
	fn new(engine: SharedEngine) -> Self {
		Self {
			engine,
			callback: Rc::new(RefCell::new(None)),
			pending: Rc::new(Cell::new(None)),
		}
	}

	fn is_running(&self) -> bool {
		self.engine.borrow().is_running()
	}

	fn start(&self, ctx: CanvasRenderingContext2d) -> Result<(), BannerError> {
		self.engine.borrow_mut().start();

		let this = self.clone();
		let mut ctx = ctx;
		*self.callback.borrow_mut() = Some(Closure::new(move || {
			this.pending.set(None);
			let again = this.engine.borrow_mut().frame(&mut ctx);
			if again {
				if let Err(e) = this.request() {
					error!("canvas-banner: could not schedule frame: {e}");
				}
			}
		}));
		self.request()
	}

	fn request(&self) -> Result<(), BannerError> {
		let window = web_sys::window().ok_or(BannerError::NoWindow)?;
		if let Some(ref cb) = *self.callback.borrow() {
			let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
			self.pending.set(Some(id));
		}
		Ok(())
	}

	/// Stop the engine, cancel the pending frame, and drop the frame closure.
	fn stop(&self) {
		self.engine.borrow_mut().stop();
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

/// Read the viewport measurements the sizing rule needs.
fn measure(window: &Window, canvas: &HtmlCanvasElement) -> Result<Viewport, BannerError> {
	let display_width = window.screen()?.width()? as f64;
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	let container_width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.unwrap_or_else(|| canvas.client_width() as f64);
	Ok(Viewport {
		display_width,
		height,
		container_width,
	})
}

/// Re-measure, re-seed the engine, and resize the canvas element to match.
fn apply_viewport(
	window: &Window,
	canvas: &HtmlCanvasElement,
	engine: &SharedEngine,
) -> Result<(), BannerError> {
	let viewport = measure(window, canvas)?;
	let size = engine.borrow_mut().on_resize(viewport);
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);
	Ok(())
}

fn mount(
	canvas: &HtmlCanvasElement,
	engine: &SharedEngine,
	animation: &AnimationLoop,
	resize_cb: &SharedCallback,
) -> Result<(), BannerError> {
	let window = web_sys::window().ok_or(BannerError::NoWindow)?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(BannerError::NoContext)?
		.dyn_into()
		.map_err(|_| BannerError::ContextCast)?;

	apply_viewport(&window, canvas, engine)?;

	let (engine_resize, canvas_resize) = (engine.clone(), canvas.clone());
	*resize_cb.borrow_mut() = Some(Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		if let Err(e) = apply_viewport(&win, &canvas_resize, &engine_resize) {
			warn!("canvas-banner: resize failed: {e}");
		}
	}));
	if let Some(ref cb) = *resize_cb.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	animation.start(ctx)
}

/// Convert client coordinates into canvas surface coordinates.
fn surface_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	client_x: f64,
	client_y: f64,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((client_x - rect.left(), client_y - rect.top()))
}

/// Renders the animated particle background on a canvas.
///
/// The canvas fills its parent's width; its height follows the viewport
/// breakpoint rule and is recomputed on every window resize, which also
/// re-seeds the particles. Pass `config` to override the defaults.
#[component]
pub fn ParticleBanner(#[prop(optional)] config: Option<BannerConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let engine: SharedEngine = Rc::new(RefCell::new(BannerEngine::new(
		config.unwrap_or_default(),
	)));
	let animation = AnimationLoop::new(engine.clone());
	let resize_cb: SharedCallback = Rc::new(RefCell::new(None));
	let (engine_init, animation_init, resize_cb_init) =
		(engine.clone(), animation.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animation_init.is_running() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = mount(&canvas, &engine_init, &animation_init, &resize_cb_init) {
			error!("canvas-banner: mount failed: {e}");
		}
	});

	let teardown = StoredValue::new_local((animation, resize_cb));
	on_cleanup(move || {
		let _ = teardown.try_with_value(|(animation, resize_cb)| {
			animation.stop();
			if let (Some(window), Some(cb)) = (web_sys::window(), resize_cb.borrow_mut().take()) {
				let listener: &js_sys::Function = cb.as_ref().unchecked_ref();
				let _ = window.remove_event_listener_with_callback("resize", listener);
			}
		});
	});

	let engine_mm = engine.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y)) = surface_point(canvas_ref, ev.client_x() as f64, ev.client_y() as f64)
		{
			engine_mm.borrow_mut().on_pointer_move(x, y);
		}
	};

	let engine_ml = engine.clone();
	let on_mouseleave = move |_: MouseEvent| {
		engine_ml.borrow_mut().on_pointer_leave();
	};

	let engine_tm = engine.clone();
	let on_touchmove = move |ev: TouchEvent| {
		ev.prevent_default();
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		if let Some((x, y)) =
			surface_point(canvas_ref, touch.client_x() as f64, touch.client_y() as f64)
		{
			engine_tm.borrow_mut().on_touch_move(x, y);
		}
	};

	let engine_te = engine;
	let on_touchend = move |_: TouchEvent| {
		engine_te.borrow_mut().on_touch_end();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-banner-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="display: block; width: 100%; touch-action: none;"
		/>
	}
}
