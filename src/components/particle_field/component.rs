//! Leptos component and browser wiring for the particle field.
//!
//! [`start`] sizes the canvas, seeds the field, attaches pointer and resize
//! listeners and kicks off the `requestAnimationFrame` chain. Everything it
//! attaches is registered on the returned [`FieldHandle`], so cancelling the
//! handle leaves nothing running. The component cancels its handle on cleanup.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent,
	Window,
};

use super::config::FieldConfig;
use super::error::SetupError;
use super::scheduler::{CancelToken, FieldHandle, FrameLoop};
use super::state::FieldState;
use super::surface::{SizingMode, SurfaceSize};
use super::theme::Theme;

/// Measure the canvas according to `sizing`.
fn measure(window: &Window, canvas: &HtmlCanvasElement, sizing: SizingMode) -> SurfaceSize {
	let viewport = match (window.inner_width(), window.inner_height()) {
		(Ok(w), Ok(h)) => w.as_f64().zip(h.as_f64()),
		_ => None,
	};
	let parent = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64));
	sizing.resolve(viewport, parent)
}

fn apply_size(canvas: &HtmlCanvasElement, size: SurfaceSize) {
	canvas.set_width(size.width);
	canvas.set_height(size.height);
}

/// Attach `callback` to `event` on `target`; removal is registered on `handle`.
fn listen(
	target: &EventTarget,
	event: &'static str,
	handle: &mut FieldHandle,
	callback: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
	let closure = Closure::<dyn FnMut(Event)>::new(callback);
	target
		.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
		.map_err(|_| SetupError::Listener(event))?;

	let target = target.clone();
	handle.on_cancel(move || {
		let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
	});
	Ok(())
}

/// Client coordinates of the first active touch.
fn first_touch(ev: &Event) -> Option<(f64, f64)> {
	let touch = ev.dyn_ref::<TouchEvent>()?.touches().get(0)?;
	Some((touch.client_x() as f64, touch.client_y() as f64))
}

/// Start the particle field on `canvas`.
///
/// Fails without side effects left behind: on error every listener attached so
/// far is removed again when the partially built handle is dropped.
pub fn start(
	canvas: &HtmlCanvasElement,
	sizing: SizingMode,
	config: FieldConfig,
	theme: Theme,
) -> Result<FieldHandle, SetupError> {
	let window = web_sys::window().ok_or(SetupError::NoWindow)?;
	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|c| c.dyn_into().ok())
		.ok_or(SetupError::ContextUnavailable)?;

	let size = measure(&window, canvas, sizing);
	apply_size(canvas, size);

	let entropy = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let state = Rc::new(RefCell::new(FieldState::new(
		config.sanitized(),
		theme,
		size,
		entropy,
	)));
	let token = CancelToken::new();
	let mut handle = FieldHandle::new(token.clone());

	let target: &EventTarget = canvas.as_ref();

	let (state_mm, canvas_mm) = (state.clone(), canvas.clone());
	listen(target, "mousemove", &mut handle, move |ev| {
		let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
			return;
		};
		let rect = canvas_mm.get_bounding_client_rect();
		state_mm.borrow_mut().pointer.moved(
			ev.client_x() as f64,
			ev.client_y() as f64,
			rect.left(),
			rect.top(),
		);
	})?;

	let state_me = state.clone();
	listen(target, "mouseenter", &mut handle, move |_| {
		state_me.borrow_mut().pointer.enter();
	})?;

	let state_ml = state.clone();
	listen(target, "mouseleave", &mut handle, move |_| {
		state_ml.borrow_mut().pointer.leave();
	})?;

	for event in ["touchstart", "touchmove"] {
		let (state_tm, canvas_tm) = (state.clone(), canvas.clone());
		listen(target, event, &mut handle, move |ev| {
			let Some((x, y)) = first_touch(&ev) else {
				return;
			};
			let rect = canvas_tm.get_bounding_client_rect();
			let mut s = state_tm.borrow_mut();
			s.pointer.moved(x, y, rect.left(), rect.top());
			s.pointer.enter();
		})?;
	}

	for event in ["touchend", "touchcancel"] {
		let state_te = state.clone();
		listen(target, event, &mut handle, move |_| {
			state_te.borrow_mut().pointer.leave();
		})?;
	}

	let (state_rs, canvas_rs, window_rs) = (state.clone(), canvas.clone(), window.clone());
	let window_target: &EventTarget = window.as_ref();
	listen(window_target, "resize", &mut handle, move |_| {
		let size = measure(&window_rs, &canvas_rs, sizing);
		apply_size(&canvas_rs, size);
		state_rs.borrow_mut().resize(size);
		debug!("particle-field: resized to {}x{}", size.width, size.height);
	})?;

	let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (pending_cancel, animate_cancel, window_cancel) =
		(pending.clone(), animate.clone(), window.clone());
	handle.on_cancel(move || {
		if let Some(id) = pending_cancel.take() {
			let _ = window_cancel.cancel_animation_frame(id);
		}
		// Breaks the closure's reference cycle through `animate`.
		let closure = animate_cancel.borrow_mut().take();
		drop(closure);
	});

	let mut frame_loop = FrameLoop::new(state, token);
	let (animate_inner, pending_inner, window_inner) =
		(animate.clone(), pending.clone(), window.clone());
	*animate.borrow_mut() = Some(Closure::new(move || {
		pending_inner.set(None);
		if !frame_loop.run_frame(&mut ctx) {
			return;
		}
		if let Some(ref cb) = *animate_inner.borrow() {
			pending_inner.set(
				window_inner
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok(),
			);
		}
	}));

	let first = match *animate.borrow() {
		Some(ref cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
		None => None,
	};
	pending.set(Some(first.ok_or(SetupError::AnimationFrame)?));

	info!(
		"particle-field: started on {}x{} canvas",
		size.width, size.height
	);
	Ok(handle)
}

/// Renders the interactive particle field on a canvas element.
///
/// The canvas sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and follow window resizes.
/// Explicit `width`/`height` override automatic sizing. If the canvas has no
/// 2D context the component renders an empty canvas and logs a warning.
#[component]
pub fn ParticleFieldCanvas(
	/// Simulation parameters. Defaults apply when omitted.
	#[prop(optional)]
	config: FieldConfig,
	/// Fill the viewport instead of the parent element.
	#[prop(default = false)]
	fullscreen: bool,
	/// Fixed width in CSS pixels.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed height in CSS pixels.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handle = StoredValue::new_local(None::<FieldHandle>);
	let sizing = if fullscreen {
		SizingMode::Fullscreen
	} else {
		SizingMode::Parent { width, height }
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		handle.update_value(|h| {
			if let Some(mut previous) = h.take() {
				previous.cancel();
			}
		});

		let theme = Theme::named(&config.theme).unwrap_or_else(|| {
			warn!("particle-field: unknown theme {:?}, using default", config.theme);
			Theme::default()
		});

		match start(&canvas, sizing, config.clone(), theme) {
			Ok(h) => handle.set_value(Some(h)),
			Err(e) => warn!("particle-field: {e}; field disabled"),
		}
	});

	on_cleanup(move || {
		handle.try_update_value(|h| {
			if let Some(mut h) = h.take() {
				h.cancel();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block;"
		/>
	}
}
