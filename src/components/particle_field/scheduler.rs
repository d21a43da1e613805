//! Frame loop and cancellation.
//!
//! The loop is a chain, not a timer: the host requests the next frame only
//! after [`FrameLoop::run_frame`] returns `true`. Cancelling the
//! [`FieldHandle`] makes every later `run_frame` return `false` and runs the
//! registered detachers exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;

use super::render::{self, DrawSurface};
use super::state::FieldState;

/// Shared cancellation flag between a handle and its loop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// A token that is not cancelled yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Mark cancelled. Every clone observes it.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// Whether [`cancel`](Self::cancel) has been called on any clone.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Owner of a running field. Cancels on drop.
pub struct FieldHandle {
	token: CancelToken,
	detachers: Vec<Box<dyn FnOnce()>>,
}

impl FieldHandle {
	/// Handle with no detachers, sharing `token` with its loop.
	pub fn new(token: CancelToken) -> Self {
		Self {
			token,
			detachers: Vec::new(),
		}
	}

	/// Register teardown work (listener removal, pending frame cancellation).
	/// Runs immediately if the handle is already cancelled.
	pub fn on_cancel(&mut self, detach: impl FnOnce() + 'static) {
		if self.token.is_cancelled() {
			detach();
		} else {
			self.detachers.push(Box::new(detach));
		}
	}

	/// Stop scheduling and detach everything. Idempotent.
	pub fn cancel(&mut self) {
		if self.token.is_cancelled() {
			return;
		}
		self.token.cancel();
		let count = self.detachers.len();
		for detach in self.detachers.drain(..) {
			detach();
		}
		info!("particle-field: stopped, {count} hooks detached");
	}

	/// Whether the field has been stopped.
	pub fn is_cancelled(&self) -> bool {
		self.token.is_cancelled()
	}
}

impl Drop for FieldHandle {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// One step of the animation chain: advance, then draw.
pub struct FrameLoop {
	state: Rc<RefCell<FieldState>>,
	token: CancelToken,
	frames: u64,
}

impl FrameLoop {
	/// Loop over `state` that stops once `token` is cancelled.
	pub fn new(state: Rc<RefCell<FieldState>>, token: CancelToken) -> Self {
		Self {
			state,
			token,
			frames: 0,
		}
	}

	/// Render one frame. Returns whether the host should request another.
	pub fn run_frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
		if self.token.is_cancelled() {
			return false;
		}
		let mut state = self.state.borrow_mut();
		state.advance();
		render::render(&state, surface);
		self.frames += 1;
		true
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}
}
