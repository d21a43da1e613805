//! Pointer tracking in surface-local coordinates.

use super::types::Point;

/// Last known pointer sample relative to the surface.
///
/// Reflects the most recent raw event; no smoothing is applied here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	/// Last position, surface-local.
	pub position: Point,
	/// Whether the pointer is currently over the surface.
	pub inside: bool,
}

impl PointerState {
	/// Record a move given viewport coordinates and the surface's viewport offset.
	pub fn moved(&mut self, client_x: f64, client_y: f64, offset_left: f64, offset_top: f64) {
		self.position = Point::new(client_x - offset_left, client_y - offset_top);
	}

	/// Pointer is over the surface.
	pub fn enter(&mut self) {
		self.inside = true;
	}

	/// Pointer left the surface. Position is kept so the last sample stays inspectable.
	pub fn leave(&mut self) {
		self.inside = false;
	}
}
