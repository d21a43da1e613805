//! Drawing-surface dimensions and how they are measured.

/// Current pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
	/// Width in CSS pixels.
	pub width: u32,
	/// Height in CSS pixels.
	pub height: u32,
}

impl SurfaceSize {
	/// Size of `width` by `height` pixels.
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Build from CSS pixel measurements. Negative and NaN values become 0.
	pub fn from_css(width: f64, height: f64) -> Self {
		// `as` saturates: NaN and negatives map to 0.
		Self::new(width as u32, height as u32)
	}

	/// Overwrite both dimensions.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.width = width;
		self.height = height;
	}

	/// True when either side is zero, so nothing is visible.
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// `(width, height)` as floats for drawing math.
	pub fn as_f64(&self) -> (f64, f64) {
		(self.width as f64, self.height as f64)
	}
}

/// How the canvas decides its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizingMode {
	/// Track the window's inner size.
	Fullscreen,
	/// Fill the parent element; explicit dimensions override the measurement.
	Parent {
		/// Fixed width, or `None` to use the parent's.
		width: Option<f64>,
		/// Fixed height, or `None` to use the parent's.
		height: Option<f64>,
	},
}

/// Used when neither the viewport nor the parent can be measured.
const FALLBACK: (f64, f64) = (800.0, 600.0);

impl SizingMode {
	/// Resolve a surface size from whatever the host could measure.
	pub fn resolve(&self, viewport: Option<(f64, f64)>, parent: Option<(f64, f64)>) -> SurfaceSize {
		let (w, h) = match *self {
			SizingMode::Fullscreen => viewport.unwrap_or(FALLBACK),
			SizingMode::Parent { width, height } => {
				let measured = parent.unwrap_or(FALLBACK);
				(width.unwrap_or(measured.0), height.unwrap_or(measured.1))
			}
		};
		SurfaceSize::from_css(w, h)
	}
}
