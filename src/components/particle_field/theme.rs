//! Visual theming for the particle field.
//!
//! Provides the colour type and the stroke/fill styles used by the renderer.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with opacity `a`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour, opacity replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS colour string: `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Preset name accepted by [`Theme::named`].
	pub name: &'static str,
	/// Particle fill colour.
	pub particle: Color,
	/// Connection line colour.
	pub link: Color,
	/// Connection line width in pixels.
	pub link_width: f64,
	/// Colour at the centre of the pointer glow; fades to transparent.
	pub glow: Color,
}

impl Theme {
	/// Deep green on a light page (default)
	pub fn forest() -> Self {
		let base = Color::rgb(30, 86, 49);
		Self {
			name: "forest",
			particle: base,
			link: base.with_alpha(0.15),
			link_width: 0.5,
			glow: base.with_alpha(0.3),
		}
	}

	/// Pale blue for dark backgrounds
	pub fn midnight() -> Self {
		let base = Color::rgb(140, 160, 200);
		Self {
			name: "midnight",
			particle: base,
			link: base.with_alpha(0.2),
			link_width: 0.6,
			glow: base.with_alpha(0.25),
		}
	}

	/// Look up a preset by name.
	pub fn named(name: &str) -> Option<Self> {
		match name {
			"forest" => Some(Self::forest()),
			"midnight" => Some(Self::midnight()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::forest()
	}
}
