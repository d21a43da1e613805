//! Tunable constants for the particle field.
//!
//! Everything the simulation and renderer need that is not derived state lives
//! here. The host page may override any subset of fields with a JSON document;
//! omitted fields keep their defaults.

use serde::Deserialize;

/// Upper limit on `count`. Links are checked pairwise every frame, so the cost
/// grows quadratically with the pool.
pub const MAX_PARTICLES: usize = 2000;

/// Simulation and rendering parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles seeded at mount, at most [`MAX_PARTICLES`].
	pub count: usize,
	/// Minimum intrinsic particle radius.
	pub size_min: f64,
	/// Maximum intrinsic particle radius (exclusive).
	pub size_max: f64,
	/// Minimum per-particle repulsion multiplier.
	pub responsiveness_min: f64,
	/// Maximum per-particle repulsion multiplier (exclusive).
	pub responsiveness_max: f64,
	/// Pointer distance below which particles are repelled.
	pub influence_radius: f64,
	/// Particle distance below which a link is drawn.
	pub connection_radius: f64,
	/// Fraction of the remaining offset a relaxing particle covers per frame.
	pub damping: f64,
	/// Per-axis offset below which a relaxing particle snaps to its origin.
	pub snap_epsilon: f64,
	/// Extra radius at full force (pointer right on top of the particle).
	pub size_boost: f64,
	/// Radius lost per frame once outside pointer influence.
	pub size_decay: f64,
	/// Inner radius of the pointer glow gradient.
	pub glow_inner_radius: f64,
	/// Outer radius of the pointer glow.
	pub glow_radius: f64,
	/// Fixed RNG seed for a reproducible layout. Random per mount when unset.
	pub seed: Option<u64>,
	/// Theme preset name (see [`Theme::named`](super::theme::Theme::named)).
	pub theme: String,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 150,
			size_min: 1.0,
			size_max: 4.0,
			responsiveness_min: 10.0,
			responsiveness_max: 40.0,
			influence_radius: 100.0,
			connection_radius: 80.0,
			damping: 0.05,
			snap_epsilon: 0.5,
			size_boost: 3.0,
			size_decay: 0.1,
			glow_inner_radius: 5.0,
			glow_radius: 100.0,
			seed: None,
			theme: "forest".to_string(),
		}
	}
}

impl FieldConfig {
	/// Parse a (partial) JSON config and normalize it.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(json).map(Self::sanitized)
	}

	/// Normalize values that would break the update rule.
	///
	/// Non-finite numbers fall back to defaults, ranges are reordered, radii,
	/// rates and responsiveness are clamped to be non-negative, `damping` to
	/// `(0, 1]` and `count` to [`MAX_PARTICLES`].
	pub fn sanitized(self) -> Self {
		let d = Self::default();
		let (size_min, size_max) = ordered(
			finite_or(self.size_min, d.size_min).max(0.0),
			finite_or(self.size_max, d.size_max).max(0.0),
		);
		let (responsiveness_min, responsiveness_max) = ordered(
			finite_or(self.responsiveness_min, d.responsiveness_min).max(0.0),
			finite_or(self.responsiveness_max, d.responsiveness_max).max(0.0),
		);

		Self {
			count: self.count.min(MAX_PARTICLES),
			size_min,
			size_max,
			responsiveness_min,
			responsiveness_max,
			influence_radius: finite_or(self.influence_radius, d.influence_radius).max(0.0),
			connection_radius: finite_or(self.connection_radius, d.connection_radius).max(0.0),
			damping: finite_or(self.damping, d.damping).clamp(f64::EPSILON, 1.0),
			snap_epsilon: finite_or(self.snap_epsilon, d.snap_epsilon).max(0.0),
			size_boost: finite_or(self.size_boost, d.size_boost).max(0.0),
			size_decay: finite_or(self.size_decay, d.size_decay).max(0.0),
			glow_inner_radius: finite_or(self.glow_inner_radius, d.glow_inner_radius).max(0.0),
			glow_radius: finite_or(self.glow_radius, d.glow_radius).max(0.0),
			..self
		}
	}
}

fn finite_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() { value } else { fallback }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
	if a <= b { (a, b) } else { (b, a) }
}
