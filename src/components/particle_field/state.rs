//! Field state for one mounted component.
//!
//! Bundles the surface size, the pointer sample and the particle pool with the
//! configuration they are simulated under. Created once when the component
//! mounts and mutated in place by event handlers and the frame loop.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::particles::{Particle, seed_particles};
use super::physics;
use super::pointer::PointerState;
use super::surface::SurfaceSize;
use super::theme::Theme;

/// Everything one mounted field simulates and draws.
pub struct FieldState {
	/// Current drawing-surface size.
	pub surface: SurfaceSize,
	/// Latest pointer sample.
	pub pointer: PointerState,
	/// The pool, in draw order. Its length is fixed at creation.
	pub particles: Vec<Particle>,
	/// Parameters the pool is simulated under.
	pub config: FieldConfig,
	/// Colours used when drawing.
	pub theme: Theme,
}

impl FieldState {
	/// Seed a new field. `entropy` is used only when the config carries no seed.
	pub fn new(config: FieldConfig, theme: Theme, surface: SurfaceSize, entropy: u64) -> Self {
		let seed = config.seed.unwrap_or(entropy);
		let mut rng = SmallRng::seed_from_u64(seed);
		let particles = seed_particles(&config, theme.particle, surface, &mut rng);
		debug!(
			"particle-field: seeded {} particles on {}x{} (seed {})",
			particles.len(),
			surface.width,
			surface.height,
			seed
		);

		Self {
			surface,
			pointer: PointerState::default(),
			particles,
			config,
			theme,
		}
	}

	/// Run the update rule over the whole pool for one frame.
	pub fn advance(&mut self) {
		physics::step(&mut self.particles, &self.pointer, &self.config);
	}

	/// Update surface dimensions. Particles and their origins are left as-is.
	pub fn resize(&mut self, surface: SurfaceSize) {
		self.surface.resize(surface.width, surface.height);
	}
}
