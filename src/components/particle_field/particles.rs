//! The particle pool: plain records seeded once per mount.

use rand::Rng;

use super::config::FieldConfig;
use super::surface::SurfaceSize;
use super::theme::Color;
use super::types::Point;

/// A single simulated particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Current render position.
	pub position: Point,
	/// Rest position the particle relaxes back to.
	pub origin: Point,
	/// Reserved drift; not used by the update rule.
	pub velocity: Point,
	/// Intrinsic radius.
	pub base_size: f64,
	/// Current render radius, never below `base_size`.
	pub size: f64,
	/// Repulsion multiplier ("density").
	pub responsiveness: f64,
	/// Fill colour.
	pub color: Color,
}

impl Particle {
	/// A particle sitting at its origin with its intrinsic size.
	pub fn at_rest(origin: Point, base_size: f64, responsiveness: f64, color: Color) -> Self {
		Self {
			position: origin,
			origin,
			velocity: Point::default(),
			base_size,
			size: base_size,
			responsiveness,
			color,
		}
	}

	/// Distance from the rest position.
	pub fn offset(&self) -> f64 {
		self.position.distance(self.origin)
	}
}

/// Seed `config.count` particles uniformly over the surface.
pub fn seed_particles<R: Rng + ?Sized>(
	config: &FieldConfig,
	color: Color,
	surface: SurfaceSize,
	rng: &mut R,
) -> Vec<Particle> {
	let (width, height) = surface.as_f64();
	let mut particles = Vec::with_capacity(config.count);

	for _ in 0..config.count {
		let origin = Point::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height));
		let base_size = uniform(rng, config.size_min, config.size_max);
		let velocity = Point::new(uniform(rng, -1.0, 1.0), uniform(rng, -1.0, 1.0));
		let responsiveness = uniform(rng, config.responsiveness_min, config.responsiveness_max);

		particles.push(Particle {
			velocity,
			..Particle::at_rest(origin, base_size, responsiveness, color)
		});
	}

	particles
}

/// Uniform sample in `[min, max)`; collapses to `min` for an empty range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
	if max > min {
		rng.random_range(min..max)
	} else {
		min
	}
}
