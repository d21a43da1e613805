//! Per-frame update rule for the particle pool.
//!
//! Particles inside the influence radius are pushed away from the pointer with
//! a linear falloff; everything else relaxes toward its origin by a fixed
//! fraction of the remaining offset. There is no velocity term, so relaxation
//! never overshoots.

use super::config::FieldConfig;
use super::particles::Particle;
use super::pointer::PointerState;
use super::types::Point;

/// Linear falloff: 1 at the pointer, 0 at `radius` and beyond.
pub fn falloff(distance: f64, radius: f64) -> f64 {
	if radius <= 0.0 || distance >= radius {
		0.0
	} else {
		(radius - distance) / radius
	}
}

/// Displacement magnitude applied in one frame to a particle `distance` away
/// from the pointer.
pub fn displacement(distance: f64, responsiveness: f64, config: &FieldConfig) -> f64 {
	falloff(distance, config.influence_radius) * responsiveness
}

/// Advance every particle by one frame.
pub fn step(particles: &mut [Particle], pointer: &PointerState, config: &FieldConfig) {
	for p in particles {
		update_particle(p, pointer, config);
	}
}

/// Advance a single particle by one frame.
pub fn update_particle(p: &mut Particle, pointer: &PointerState, config: &FieldConfig) {
	if !pointer.inside {
		relax(p, config);
		p.size = p.base_size;
		return;
	}

	let d = p.position.distance(pointer.position);
	if d < config.influence_radius {
		let force = falloff(d, config.influence_radius);
		// Coincident with the pointer: no direction to push along.
		if d > 0.0 {
			let push = force * p.responsiveness / d;
			p.position.x += (p.position.x - pointer.position.x) * push;
			p.position.y += (p.position.y - pointer.position.y) * push;
		}
		p.size = p.base_size + force * config.size_boost;
	} else {
		p.size = (p.size - config.size_decay).max(p.base_size);
		relax(p, config);
	}
}

fn relax(p: &mut Particle, config: &FieldConfig) {
	p.position = Point::new(
		relax_axis(p.position.x, p.origin.x, config),
		relax_axis(p.position.y, p.origin.y, config),
	);
}

fn relax_axis(position: f64, origin: f64, config: &FieldConfig) -> f64 {
	let delta = origin - position;
	if delta.abs() < config.snap_epsilon {
		origin
	} else {
		position + delta * config.damping
	}
}

/// Frames after which [`frames_to_settle`] gives up.
pub const MAX_SETTLE_FRAMES: usize = 100_000;

/// Upper bound on frames needed for an axis offset of `offset` to snap home
/// once the pointer is gone.
///
/// Replays the relax recurrence and adds one frame for rounding differences at
/// origins away from zero. `None` when the offset never snaps: a zero snap
/// epsilon, or more than [`MAX_SETTLE_FRAMES`] frames.
pub fn frames_to_settle(offset: f64, config: &FieldConfig) -> Option<usize> {
	let offset = offset.abs();
	if offset == 0.0 {
		return Some(0);
	}
	if config.snap_epsilon <= 0.0 || !offset.is_finite() {
		return None;
	}

	let mut position = offset;
	for frame in 1..=MAX_SETTLE_FRAMES {
		position = relax_axis(position, 0.0, config);
		if position == 0.0 {
			return Some(frame + 1);
		}
	}
	None
}
