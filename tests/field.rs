//! End-to-end behaviour of the particle field through its public API.

// Integration tests only touch a slice of the crate's deps.
#![allow(unused_crate_dependencies)]

use std::cell::RefCell;
use std::rc::Rc;

use particle_field::components::particle_field::physics::frames_to_settle;
use particle_field::components::particle_field::{
	CancelToken, Color, DrawSurface, FieldConfig, FieldHandle, FieldState, FrameLoop, Particle,
	Point, SurfaceSize, Theme, connections,
};

/// Counts draw calls by kind.
#[derive(Default)]
struct Counter {
	clears: usize,
	circles: usize,
	lines: Vec<(Point, Point)>,
	glows: usize,
}

impl DrawSurface for Counter {
	fn clear(&mut self, _width: f64, _height: f64) {
		self.clears += 1;
	}

	fn fill_circle(&mut self, _center: Point, _radius: f64, _color: Color) {
		self.circles += 1;
	}

	fn line(&mut self, from: Point, to: Point, _color: Color, _width: f64) {
		self.lines.push((from, to));
	}

	fn radial_glow(&mut self, _center: Point, _inner: f64, _outer: f64, _stops: &[(f64, Color)]) {
		self.glows += 1;
	}
}

fn field_800x600(seed: u64) -> FieldState {
	let config = FieldConfig {
		seed: Some(seed),
		..FieldConfig::default()
	};
	FieldState::new(config, Theme::default(), SurfaceSize::new(800, 600), 0)
}

#[test]
fn test_pointer_enter_repels_nearby_particle() {
	let mut state = field_800x600(2024);
	assert_eq!(state.particles.len(), 150);

	let probe = Particle::at_rest(Point::new(410.0, 305.0), 2.0, 25.0, state.theme.particle);
	state.particles[0] = probe;
	let pointer = Point::new(400.0, 300.0);
	let before: Vec<f64> = state
		.particles
		.iter()
		.map(|p| p.position.distance(pointer))
		.collect();

	state.pointer.moved(400.0, 300.0, 0.0, 0.0);
	state.pointer.enter();
	state.advance();

	let p = &state.particles[0];
	assert!(p.position.distance(pointer) > before[0]);
	assert!(p.size > p.base_size);

	for (p, d) in state.particles.iter().zip(&before) {
		if *d > 0.0 && *d < 100.0 {
			assert!(p.position.distance(pointer) > *d);
			assert!(p.size > p.base_size);
		}
	}
}

#[test]
fn test_particles_return_after_pointer_leaves() {
	let mut state = field_800x600(7);
	state.particles[0] = Particle::at_rest(Point::new(410.0, 305.0), 2.0, 39.0, state.theme.particle);

	state.pointer.moved(400.0, 300.0, 0.0, 0.0);
	state.pointer.enter();
	state.advance();
	assert!(state.particles[0].offset() > 1.0);

	state.pointer.leave();
	for _ in 0..120 {
		state.advance();
	}
	for p in &state.particles {
		assert!(p.offset() < 1.0, "particle {:?} did not settle", p.origin);
		assert_eq!(p.size, p.base_size);
	}
}

#[test]
fn test_long_hold_settles_within_bound() {
	let mut state = field_800x600(99);
	state.pointer.enter();
	for frame in 0..90 {
		let x = 100.0 + frame as f64 * 6.0;
		state.pointer.moved(x, 300.0, 0.0, 0.0);
		state.advance();
		assert!(state.particles.iter().all(|p| p.size >= p.base_size));
	}
	state.pointer.leave();

	let worst = state
		.particles
		.iter()
		.map(|p| {
			let dx = (p.position.x - p.origin.x).abs();
			let dy = (p.position.y - p.origin.y).abs();
			dx.max(dy)
		})
		.fold(0.0, f64::max);
	let frames = frames_to_settle(worst, &state.config).expect("default config settles");
	for _ in 0..frames {
		state.advance();
	}
	assert!(state.particles.iter().all(|p| p.position == p.origin));
}

#[test]
fn test_negative_responsiveness_never_pulls_toward_pointer() {
	let config = FieldConfig::from_json(
		r#"{ "responsiveness_min": -40, "responsiveness_max": -10, "seed": 12 }"#,
	)
	.unwrap();
	let mut state = FieldState::new(config, Theme::default(), SurfaceSize::new(800, 600), 0);
	let pointer = Point::new(400.0, 300.0);
	state.pointer.moved(pointer.x, pointer.y, 0.0, 0.0);
	state.pointer.enter();

	for _ in 0..30 {
		let before: Vec<f64> = state
			.particles
			.iter()
			.map(|p| p.position.distance(pointer))
			.collect();
		state.advance();
		for (p, d) in state.particles.iter().zip(&before) {
			assert!(p.position.distance(pointer) >= *d);
		}
	}
}

#[test]
fn test_rendered_links_match_pair_distances() {
	let mut state = field_800x600(31);
	state.pointer.moved(250.0, 250.0, 0.0, 0.0);
	state.pointer.enter();

	let token = CancelToken::new();
	let _handle = FieldHandle::new(token.clone());
	let shared = Rc::new(RefCell::new(state));
	let mut frame_loop = FrameLoop::new(shared.clone(), token);
	let mut counter = Counter::default();
	assert!(frame_loop.run_frame(&mut counter));

	let state = shared.borrow();
	let radius = state.config.connection_radius;
	let mut expected = 0;
	for i in 0..state.particles.len() {
		for j in (i + 1)..state.particles.len() {
			if state.particles[i].position.distance(state.particles[j].position) < radius {
				expected += 1;
			}
		}
	}

	assert_eq!(counter.clears, 1);
	assert_eq!(counter.glows, 1);
	assert_eq!(counter.circles, 150);
	assert_eq!(counter.lines.len(), expected);
	assert_eq!(connections(&state.particles, radius).len(), expected);
	assert!(counter.lines.iter().all(|(a, b)| a.distance(*b) < radius));
}

#[test]
fn test_resize_preserves_pool() {
	let mut state = field_800x600(5);
	let origins: Vec<Point> = state.particles.iter().map(|p| p.origin).collect();

	state.resize(SurfaceSize::new(400, 300));
	assert_eq!(state.surface, SurfaceSize::new(400, 300));
	assert_eq!(state.particles.len(), 150);
	// Origins are not rescaled to the new bounds.
	assert!(
		state
			.particles
			.iter()
			.map(|p| p.origin)
			.eq(origins.iter().copied())
	);
}

#[test]
fn test_cancelled_loop_stops_drawing() {
	let token = CancelToken::new();
	let mut handle = FieldHandle::new(token.clone());
	let mut frame_loop = FrameLoop::new(Rc::new(RefCell::new(field_800x600(1))), token);
	let mut counter = Counter::default();

	assert!(frame_loop.run_frame(&mut counter));
	handle.cancel();
	assert!(!frame_loop.run_frame(&mut counter));
	assert_eq!(counter.clears, 1);
}
