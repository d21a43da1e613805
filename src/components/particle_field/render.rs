//! Frame rendering for the particle field.
//!
//! Drawing goes through [`DrawSurface`] so the frame layout can be checked
//! without a browser. Each frame draws, in order:
//! 1. a cleared surface
//! 2. the pointer glow (only while the pointer is inside)
//! 3. every particle as a filled circle
//! 4. a link for every particle pair closer than the connection radius

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::state::FieldState;
use super::theme::Color;
use super::types::Point;

/// The drawing operations the renderer needs from its host.
pub trait DrawSurface {
	/// Clear the `width` by `height` rectangle at the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle.
	fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
	/// Stroke a straight segment.
	fn line(&mut self, from: Point, to: Point, color: Color, width: f64);
	/// Fill a disc of `outer` radius with a radial gradient through `stops`.
	fn radial_glow(&mut self, center: Point, inner: f64, outer: f64, stops: &[(f64, Color)]);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, PI * 2.0);
		self.close_path();
		self.fill();
	}

	fn line(&mut self, from: Point, to: Point, color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
	}

	fn radial_glow(&mut self, center: Point, inner: f64, outer: f64, stops: &[(f64, Color)]) {
		let Ok(gradient) =
			self.create_radial_gradient(center.x, center.y, inner, center.x, center.y, outer)
		else {
			return;
		};
		for (offset, color) in stops {
			let _ = gradient.add_color_stop(*offset as f32, &color.to_css());
		}

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.begin_path();
		let _ = self.arc(center.x, center.y, outer, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Index pairs `(i, j)` with `i < j` whose particles are closer than `radius`.
pub fn connections(particles: &[Particle], radius: f64) -> Vec<(usize, usize)> {
	let mut pairs = Vec::new();
	for (i, a) in particles.iter().enumerate() {
		for (j, b) in particles.iter().enumerate().skip(i + 1) {
			if a.position.distance(b.position) < radius {
				pairs.push((i, j));
			}
		}
	}
	pairs
}

/// Draws the current field state. Does not advance the simulation.
pub fn render<S: DrawSurface + ?Sized>(state: &FieldState, surface: &mut S) {
	let (width, height) = state.surface.as_f64();
	surface.clear(width, height);

	if state.pointer.inside {
		draw_glow(state, surface);
	}

	for p in &state.particles {
		surface.fill_circle(p.position, p.size, p.color);
	}

	let theme = &state.theme;
	for (i, j) in connections(&state.particles, state.config.connection_radius) {
		surface.line(
			state.particles[i].position,
			state.particles[j].position,
			theme.link,
			theme.link_width,
		);
	}
}

fn draw_glow<S: DrawSurface + ?Sized>(state: &FieldState, surface: &mut S) {
	let glow = state.theme.glow;
	surface.radial_glow(
		state.pointer.position,
		state.config.glow_inner_radius,
		state.config.glow_radius,
		&[(0.0, glow), (1.0, glow.with_alpha(0.0))],
	);
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::particle_field::config::FieldConfig;
	use crate::components::particle_field::surface::SurfaceSize;
	use crate::components::particle_field::theme::Theme;

	/// One recorded drawing call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Clear(f64, f64),
		Circle(Point, f64),
		Line(Point, Point),
		Glow(Point, f64, f64),
	}

	/// Records draw calls instead of producing pixels.
	#[derive(Default)]
	pub struct Recorder {
		pub calls: Vec<DrawCall>,
	}

	impl DrawSurface for Recorder {
		fn clear(&mut self, width: f64, height: f64) {
			self.calls.push(DrawCall::Clear(width, height));
		}

		fn fill_circle(&mut self, center: Point, radius: f64, _color: Color) {
			self.calls.push(DrawCall::Circle(center, radius));
		}

		fn line(&mut self, from: Point, to: Point, _color: Color, _width: f64) {
			self.calls.push(DrawCall::Line(from, to));
		}

		fn radial_glow(&mut self, center: Point, inner: f64, outer: f64, _stops: &[(f64, Color)]) {
			self.calls.push(DrawCall::Glow(center, inner, outer));
		}
	}

	fn state_with(points: &[(f64, f64)]) -> FieldState {
		let config = FieldConfig {
			count: 0,
			..FieldConfig::default()
		};
		let theme = Theme::default();
		let mut state = FieldState::new(config, theme.clone(), SurfaceSize::new(800, 600), 0);
		state.particles = points
			.iter()
			.map(|&(x, y)| Particle::at_rest(Point::new(x, y), 2.0, 20.0, theme.particle))
			.collect();
		state
	}

	#[test]
	fn test_connections_exact_pairs() {
		let state = state_with(&[(0.0, 0.0), (50.0, 0.0), (200.0, 0.0), (0.0, 79.9), (0.0, 80.0)]);
		let pairs = connections(&state.particles, 80.0);
		// (0,4) sits exactly on the radius and is excluded
		assert_eq!(pairs, vec![(0, 1), (0, 3), (3, 4)]);
	}

	#[test]
	fn test_connections_each_pair_once() {
		let points: Vec<(f64, f64)> = (0..6).map(|i| (i as f64, 0.0)).collect();
		let state = state_with(&points);
		let pairs = connections(&state.particles, 80.0);
		assert_eq!(pairs.len(), 15);
		assert!(pairs.iter().all(|&(i, j)| i < j));
	}

	#[test]
	fn test_frame_order_without_pointer() {
		let state = state_with(&[(10.0, 10.0), (20.0, 10.0)]);
		let mut rec = Recorder::default();
		render(&state, &mut rec);

		assert_eq!(
			rec.calls,
			vec![
				DrawCall::Clear(800.0, 600.0),
				DrawCall::Circle(Point::new(10.0, 10.0), 2.0),
				DrawCall::Circle(Point::new(20.0, 10.0), 2.0),
				DrawCall::Line(Point::new(10.0, 10.0), Point::new(20.0, 10.0)),
			]
		);
	}

	#[test]
	fn test_glow_drawn_only_when_inside() {
		let mut state = state_with(&[(10.0, 10.0)]);
		state.pointer.moved(400.0, 300.0, 0.0, 0.0);
		state.pointer.enter();

		let mut rec = Recorder::default();
		render(&state, &mut rec);
		assert_eq!(rec.calls[1], DrawCall::Glow(Point::new(400.0, 300.0), 5.0, 100.0));

		state.pointer.leave();
		let mut rec = Recorder::default();
		render(&state, &mut rec);
		assert!(!rec.calls.iter().any(|c| matches!(c, DrawCall::Glow(..))));
	}
}
