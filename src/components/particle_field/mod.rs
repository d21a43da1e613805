//! Interactive particle field.
//!
//! Renders a field of particles on an HTML canvas that:
//! - Are pushed away from the pointer with a radial falloff
//! - Relax back to their rest positions once out of reach
//! - Grow while under the pointer and shrink back afterwards
//! - Link up with faint lines when close to each other
//!
//! The simulation ([`FieldState`], [`physics`]) and the frame layout
//! ([`render`]) are plain Rust; only [`start`] and the component touch the DOM.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = FieldConfig { count: 80, ..FieldConfig::default() };
//!
//! view! { <ParticleFieldCanvas config=config fullscreen=true /> }
//! ```

mod component;
pub mod config;
mod error;
mod particles;
pub mod physics;
pub mod pointer;
pub mod render;
mod scheduler;
mod state;
pub mod surface;
pub mod theme;
mod types;

pub use component::{ParticleFieldCanvas, start};
pub use config::FieldConfig;
pub use error::SetupError;
pub use particles::{Particle, seed_particles};
pub use pointer::PointerState;
pub use render::{DrawSurface, connections};
pub use scheduler::{CancelToken, FieldHandle, FrameLoop};
pub use state::FieldState;
pub use surface::{SizingMode, SurfaceSize};
pub use theme::{Color, Theme};
pub use types::Point;
