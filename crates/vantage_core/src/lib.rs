//! GPU-free foundation types shared by the renderer and the application
//! layer: world transforms, the camera, frame timing and renderer
//! configuration.
//!
//! Nothing in this crate touches wgpu; the renderer owns all GPU state.

pub mod camera;
pub mod config;
pub mod time;
pub mod transform;

// input helper for keyboard / mouse state (pulls in winit)
#[cfg(feature = "input")]
pub mod input;

pub use camera::Camera;
pub use config::{OverflowPolicy, RendererConfig};
pub use time::{Time, TimeClock};
pub use transform::Transform;

#[cfg(feature = "input")]
pub use input::{InputState, KeyCode, MouseButton};

// glam math types — re-exported so downstream crates agree on one version
pub use glam;
