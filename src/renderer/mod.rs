//! Rendering
//!
//! `frame::render` describes a frame as draw commands. The WebGPU pipeline
//! fills the shapes; on the web, text goes to a 2D canvas overlay.

pub mod frame;
pub mod pipeline;
pub mod shapes;
#[cfg(target_arch = "wasm32")]
pub mod text;
pub mod vertex;

pub use frame::{DrawCommand, TextAlign, render};
pub use pipeline::RenderState;
pub use vertex::{Color, Vertex, colors};
