//! WebGPU rendering module
//!
//! Draws the room and the pong table from a `FrameSnapshot`. Nothing here
//! reads or writes simulation state directly.

pub mod camera;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::RenderState;
pub use vertex::Vertex;
