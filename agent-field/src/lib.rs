#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! An ambient background of wandering agents, drawn as dots joined by
//! proximity links over a faint grid.

mod agent;
mod ambient;
mod canvas;
mod config;
mod random;
mod raster;
mod recording;
pub mod render;
pub mod simulation;
mod viewport;

pub use agent::{Agent, AgentField, Bounds};
pub use ambient::AmbientField;
pub use canvas::{Canvas, Point, Rect, Rgba, Segment};
pub use config::FieldConfig;
pub use random::Random;
pub use raster::RasterCanvas;
pub use recording::{DrawCall, RecordingCanvas};
pub use viewport::{Viewport, WindowMetrics};
