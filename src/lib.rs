pub mod config;
pub mod error;
pub mod font;
pub mod frame;
pub mod gaze;
pub mod labels;
pub mod palette;
pub mod raster;
pub mod renderer;
pub mod surface;
pub mod timing;
pub mod ttf;
pub mod types;

#[cfg(test)]
mod gaze_tests;

pub use config::AppConfig;
pub use error::{ConfigError, DetectionError};
pub use frame::PackedFrame;
pub use gaze::{Gaze, GazeDirection, GazeRole, GazeRoles};
pub use labels::LabelMap;
pub use palette::{Color, Palette};
pub use raster::RasterSurface;
pub use renderer::{FrameRenderer, FrameReport};
pub use surface::{FontSpec, RecordingSurface, Surface};
pub use timing::FrameTimer;
pub use types::{Detection, NormalizationRatio, RenderedBox};
