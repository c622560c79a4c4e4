mod corner_rounding;
mod frame;
mod null_renderer;
mod primitives;

pub use corner_rounding::round_corners;
pub use frame::{SparkFrame, StyledPath};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, StrokeStyle};

use crate::error::SparkResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `SparkFrame`, so drawing code stays
/// isolated from scaling, scrubbing and animation logic.
pub trait Renderer {
    fn render(&mut self, frame: &SparkFrame) -> SparkResult<()>;
}
