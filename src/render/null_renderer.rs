use crate::error::SparkResult;
use crate::render::{Renderer, SparkFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content and keeps the last frame so tests can
/// inspect exactly what a backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<SparkFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SparkFrame) -> SparkResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
