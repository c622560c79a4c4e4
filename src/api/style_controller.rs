use crate::core::{FillType, Padding, Viewport};
use crate::error::SparkResult;
use crate::render::{Color, Renderer, StrokeStyle};

use super::SparkView;
use super::validation::validate_corner_radius;

impl<T: 'static, R: Renderer + 'static> SparkView<T, R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.shared.core.borrow().config.viewport
    }

    /// Host size change. Rebuilds geometry.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let mut core = self.shared.core.borrow_mut();
        if core.config.viewport != viewport {
            core.config.viewport = viewport;
            core.populate();
        }
    }

    pub fn set_padding(&mut self, padding: Padding) -> SparkResult<()> {
        padding.validate()?;
        let mut core = self.shared.core.borrow_mut();
        core.config.padding = padding;
        core.populate();
        Ok(())
    }

    #[must_use]
    pub fn fill_type(&self) -> FillType {
        self.shared.core.borrow().config.fill_type
    }

    pub fn set_fill_type(&mut self, fill_type: FillType) {
        let mut core = self.shared.core.borrow_mut();
        if core.config.fill_type != fill_type {
            core.config.fill_type = fill_type;
            core.populate();
        }
    }

    /// `true` fills down to the bottom edge, `false` strokes only.
    pub fn set_fill(&mut self, fill: bool) {
        self.set_fill_type(FillType::from_fill_flag(fill));
    }

    /// Stroke width feeds the bleed inset, so geometry is rebuilt.
    pub fn set_line_style(&mut self, style: StrokeStyle) -> SparkResult<()> {
        style.validate("spark line")?;
        let mut core = self.shared.core.borrow_mut();
        let width_changed = core.config.line_width != style.width;
        core.config.line_color = style.color;
        core.config.line_width = style.width;
        if width_changed {
            core.populate();
        } else {
            core.request_redraw();
        }
        Ok(())
    }

    pub fn set_line_color(&mut self, color: Color) -> SparkResult<()> {
        let width = self.shared.core.borrow().config.line_width;
        self.set_line_style(StrokeStyle::new(color, width))
    }

    pub fn set_corner_radius(&mut self, corner_radius: f64) -> SparkResult<()> {
        let corner_radius = validate_corner_radius(corner_radius)?;
        let mut core = self.shared.core.borrow_mut();
        core.config.corner_radius = corner_radius;
        core.request_redraw();
        Ok(())
    }

    pub fn set_base_line_style(&mut self, style: StrokeStyle) -> SparkResult<()> {
        style.validate("base line")?;
        let mut core = self.shared.core.borrow_mut();
        core.config.base_line_color = style.color;
        core.config.base_line_width = style.width;
        core.request_redraw();
        Ok(())
    }

    pub fn set_scrub_line_style(&mut self, style: StrokeStyle) -> SparkResult<()> {
        style.validate("scrub line")?;
        let mut core = self.shared.core.borrow_mut();
        core.config.scrub_line_color = Some(style.color);
        core.config.scrub_line_width = Some(style.width);
        core.request_redraw();
        Ok(())
    }
}
