use crate::error::{SparkError, SparkResult};

use super::SparkViewConfig;

pub(super) fn validate_config(config: &SparkViewConfig) -> SparkResult<()> {
    config.padding.validate()?;
    config.spark_line_style().validate("spark line")?;
    config.base_line_style().validate("base line")?;
    config.scrub_line_style().validate("scrub line")?;
    validate_corner_radius(config.corner_radius)?;
    config.animator.validate()?;
    config.scrub_gesture.validate()?;
    Ok(())
}

pub(super) fn validate_corner_radius(corner_radius: f64) -> SparkResult<f64> {
    if !corner_radius.is_finite() || corner_radius < 0.0 {
        return Err(SparkError::InvalidConfig(
            "corner radius must be finite and >= 0".to_owned(),
        ));
    }
    Ok(corner_radius)
}
