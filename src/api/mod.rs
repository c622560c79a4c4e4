//! Host-facing sparkline view.
//!
//! [`SparkView`] ties an adapter, the geometry engine, the scrub gesture
//! recognizer and the animation engine together and hands finished frames to
//! a [`Renderer`](crate::render::Renderer).

mod animation_controller;
mod data_controller;
mod engine;
mod engine_config;
mod json_contract;
mod scrub_controller;
mod style_controller;
mod validation;

pub use engine::SparkView;
pub use engine_config::SparkViewConfig;
pub use scrub_controller::ScrubListener;
