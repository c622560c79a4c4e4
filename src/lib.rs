//! spark-rs: sparkline chart core.
//!
//! Maps adapter data into view pixels, builds the (optionally filled) line and
//! baseline paths, resolves scrub positions to data points, and interpolates
//! path animations. Drawing, view lifecycle and touch dispatch stay with the
//! host, which talks to the crate through [`SparkView`].

pub mod adapter;
pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use adapter::{SparkAdapter, VecAdapter};
pub use api::{ScrubListener, SparkView, SparkViewConfig};
pub use error::{SparkError, SparkResult};
