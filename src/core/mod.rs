pub mod path_builder;
pub mod primitives;
pub mod scale;
pub mod scrub_index;
pub mod types;

pub use path_builder::{
    FillClosure, FillType, SparkGeometry, SparkLayout, build_spark_geometry, polyline_path,
};
pub use scale::ScaleTransform;
pub use scrub_index::nearest_index;
pub use types::{Bounds, DataPoint, Padding, Viewport};
