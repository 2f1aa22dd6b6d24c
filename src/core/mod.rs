pub mod engine;
pub mod generator;
pub mod pipeline;
pub mod plan;
pub mod render;

pub use crate::domain::model::{Dataset, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
