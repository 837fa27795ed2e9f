//! Lumen Training Crate
//!
//! Turns a posed-image scene into per-frame training samples for a
//! differentiable renderer: linear-color image, model-view matrix,
//! model-view-projection matrix and camera position.
//!
//! ## Modules
//!
//! - [`geometry`]: Projection construction and per-frame camera geometry
//! - [`config`]: Training parameters (clip planes, resolution, spp)
//! - [`dataset`]: The precomputed NeRF dataset, samples and batch collation

pub mod config;
pub mod dataset;
pub mod geometry;

pub use config::{ConfigError, TrainConfig};
pub use dataset::{Batch, Dataset, DatasetError, NerfDataset, ResolvedFrame, Sample};
pub use geometry::{FrameGeometry, GeometryError, Projection, resolve, resolve_with_projection};
