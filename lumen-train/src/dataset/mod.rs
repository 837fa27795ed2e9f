//! Training datasets
//!
//! A dataset is anything with a logical length and indexed access. The
//! [`NerfDataset`] implementation precomputes every frame once and replays
//! them cyclically.

mod batch;
mod nerf;
mod sample;

pub use batch::Batch;
pub use nerf::{NerfDataset, ResolvedFrame};
pub use sample::Sample;

use crate::config::ConfigError;
use crate::geometry::GeometryError;
use lumen_data::{DecodeError, SceneError};
use std::path::PathBuf;
use thiserror::Error;

/// Indexed access to training samples.
pub trait Dataset {
    type Item;

    /// Logical number of samples.
    fn len(&self) -> usize;

    /// Sample at `index`.
    fn get(&self, index: usize) -> Self::Item;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate samples `0..len()` in order.
    fn iter(&self) -> DatasetIter<'_, Self>
    where
        Self: Sized,
    {
        DatasetIter {
            dataset: self,
            next: 0,
        }
    }
}

/// Iterator over a [`Dataset`]'s logical range.
pub struct DatasetIter<'a, D> {
    dataset: &'a D,
    next: usize,
}

impl<D: Dataset> Iterator for DatasetIter<'_, D> {
    type Item = D::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.dataset.len() {
            return None;
        }
        let item = self.dataset.get(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<D: Dataset> ExactSizeIterator for DatasetIter<'_, D> {}

/// Errors that abort dataset construction.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid training config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load scene: {0}")]
    Scene(#[from] SceneError),

    #[error("no frames with existing images in {}", base_dir.display())]
    NoFrames { base_dir: PathBuf },

    #[error("failed to decode frame {index} ({}): {source}", path.display())]
    Decode {
        index: usize,
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error(
        "frame {index} ({}) has shape {found:?}, expected {expected:?} like the first frame",
        path.display()
    )]
    ShapeMismatch {
        index: usize,
        path: PathBuf,
        /// `[height, width, channels]` of the first frame
        expected: [usize; 3],
        /// `[height, width, channels]` of this frame
        found: [usize; 3],
    },

    #[error("invalid scene projection: {0}")]
    Projection(#[source] GeometryError),

    #[error("invalid camera for frame {index} ({}): {source}", path.display())]
    Geometry {
        index: usize,
        path: PathBuf,
        #[source]
        source: GeometryError,
    },
}
