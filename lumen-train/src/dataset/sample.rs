//! Renderer-facing training samples

use crate::dataset::{Batch, ResolvedFrame};
use glam::{Mat4, Vec3};
use lumen_data::FloatImage;
use std::sync::Arc;

/// One training sample, or several collated along the batch axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// World-to-camera matrices
    pub model_view: Batch<Mat4>,
    /// World-to-clip matrices
    pub mvp: Batch<Mat4>,
    /// Camera centers in world space
    pub camera_pos: Batch<Vec3>,
    /// Render resolution `[height, width]`
    pub resolution: [u32; 2],
    /// Samples per pixel
    pub spp: u32,
    /// Linear-color target images
    pub image: Batch<Arc<FloatImage>>,
}

impl Sample {
    /// Wrap a cached frame as a batch-of-one sample.
    pub fn from_frame(frame: &ResolvedFrame, resolution: [u32; 2], spp: u32) -> Self {
        Self {
            model_view: Batch::single(frame.model_view()),
            mvp: Batch::single(frame.mvp()),
            camera_pos: Batch::single(frame.camera_pos()),
            resolution,
            spp,
            image: Batch::single(Arc::clone(frame.image())),
        }
    }

    /// Number of frames in this sample.
    pub fn batch_size(&self) -> usize {
        self.model_view.len()
    }

    /// Image tensor shape including the batch axis, `[B, H, W, C]`.
    pub fn image_shape(&self) -> [usize; 4] {
        let [height, width, channels] = self.image.first().shape();
        [self.batch_size(), height, width, channels]
    }

    /// Concatenate samples along the batch axis.
    ///
    /// Resolution and spp come from the first sample. Returns `None` when
    /// `samples` is empty or when their images differ in shape.
    pub fn collate(samples: impl IntoIterator<Item = Sample>) -> Option<Sample> {
        let samples: Vec<Sample> = samples.into_iter().collect();
        let first = samples.first()?;
        let (resolution, spp) = (first.resolution, first.spp);
        let shape = first.image.first().shape();
        if samples
            .iter()
            .flat_map(|sample| sample.image.iter())
            .any(|image| image.shape() != shape)
        {
            return None;
        }

        let mut model_view = Vec::with_capacity(samples.len());
        let mut mvp = Vec::with_capacity(samples.len());
        let mut camera_pos = Vec::with_capacity(samples.len());
        let mut image = Vec::with_capacity(samples.len());
        for sample in samples {
            model_view.push(sample.model_view);
            mvp.push(sample.mvp);
            camera_pos.push(sample.camera_pos);
            image.push(sample.image);
        }

        Some(Sample {
            model_view: Batch::concat(model_view)?,
            mvp: Batch::concat(mvp)?,
            camera_pos: Batch::concat(camera_pos)?,
            resolution,
            spp,
            image: Batch::concat(image)?,
        })
    }
}
