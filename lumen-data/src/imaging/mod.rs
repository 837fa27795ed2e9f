//! Image decoding and linear-color normalization

mod color;
mod decode;
mod float_image;
mod normalize;

pub use color::{linear_to_srgb, srgb_to_linear};
pub use decode::{FileImageLoader, ImageLoader, decode_image};
pub use float_image::FloatImage;
pub use normalize::normalize;

use thiserror::Error;

/// Errors that can occur while decoding image files.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
}
