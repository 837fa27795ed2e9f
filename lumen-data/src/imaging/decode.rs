//! Decoding image files

use crate::imaging::DecodeError;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

/// Decode an image file, picking the format from the file contents and
/// extension. The pixel layout is whatever the file stores; [`normalize`]
/// settles it.
///
/// [`normalize`]: crate::imaging::normalize
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn decode_image(path: &Path) -> Result<DynamicImage, DecodeError> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    debug!(
        "Decoded {}x{} image ({:?})",
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Source of decoded frame images.
pub trait ImageLoader {
    /// Decode the image at `path`.
    fn load(&self, path: &Path) -> Result<DynamicImage, DecodeError>;
}

/// Loads images from the filesystem with the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, DecodeError> {
        decode_image(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, GenericImageView, Rgba, RgbaImage};

    #[test]
    fn test_decode_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        RgbaImage::from_fn(5, 3, |x, y| Rgba([x as u8, y as u8, 0, 255]))
            .save(&path)
            .unwrap();

        let image = FileImageLoader.load(&path).unwrap();
        assert_eq!(image.dimensions(), (5, 3));
        assert_eq!(image.color(), ColorType::Rgba8);
        assert_eq!(image.get_pixel(4, 2), Rgba([4, 2, 0, 255]));
    }

    #[test]
    fn test_format_is_guessed_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("frame.png");
        RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]))
            .save(&png)
            .unwrap();
        let renamed = dir.path().join("frame.bin");
        std::fs::rename(&png, &renamed).unwrap();

        let image = decode_image(&renamed).unwrap();
        assert_eq!(image.dimensions(), (2, 2));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_image(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_decode_garbage_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let result = decode_image(&path);
        assert!(matches!(result, Err(DecodeError::Image(_))));
    }
}
