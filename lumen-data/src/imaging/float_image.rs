//! Linear-color float images

use image::{Pixel, Rgb32FImage, Rgba32FImage};

/// A linear-color image with 3 or 4 `f32` channels per pixel.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatImage {
    Rgb(Rgb32FImage),
    Rgba(Rgba32FImage),
}

impl FloatImage {
    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            FloatImage::Rgb(image) => image.dimensions(),
            FloatImage::Rgba(image) => image.dimensions(),
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// 3 for RGB, 4 for RGBA.
    pub fn channels(&self) -> usize {
        match self {
            FloatImage::Rgb(_) => 3,
            FloatImage::Rgba(_) => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, FloatImage::Rgba(_))
    }

    /// Tensor shape `[height, width, channels]`.
    pub fn shape(&self) -> [usize; 3] {
        let (width, height) = self.dimensions();
        [height as usize, width as usize, self.channels()]
    }

    /// Row-major interleaved samples.
    pub fn as_raw(&self) -> &[f32] {
        match self {
            FloatImage::Rgb(image) => image.as_raw(),
            FloatImage::Rgba(image) => image.as_raw(),
        }
    }

    /// Channel values of the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> &[f32] {
        match self {
            FloatImage::Rgb(image) => image.get_pixel(x, y).channels(),
            FloatImage::Rgba(image) => image.get_pixel(x, y).channels(),
        }
    }
}

impl From<Rgb32FImage> for FloatImage {
    fn from(image: Rgb32FImage) -> Self {
        FloatImage::Rgb(image)
    }
}

impl From<Rgba32FImage> for FloatImage {
    fn from(image: Rgba32FImage) -> Self {
        FloatImage::Rgba(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn test_shape_is_height_width_channels() {
        let image = FloatImage::from(Rgb32FImage::from_pixel(5, 2, Rgb([0.0; 3])));
        assert_eq!(image.shape(), [2, 5, 3]);
        assert_eq!(image.width(), 5);
        assert_eq!(image.height(), 2);
        assert!(!image.has_alpha());
    }

    #[test]
    fn test_rgba_pixel_access() {
        let mut buffer = Rgba32FImage::new(3, 2);
        buffer.put_pixel(2, 1, Rgba([0.5, 1.5, 2.5, 1.0]));
        let image = FloatImage::from(buffer);

        assert_eq!(image.shape(), [2, 3, 4]);
        assert_eq!(image.get_pixel(2, 1), &[0.5, 1.5, 2.5, 1.0]);
        assert_eq!(image.as_raw().len(), 2 * 3 * 4);
        assert_eq!(&image.as_raw()[20..], &[0.5, 1.5, 2.5, 1.0]);
    }
}
