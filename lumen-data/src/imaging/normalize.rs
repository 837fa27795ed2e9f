//! Conversion of decoded images into linear-color float images

use crate::imaging::{FloatImage, srgb_to_linear};
use image::{DynamicImage, Rgb, Rgb32FImage, Rgba, Rgba32FImage};

/// Convert a decoded image into a linear float image of the same size.
///
/// `Rgb32F` and `Rgba32F` images are returned untouched and may hold values
/// above 1.0. Every other layout becomes 8-bit RGB, or RGBA when it carries
/// alpha (luma is expanded, 16-bit samples are reduced), and is then scaled to
/// `[0, 1]` with its RGB channels decoded from sRGB. Alpha stays linear.
pub fn normalize(raw: DynamicImage) -> FloatImage {
    let linear: [f32; 256] = std::array::from_fn(|v| srgb_to_linear(v as f32 / 255.0));

    match raw {
        DynamicImage::ImageRgb32F(image) => FloatImage::Rgb(image),
        DynamicImage::ImageRgba32F(image) => FloatImage::Rgba(image),
        other if other.color().has_alpha() => {
            let image = other.into_rgba8();
            FloatImage::Rgba(Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
                let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
                Rgba([
                    linear[r as usize],
                    linear[g as usize],
                    linear[b as usize],
                    a as f32 / 255.0,
                ])
            }))
        }
        other => {
            let image = other.into_rgb8();
            FloatImage::Rgb(Rgb32FImage::from_fn(image.width(), image.height(), |x, y| {
                let Rgb(values) = *image.get_pixel(x, y);
                Rgb(values.map(|v| linear[v as usize]))
            }))
        }
    }
}
