//! Lumen Data Crate
//!
//! Loading and preprocessing for posed-image scenes: the scene config
//! (`transforms.json` style), image decoding, and conversion of raw pixels into
//! linear-color float images. This crate knows nothing about projection or
//! training; see `lumen-train` for that.
//!
//! ## Modules
//!
//! - [`scene`]: Scene config parsing and missing-file filtering
//! - [`imaging`]: Decoding, sRGB transfer functions and normalization

pub mod imaging;
pub mod scene;

pub use imaging::{
    DecodeError, FileImageLoader, FloatImage, ImageLoader, decode_image, linear_to_srgb,
    normalize, srgb_to_linear,
};
pub use scene::{FrameRecord, Scene, SceneConfig, SceneError, SceneFrame, resolve_frame_path};
