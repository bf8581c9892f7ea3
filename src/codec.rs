//! Decoding and encoding of pictures from and to image files
//!
//! All actual file format handling is delegated to the `image` crate; this module only
//! converts between its buffer types and [`Picture`]. Only two source color modes are
//! accepted when decoding: 8-bit 3-channel RGB and 8-bit single-channel luminance, where
//! the luminance value is broadcast to all three color channels.

use crate::picture::{InvalidSizeError, Picture};
use crate::pixel::Pixel;
use image::DynamicImage;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An error which occurred while decoding an image file into a picture
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The backend could not open or parse the file
    #[error("Could not decode image in {}: {source}", .path.display())]
    Backend {
        /// Path of the offending file
        path: PathBuf,
        /// The underlying backend error
        #[source]
        source: image::ImageError,
    },

    /// The file decoded into a color mode other than 8-bit RGB or 8-bit luminance
    #[error("Image in {} has unsupported mode: {mode}", .path.display())]
    UnsupportedMode {
        /// Path of the offending file
        path: PathBuf,
        /// The backend's name for the rejected color mode
        mode: String,
    },

    /// The file decoded into dimensions that cannot back a picture
    #[error("Image in {} has invalid dimensions: {source}", .path.display())]
    InvalidSize {
        /// Path of the offending file
        path: PathBuf,
        /// The underlying size error
        #[source]
        source: InvalidSizeError,
    },
}

/// An error which occurred while encoding a picture into an image file
#[derive(Debug, Error)]
#[error("Could not encode image into {}: {source}", .path.display())]
pub struct EncodeError {
    path: PathBuf,
    #[source]
    source: image::ImageError,
}

/// Decode the image file at the given path into a picture
///
/// The source must decode to either 8-bit RGB or 8-bit luminance; any other color mode
/// is rejected with [`DecodeError::UnsupportedMode`].
pub fn decode(path: &Path) -> Result<Picture, DecodeError> {
    let image = image::open(path).map_err(|source| DecodeError::Backend {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut picture = Picture::new(width, height).map_err(|source| DecodeError::InvalidSize {
        path: path.to_path_buf(),
        source,
    })?;

    match image {
        DynamicImage::ImageRgb8(rgb) => {
            let channels = rgb.into_raw().into_iter().tuples::<(_, _, _)>();
            for (pixel, (r, g, b)) in picture.pixels_mut().zip(channels) {
                *pixel = Pixel::new(r, g, b);
            }
        }
        DynamicImage::ImageLuma8(luma) => {
            // luminance is greyscale, a single intensity broadcast to all three channels
            for (pixel, l) in picture.pixels_mut().zip(luma.into_raw()) {
                *pixel = Pixel::new(l, l, l);
            }
        }
        other => {
            return Err(DecodeError::UnsupportedMode {
                path: path.to_path_buf(),
                mode: format!("{:?}", other.color()),
            });
        }
    }

    tracing::debug!("Decoded {}x{} picture from {}", width, height, path.display());
    Ok(picture)
}

/// Encode the given picture as a 3-channel image file at the given path
///
/// The container format is derived from the path's extension by the backend.
pub fn encode(picture: &Picture, path: &Path) -> Result<(), EncodeError> {
    let (width, height) = picture.get_size();
    let raw = picture
        .pixels()
        .flat_map(|pixel| Into::<[u8; 3]>::into(*pixel))
        .collect::<Vec<_>>();
    let image = image::RgbImage::from_raw(width as u32, height as u32, raw)
        .expect("raw buffer length matches picture dimensions");

    image.save(path).map_err(|source| EncodeError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Encoded {}x{} picture into {}", width, height, path.display());
    Ok(())
}
