//! The 2D pixel grid type

use crate::codec::{self, DecodeError, EncodeError};
use crate::pixel::Pixel;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use std::path::Path;
use thiserror::Error;

pub mod iter;

use iter::{Pixels, PixelsMut};

/// An error which indicates that invalid coordinates could not be accessed
#[derive(Debug, Error, Copy, Clone)]
#[error("Could not access invalid coordinates {}x{} on picture of size {}x{}", .target.0, .target.1, .picture_size.0, .picture_size.1)]
pub struct InvalidCoordinatesError {
    target: (usize, usize),
    picture_size: (usize, usize),
}

/// An error which indicates that a picture of a given size cannot be constructed
#[derive(Debug, Error, Copy, Clone)]
#[error("Given size {}x{} is not valid for constructing a picture: {details}", .size.0, .size.1)]
pub struct InvalidSizeError {
    size: (usize, usize),
    details: &'static str,
}

/// A digital picture: a grid of [`Pixel`]s with fixed dimensions and a mutable title
///
/// Pixels are stored in a single flat row-major buffer and addressed as `(x, y)` where
/// `x` is the column and `y` is the row, both starting at `0` in the top-left corner.
///
/// The title is carried along on [`Clone`] but is not part of equality.
#[derive(Debug, Clone)]
pub struct Picture {
    data: Vec<Pixel>,
    width: usize,
    height: usize,
    title: Option<String>,
}

impl Picture {
    /// Create a new all-black picture with the specified dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidSizeError> {
        if width == 0 || height == 0 {
            return Err(InvalidSizeError {
                size: (width, height),
                details: "Width and Height must both be greater than 0",
            });
        }

        Ok(Self {
            data: vec![Pixel::default(); width * height],
            width,
            height,
            title: None,
        })
    }

    /// Load a picture from the image file at the given path
    ///
    /// This is a convenience wrapper around [`codec::decode`]; see there for the supported
    /// source color modes.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        codec::decode(path.as_ref())
    }

    /// Save this picture as a 3-channel image file at the given path
    ///
    /// The container format is derived from the path's extension (see [`codec::encode`]).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EncodeError> {
        codec::encode(self, path.as_ref())
    }

    /// Display this picture in a new window, blocking until the window is closed
    #[cfg(feature = "windowing")]
    pub fn show(&self) -> Result<(), crate::viewer::ViewerError> {
        crate::viewer::show(self)
    }

    /// Get the width of this picture in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of this picture in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the size of this picture as `(width, height)` tuple
    pub fn get_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the title of this picture, if one is set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title of this picture
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Remove the title of this picture
    pub fn clear_title(&mut self) {
        self.title = None;
    }

    /// Get a reference to the pixel at position (x,y)
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<&Pixel, InvalidCoordinatesError> {
        self.verify_coordinates(x, y)?;
        Ok(&self.data[y * self.width + x])
    }

    /// Get a mutable reference to the pixel at position (x,y)
    ///
    /// Mutating the returned pixel mutates this picture.
    pub fn get_pixel_mut(&mut self, x: usize, y: usize) -> Result<&mut Pixel, InvalidCoordinatesError> {
        self.verify_coordinates(x, y)?;
        Ok(&mut self.data[y * self.width + x])
    }

    /// Set the pixel value at position (x,y) to the specified color
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Pixel) -> Result<(), InvalidCoordinatesError> {
        *self.get_pixel_mut(x, y)? = color;
        Ok(())
    }

    /// Set every pixel of this picture to the specified color
    pub fn fill(&mut self, color: Pixel) {
        self.data.fill(color);
    }

    /// Iterate over all pixels in row-major order, starting at (0,0)
    pub fn pixels(&self) -> Pixels<'_> {
        Pixels::new(&self.data)
    }

    /// Iterate mutably over all pixels in row-major order, starting at (0,0)
    pub fn pixels_mut(&mut self) -> PixelsMut<'_> {
        PixelsMut::new(&mut self.data)
    }

    /// Iterate over pixels in the legacy order, which starts at (1,0)
    ///
    /// This is a compatibility pass reproducing the iteration order of earlier revisions
    /// of this library: row-major, but beginning one column in, so the origin pixel (0,0)
    /// is never yielded and `width * height - 1` pixels are produced. New code should use
    /// [`Picture::pixels`] instead.
    pub fn legacy_pixels(&self) -> Pixels<'_> {
        Pixels::new(&self.data[1..])
    }

    fn verify_coordinates(&self, x: usize, y: usize) -> Result<(), InvalidCoordinatesError> {
        if x >= self.width || y >= self.height {
            return Err(InvalidCoordinatesError {
                target: (x, y),
                picture_size: self.get_size(),
            });
        }
        Ok(())
    }
}

impl Default for Picture {
    /// A blank 100x100 picture
    fn default() -> Self {
        Self::new(100, 100).unwrap()
    }
}

impl PartialEq for Picture {
    /// Two pictures are equal if their dimensions and all their pixel colors are the
    /// same; the titles may differ between equal pictures.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl Eq for Picture {}

impl Index<(usize, usize)> for Picture {
    type Output = Pixel;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        assert!(
            x < self.width && y < self.height,
            "coordinates {}x{} are out of bounds for a {}x{} picture",
            x,
            y,
            self.width,
            self.height
        );
        &self.data[y * self.width + x]
    }
}

impl IndexMut<(usize, usize)> for Picture {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        assert!(
            x < self.width && y < self.height,
            "coordinates {}x{} are out of bounds for a {}x{} picture",
            x,
            y,
            self.width,
            self.height
        );
        &mut self.data[y * self.width + x]
    }
}

impl Display for Picture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A picture with width = {} and height = {}",
            self.width, self.height
        )
    }
}

impl<'a> IntoIterator for &'a Picture {
    type Item = &'a Pixel;
    type IntoIter = Pixels<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels()
    }
}

impl<'a> IntoIterator for &'a mut Picture {
    type Item = &'a mut Pixel;
    type IntoIter = PixelsMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    quickcheck! {
        fn test_set_and_get_pixel(x: usize, y: usize) -> TestResult {
            let color = Pixel::new(0xab, 0xab, 0xab);
            let mut picture = Picture::new(80, 60).unwrap();
            match picture.set_pixel(x, y, color) {
                Err(_) => TestResult::discard(),
                Ok(_) => {
                    let got_color = picture.get_pixel(x, y).unwrap();
                    TestResult::from_bool(*got_color == color)
                }
            }
        }
    }

    #[test]
    fn test_new_picture_is_black() {
        let picture = Picture::new(7, 5).unwrap();
        assert_eq!(picture.width(), 7);
        assert_eq!(picture.height(), 5);
        assert!(picture.pixels().all(|pixel| *pixel == Pixel::BLACK));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(Picture::new(0, 5).is_err());
        assert!(Picture::new(5, 0).is_err());
        assert!(Picture::new(0, 0).is_err());
    }

    #[test]
    fn test_default_picture_is_100_by_100() {
        let picture = Picture::default();
        assert_eq!(picture.get_size(), (100, 100));
        assert!(picture.title().is_none());
    }

    #[test]
    fn test_clones_are_deep() {
        let mut original = Picture::new(4, 4).unwrap();
        original.set_title("original");
        let mut copy = original.clone();
        assert_eq!(original, copy);
        assert_eq!(copy.title(), Some("original"));

        copy[(2, 2)] = Pixel::RED;
        assert_ne!(original, copy);
        assert_eq!(*original.get_pixel(2, 2).unwrap(), Pixel::BLACK);
    }

    #[test]
    fn test_equality_ignores_title() {
        let mut a = Picture::new(3, 3).unwrap();
        let mut b = Picture::new(3, 3).unwrap();
        a.set_title("a");
        b.set_title("b");
        assert_eq!(a, b);
    }

    #[test]
    fn test_differing_dimensions_are_never_equal() {
        assert_ne!(Picture::new(3, 4).unwrap(), Picture::new(4, 3).unwrap());
        assert_ne!(Picture::new(3, 3).unwrap(), Picture::new(3, 4).unwrap());
    }

    #[test]
    fn test_differing_pixel_colors_are_not_equal() {
        let a = Picture::new(3, 3).unwrap();
        let mut b = Picture::new(3, 3).unwrap();
        b.set_pixel(1, 1, Pixel::WHITE).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_out_of_bounds_access_fails() {
        let mut picture = Picture::new(3, 3).unwrap();
        assert!(picture.get_pixel(3, 0).is_err());
        assert!(picture.get_pixel(0, 3).is_err());
        assert!(picture.get_pixel_mut(3, 3).is_err());
        assert!(picture.set_pixel(99, 0, Pixel::RED).is_err());
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_index_panics() {
        let picture = Picture::new(3, 3).unwrap();
        let _ = picture[(3, 0)];
    }

    #[test]
    fn test_mutating_a_live_pixel_mutates_the_picture() {
        let mut picture = Picture::new(3, 3).unwrap();
        picture.get_pixel_mut(1, 2).unwrap().red = 200;
        assert_eq!(picture[(1, 2)].red, 200);
    }

    #[test]
    fn test_fill() {
        let mut picture = Picture::new(4, 2).unwrap();
        picture.fill(Pixel::NAVY);
        assert!(picture.pixels().all(|pixel| *pixel == Pixel::NAVY));
    }

    #[test]
    fn test_title_handling() {
        let mut picture = Picture::new(2, 2).unwrap();
        assert_eq!(picture.title(), None);
        picture.set_title("Hello");
        assert_eq!(picture.title(), Some("Hello"));
        picture.clear_title();
        assert_eq!(picture.title(), None);
    }

    #[test]
    fn test_display_names_dimensions() {
        let picture = Picture::new(12, 34).unwrap();
        assert_eq!(
            picture.to_string(),
            "A picture with width = 12 and height = 34"
        );
    }
}
