//! External iterators over the pixels of a [`Picture`](crate::Picture)
//!
//! Each iterator owns its own cursor, so any number of iterations over the same picture
//! can be in flight at once without interfering with each other or with the picture
//! itself. All iterators are fused and report their exact remaining length.

use crate::pixel::Pixel;
use std::iter::FusedIterator;
use std::slice;

/// An iterator yielding shared references to pixels in row-major order
#[derive(Debug, Clone)]
pub struct Pixels<'a> {
    inner: slice::Iter<'a, Pixel>,
}

impl<'a> Pixels<'a> {
    pub(crate) fn new(data: &'a [Pixel]) -> Self {
        Self { inner: data.iter() }
    }
}

impl<'a> Iterator for Pixels<'a> {
    type Item = &'a Pixel;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Pixels<'_> {}
impl FusedIterator for Pixels<'_> {}

/// An iterator yielding mutable references to pixels in row-major order
///
/// Writes through the yielded references mutate the underlying picture.
#[derive(Debug)]
pub struct PixelsMut<'a> {
    inner: slice::IterMut<'a, Pixel>,
}

impl<'a> PixelsMut<'a> {
    pub(crate) fn new(data: &'a mut [Pixel]) -> Self {
        Self {
            inner: data.iter_mut(),
        }
    }
}

impl<'a> Iterator for PixelsMut<'a> {
    type Item = &'a mut Pixel;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for PixelsMut<'_> {}
impl FusedIterator for PixelsMut<'_> {}

#[cfg(test)]
mod test {
    use crate::picture::Picture;
    use crate::pixel::Pixel;

    fn coordinate_tagged_picture(width: usize, height: usize) -> Picture {
        let mut picture = Picture::new(width, height).unwrap();
        for x in 0..width {
            for y in 0..height {
                picture[(x, y)] = Pixel::new(x as u8, y as u8, 0);
            }
        }
        picture
    }

    #[test]
    fn test_full_pass_is_row_major_from_origin() {
        let picture = coordinate_tagged_picture(3, 2);
        let order = picture
            .pixels()
            .map(|pixel| (pixel.red, pixel.green))
            .collect::<Vec<_>>();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_legacy_pass_skips_the_origin() {
        let picture = coordinate_tagged_picture(3, 2);
        let order = picture
            .legacy_pixels()
            .map(|pixel| (pixel.red, pixel.green))
            .collect::<Vec<_>>();
        assert_eq!(order, vec![(1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(picture.legacy_pixels().len(), 3 * 2 - 1);
    }

    #[test]
    fn test_exhausted_iterators_stay_exhausted() {
        let picture = Picture::new(2, 2).unwrap();
        let mut pixels = picture.pixels();
        for _ in pixels.by_ref() {}
        assert!(pixels.next().is_none());
        assert!(pixels.next().is_none());
    }

    #[test]
    fn test_concurrent_iterations_do_not_interfere() {
        let picture = Picture::new(4, 4).unwrap();
        let mut a = picture.pixels();
        let b = picture.pixels();
        a.next();
        a.next();
        assert_eq!(a.len(), 14);
        assert_eq!(b.len(), 16);
    }

    #[test]
    fn test_mutable_iteration_writes_through() {
        let mut picture = Picture::new(2, 2).unwrap();
        for pixel in picture.pixels_mut() {
            pixel.green = 77;
        }
        assert!(picture.pixels().all(|pixel| pixel.green == 77));
    }

    #[test]
    fn test_into_iterator_matches_pixels() {
        let picture = Picture::new(2, 3).unwrap();
        assert_eq!((&picture).into_iter().count(), 6);
    }
}
