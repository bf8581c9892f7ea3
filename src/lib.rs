#![deny(trivial_casts)]
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]

//!
//! Pixelpad is a small 2D raster image library for teaching basic image manipulation.
//!
//! It revolves around two types: a [`Pixel`] holding a validated RGB color triple and a
//! [`Picture`] holding a fixed-size grid of pixels. Pictures can be loaded from and saved
//! to common image file formats and displayed in an interactive window.
//!

pub mod codec;
pub mod picture;
pub mod pixel;
#[cfg(feature = "windowing")]
pub mod viewer;

pub use picture::Picture;
pub use pixel::Pixel;
