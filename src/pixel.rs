//! The validated RGB color value type and a palette of named colors.

use std::fmt::{Display, Formatter, UpperHex};
use thiserror::Error;

/// An error which indicates that a color value could not be validated
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidColorError {
    /// The given channel list did not contain exactly three values
    #[error("color list must be in format [r, g, b] but has {0} elements")]
    WrongChannelCount(usize),

    /// A channel value fell outside the representable range
    #[error("{channel} value ({value}) must be an int between 0 and 255")]
    ChannelOutOfRange {
        /// Name of the offending channel
        channel: &'static str,
        /// The rejected value
        value: i64,
    },
}

/// A single picture element holding a red, green and blue color channel with a depth of 8 bits each
///
/// The channel fields are `u8` so a `Pixel` can never hold an out-of-range color.
/// Validation only happens at the wide-integer entry points [`Pixel::from_channels`] and
/// [`Pixel::set_color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Hash)]
pub struct Pixel {
    /// Red color channel
    pub red: u8,
    /// Green color channel
    pub green: u8,
    /// Blue color channel
    pub blue: u8,
}

impl Pixel {
    /// Black (0, 0, 0)
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);
    /// Gray (128, 128, 128)
    pub const GRAY: Pixel = Pixel::new(128, 128, 128);
    /// Red (255, 0, 0)
    pub const RED: Pixel = Pixel::new(255, 0, 0);
    /// Lime (0, 255, 0)
    pub const LIME: Pixel = Pixel::new(0, 255, 0);
    /// Blue (0, 0, 255)
    pub const BLUE: Pixel = Pixel::new(0, 0, 255);
    /// Yellow (255, 255, 0)
    pub const YELLOW: Pixel = Pixel::new(255, 255, 0);
    /// Cyan (0, 255, 255)
    pub const CYAN: Pixel = Pixel::new(0, 255, 255);
    /// Magenta (255, 0, 255)
    pub const MAGENTA: Pixel = Pixel::new(255, 0, 255);
    /// Silver (192, 192, 192)
    pub const SILVER: Pixel = Pixel::new(192, 192, 192);
    /// Maroon (128, 0, 0)
    pub const MAROON: Pixel = Pixel::new(128, 0, 0);
    /// Green (0, 128, 0)
    pub const GREEN: Pixel = Pixel::new(0, 128, 0);
    /// Navy (0, 0, 128)
    pub const NAVY: Pixel = Pixel::new(0, 0, 128);
    /// Lavender (230, 230, 250)
    pub const LAVENDER: Pixel = Pixel::new(230, 230, 250);

    /// Create a new pixel from the given channel values
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a new pixel from a list of wide-integer channel values
    ///
    /// The list must contain exactly three values in red, green, blue order, each within
    /// `[0, 255]`. Validation happens in that order and the first failed check is reported.
    pub fn from_channels(channels: &[i64]) -> Result<Self, InvalidColorError> {
        if channels.len() != 3 {
            return Err(InvalidColorError::WrongChannelCount(channels.len()));
        }
        let [red, green, blue] = [
            validate_channel("red", channels[0])?,
            validate_channel("green", channels[1])?,
            validate_channel("blue", channels[2])?,
        ];
        Ok(Self { red, green, blue })
    }

    /// Get the color of this pixel as an `[r, g, b]` array
    pub fn color(&self) -> [u8; 3] {
        (*self).into()
    }

    /// Change the color of this pixel to the given wide-integer channel list
    ///
    /// Validation rules are the same as for [`Pixel::from_channels`]. On error the pixel
    /// is left completely unchanged.
    pub fn set_color(&mut self, channels: &[i64]) -> Result<(), InvalidColorError> {
        *self = Self::from_channels(channels)?;
        Ok(())
    }
}

fn validate_channel(channel: &'static str, value: i64) -> Result<u8, InvalidColorError> {
    u8::try_from(value).map_err(|_| InvalidColorError::ChannelOutOfRange { channel, value })
}

impl From<[u8; 3]> for Pixel {
    fn from(data: [u8; 3]) -> Self {
        Self::new(data[0], data[1], data[2])
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(value: Pixel) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl From<u32> for Pixel {
    /// Interpret the lower three bytes of `src` as `0x00RRGGBB`
    fn from(src: u32) -> Self {
        Self::new((src >> 16) as u8, (src >> 8) as u8, src as u8)
    }
}

impl From<Pixel> for u32 {
    /// Pack the channels as `0x00RRGGBB`
    fn from(value: Pixel) -> Self {
        (value.red as u32) << 16 | (value.green as u32) << 8 | (value.blue as u32)
    }
}

impl Display for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pixel with red={}, green={}, blue={}",
            self.red, self.green, self.blue
        )
    }
}

impl UpperHex for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // format each byte as hex string with at least two characters and leading zeroes
        f.write_fmt(format_args!(
            "{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue
        ))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Pixel {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        u32::arbitrary(g).into()
    }
}
