use clap::{ArgAction, Args, Parser, Subcommand};
use pixelpad::Pixel;
use std::path::PathBuf;
use std::str::FromStr;

/// Command-Line arguments as a well formatted struct, parsed using clap.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub(crate) struct CliOpts {
    /// The subcommand to execute; without one the color gradient demo is shown
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase program verbosity
    ///
    /// The default verbosity level is INFO.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, default_value = "0")]
    pub verbose: u8,

    /// Decrease program verbosity
    ///
    /// The default verbosity level is INFO.
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, default_value = "0")]
    pub quiet: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Build a color gradient picture and display or save it
    Gradient(GradientOpts),
    /// Build a uniformly or randomly filled picture and display or save it
    Fill(FillOpts),
    /// Display an image file in a window
    Show(ShowOpts),
    /// Convert an image file into another format
    Convert(ConvertOpts),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct GradientOpts {
    /// width of the picture
    #[arg(short = 'x', long = "width", default_value = "256")]
    pub width: usize,

    /// height of the picture
    #[arg(short = 'y', long = "height", default_value = "512")]
    pub height: usize,

    /// title of the picture
    #[arg(long = "title", default_value = "Color Gradient")]
    pub title: String,

    /// Save the picture into this file instead of displaying it
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct FillOpts {
    /// width of the picture
    #[arg(short = 'x', long = "width", default_value = "256")]
    pub width: usize,

    /// height of the picture
    #[arg(short = 'y', long = "height", default_value = "256")]
    pub height: usize,

    /// The color with which the picture should be filled.
    ///
    /// Possible values: ["random", "noise", <RRGGBB>]
    #[arg(long = "color", default_value = "random")]
    pub color: FillColor,

    /// title of the picture
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Save the picture into this file instead of displaying it
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ShowOpts {
    /// Path to the image file that should be displayed
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ConvertOpts {
    /// Path to the image file that should be converted
    pub input: PathBuf,

    /// Path to write the converted image to; the format is derived from the extension
    pub output: PathBuf,
}

#[derive(Debug, Clone)]
pub(crate) enum FillColor {
    /// One random color for the whole picture
    RandomOnce,
    /// An independent random color per pixel
    Noise,
    /// A specific color
    Specific(Pixel),
}

impl FromStr for FillColor {
    type Err = <u32 as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            Ok(FillColor::RandomOnce)
        } else if s.eq_ignore_ascii_case("noise") {
            Ok(FillColor::Noise)
        } else {
            let color = u32::from_str_radix(s, 16)?;
            Ok(FillColor::Specific(color.into()))
        }
    }
}
