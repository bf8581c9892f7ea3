use anyhow::Context;
use clap::Parser;
use pixelpad::{Picture, Pixel};
use rand::Rng;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::CliOpts::parse();
    init_logger(&args);

    match args.command {
        None => {
            // the classic demo: a 256x512 color gradient shown in a window
            let mut picture = gradient(256, 512)?;
            picture.set_title("Color Gradient");
            picture.show()?;
        }
        Some(cli::Command::Gradient(opts)) => {
            let mut picture = gradient(opts.width, opts.height)?;
            picture.set_title(opts.title);
            output(&picture, opts.out.as_deref())?;
        }
        Some(cli::Command::Fill(opts)) => {
            let mut picture = Picture::new(opts.width, opts.height)?;
            match opts.color {
                cli::FillColor::Specific(color) => picture.fill(color),
                cli::FillColor::RandomOnce => {
                    let color = Pixel::from(rand::thread_rng().gen::<u32>());
                    tracing::info!("Filling picture with color #{:X}", color);
                    picture.fill(color);
                }
                cli::FillColor::Noise => {
                    let mut rng = rand::thread_rng();
                    for pixel in picture.pixels_mut() {
                        *pixel = Pixel::from(rng.gen::<u32>());
                    }
                }
            }
            if let Some(title) = opts.title {
                picture.set_title(title);
            }
            output(&picture, opts.out.as_deref())?;
        }
        Some(cli::Command::Show(opts)) => {
            let mut picture = Picture::load(&opts.file)
                .with_context(|| format!("Could not load picture from {}", opts.file.display()))?;
            if let Some(name) = opts.file.file_stem() {
                picture.set_title(name.to_string_lossy());
            }
            picture.show()?;
        }
        Some(cli::Command::Convert(opts)) => {
            let picture = Picture::load(&opts.input)
                .with_context(|| format!("Could not load picture from {}", opts.input.display()))?;
            picture
                .save(&opts.output)
                .with_context(|| format!("Could not save picture to {}", opts.output.display()))?;
        }
    }

    Ok(())
}

fn init_logger(args: &cli::CliOpts) {
    // default verbosity is INFO, adjusted by the -v and -q counters
    let level = match 2 + args.verbose as i16 - args.quiet as i16 {
        i16::MIN..=0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        4..=i16::MAX => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(level)
        .init();
}

/// Build a picture where pixel (x,y) has color [x % 256, y % 256, (x+y) % 256]
fn gradient(width: usize, height: usize) -> anyhow::Result<Picture> {
    let mut picture = Picture::new(width, height)?;
    for x in 0..width {
        for y in 0..height {
            picture[(x, y)] = Pixel::new((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8);
        }
    }
    Ok(picture)
}

fn output(picture: &Picture, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => picture
            .save(path)
            .with_context(|| format!("Could not save picture to {}", path.display())),
        None => Ok(picture.show()?),
    }
}
