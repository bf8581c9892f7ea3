//! Displaying pictures in an interactive window

use crate::picture::Picture;
use minifb::{Key, Window, WindowOptions};
use thiserror::Error;

/// An error which occurred while displaying a picture
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The display window could not be created
    #[error("Could not create display window: {0}")]
    CreateWindow(#[source] minifb::Error),

    /// The display window could not be redrawn
    #[error("Could not update display window: {0}")]
    UpdateWindow(#[source] minifb::Error),
}

/// Display the given picture in a new window at a 1:1 pixel scale
///
/// The window title carries the picture title (or the crate name if none is set) together
/// with the picture dimensions. This call blocks until the window is closed or Escape is
/// pressed.
pub fn show(picture: &Picture) -> Result<(), ViewerError> {
    let (width, height) = picture.get_size();
    let title = format!(
        "{} ({}x{})",
        picture.title().unwrap_or(env!("CARGO_PKG_NAME")),
        width,
        height
    );

    let buffer = picture
        .pixels()
        .map(|pixel| u32::from(*pixel))
        .collect::<Vec<_>>();

    let mut window = Window::new(&title, width, height, WindowOptions::default())
        .map_err(ViewerError::CreateWindow)?;

    // Limit to max ~60 fps update rate
    window.set_target_fps(60);

    tracing::info!("Displaying {}x{} picture in a window", width, height);
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(ViewerError::UpdateWindow)?;
    }

    Ok(())
}
