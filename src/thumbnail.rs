use tracing::*;

#[cfg(windows)]
use crate::compositor::win32::Win32Compositor;
use crate::{
  compositor::{build_bitmap, Compositor, IconicAttribute},
  debug::ThumbnailResult,
  geometry::{Position, Size, WindowId},
  message::{IconicRequest, SystemMessage},
  pixels::{required_len, Image},
  settings::ThumbnailSettings,
};

/// What [`IconicWindow::handle_message`] did with a message.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Response {
  Thumbnail(Size),
  LivePreview(Size),
  Ignored,
}

impl Response {
  pub fn size(&self) -> Option<Size> {
    match self {
      Self::Thumbnail(size) | Self::LivePreview(size) => Some(*size),
      Self::Ignored => None,
    }
  }
}

/// A host window whose taskbar thumbnail and live preview are drawn by
/// the application.
pub struct IconicWindow<C: Compositor> {
  window: WindowId,
  settings: ThumbnailSettings,
  compositor: C,
}

#[cfg(all(windows, any(feature = "rwh_05", feature = "rwh_06")))]
impl IconicWindow<Win32Compositor> {
  /// Wraps a window that exposes a Win32 raw window handle (SDL2, winit,
  /// witer, ...).
  #[cfg(all(feature = "rwh_06", not(feature = "rwh_05")))]
  pub fn from_window(
    window: &impl rwh_06::HasWindowHandle,
    settings: ThumbnailSettings,
  ) -> ThumbnailResult<Self> {
    Ok(Self::new(WindowId::from_window(window)?, settings, Win32Compositor))
  }

  #[cfg(all(feature = "rwh_05", not(feature = "rwh_06")))]
  pub fn from_window(
    window: &impl rwh_05::HasRawWindowHandle,
    settings: ThumbnailSettings,
  ) -> ThumbnailResult<Self> {
    Ok(Self::new(WindowId::from_window(window)?, settings, Win32Compositor))
  }
}

impl<C: Compositor> IconicWindow<C> {
  pub fn new(window: WindowId, settings: ThumbnailSettings, compositor: C) -> Self {
    Self {
      window,
      settings,
      compositor,
    }
  }

  pub fn window(&self) -> WindowId {
    self.window
  }

  pub fn settings(&self) -> &ThumbnailSettings {
    &self.settings
  }

  pub fn compositor(&self) -> &C {
    &self.compositor
  }

  /// Tells DWM to ask the application for thumbnails and live previews
  /// instead of capturing the window. Call once after the window exists;
  /// no iconic request arrives before this.
  pub fn enable_iconic_representation(&self) -> ThumbnailResult<()> {
    self.set_iconic_representation(true)
  }

  pub fn disable_iconic_representation(&self) -> ThumbnailResult<()> {
    self.set_iconic_representation(false)
  }

  fn set_iconic_representation(&self, enabled: bool) -> ThumbnailResult<()> {
    let mut result = Ok(());
    for attribute in [
      IconicAttribute::ForceIconicRepresentation,
      IconicAttribute::HasIconicBitmap,
    ] {
      match self
        .compositor
        .set_window_attribute(self.window, attribute, enabled)
      {
        Ok(()) => debug!("set {attribute:?} to {enabled} on {:?}", self.window),
        Err(error) => {
          error!("failed to set {attribute:?} on {:?}: {error}", self.window);
          if result.is_ok() {
            result = Err(error);
          }
        }
      }
    }
    result
  }

  /// Converts `image` into a bitmap and hands it to DWM as the taskbar
  /// thumbnail. The bitmap is released whether or not DWM accepts it.
  pub fn submit_thumbnail(&self, image: &Image<'_>) -> ThumbnailResult<()> {
    let bitmap = build_bitmap(&self.compositor, image, &self.settings)
      .inspect_err(|error| error!("failed to prepare thumbnail bitmap: {error}"))?;

    self
      .compositor
      .set_iconic_thumbnail(self.window, &bitmap)
      .inspect_err(|error| error!("failed to set iconic thumbnail: {error}"))
  }

  /// Same as [`Self::submit_thumbnail`] for the live preview shown while
  /// peeking. `client_offset` places the client area inside the bitmap.
  pub fn submit_live_preview(
    &self,
    image: &Image<'_>,
    client_offset: Option<Position>,
  ) -> ThumbnailResult<()> {
    let bitmap = build_bitmap(&self.compositor, image, &self.settings)
      .inspect_err(|error| error!("failed to prepare live preview bitmap: {error}"))?;

    self
      .compositor
      .set_iconic_live_preview(self.window, &bitmap, client_offset)
      .inspect_err(|error| error!("failed to set iconic live preview: {error}"))
  }

  /// Drops the bitmaps DWM holds so it requests fresh ones. Call after the
  /// window content changed.
  pub fn invalidate(&self) -> ThumbnailResult<()> {
    self
      .compositor
      .invalidate_iconic_bitmaps(self.window)
      .inspect_err(|error| error!("failed to invalidate iconic bitmaps: {error}"))
  }

  /// Answers an iconic request. `draw` receives the size to render at and
  /// a zeroed buffer of `width * height * 4` bytes laid out as
  /// [`ThumbnailSettings`] describes.
  pub fn handle_message<M, F>(&self, message: &M, draw: F) -> ThumbnailResult<Response>
  where
    M: SystemMessage + ?Sized,
    F: FnOnce(Size, &mut [u8]),
  {
    if message.window() != self.window {
      return Ok(Response::Ignored);
    }

    let response = match IconicRequest::collect(message) {
      IconicRequest::Thumbnail { max_size } => {
        debug!("received iconic thumbnail request ({}x{})", max_size.width, max_size.height);
        Response::Thumbnail(max_size)
      }
      IconicRequest::LivePreview if self.settings.live_preview => {
        debug!("received iconic live preview request");
        Response::LivePreview(self.compositor.client_size(self.window)?)
      }
      _ => return Ok(Response::Ignored),
    };

    let Some(size) = response.size() else {
      return Ok(response);
    };
    let len = required_len(size).inspect_err(|error| warn!("{error}"))?;
    let mut buffer = vec![0u8; len];
    draw(size, &mut buffer);
    let image = Image::new(size, &buffer);

    match response {
      Response::Thumbnail(_) => self.submit_thumbnail(&image)?,
      Response::LivePreview(_) => self.submit_live_preview(&image, None)?,
      Response::Ignored => {}
    }

    Ok(response)
  }
}
