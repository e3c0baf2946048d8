use tracing::*;

use crate::{
  bitmap::DibHeader,
  debug::ThumbnailResult,
  geometry::{Position, Size, WindowId},
  pixels::{copy_pixels, Image},
  settings::ThumbnailSettings,
};

#[cfg(test)]
pub(crate) mod mock;
#[cfg(windows)]
pub mod win32;

/// Window attributes that hand thumbnail drawing over to the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum IconicAttribute {
  /// `DWMWA_FORCE_ICONIC_REPRESENTATION`
  ForceIconicRepresentation = 7,
  /// `DWMWA_HAS_ICONIC_BITMAP`
  HasIconicBitmap = 10,
}

/// A bitmap whose pixels can be written before it is submitted. Released
/// when dropped.
pub trait DibSection {
  fn header(&self) -> &DibHeader;
  fn pixels_mut(&mut self) -> &mut [u8];
}

/// The OS calls behind iconic thumbnails.
///
/// `Surface` and `Bitmap` own their OS resources and release them on drop,
/// so every exit path of a caller gives them back.
pub trait Compositor {
  type Surface;
  type Bitmap: DibSection;

  fn set_window_attribute(
    &self,
    window: WindowId,
    attribute: IconicAttribute,
    enabled: bool,
  ) -> ThumbnailResult<()>;

  fn create_surface(&self) -> ThumbnailResult<Self::Surface>;

  fn create_bitmap(
    &self,
    surface: &Self::Surface,
    header: DibHeader,
  ) -> ThumbnailResult<Self::Bitmap>;

  fn set_iconic_thumbnail(&self, window: WindowId, bitmap: &Self::Bitmap) -> ThumbnailResult<()>;

  fn set_iconic_live_preview(
    &self,
    window: WindowId,
    bitmap: &Self::Bitmap,
    client_offset: Option<Position>,
  ) -> ThumbnailResult<()>;

  fn invalidate_iconic_bitmaps(&self, window: WindowId) -> ThumbnailResult<()>;

  fn client_size(&self, window: WindowId) -> ThumbnailResult<Size>;
}

/// Allocates a DIB section for `image` and copies the pixels into it.
///
/// The image is validated before anything is acquired. The surface is
/// dropped as soon as the bitmap exists.
pub fn build_bitmap<C: Compositor + ?Sized>(
  compositor: &C,
  image: &Image<'_>,
  settings: &ThumbnailSettings,
) -> ThumbnailResult<C::Bitmap> {
  image.validate()?;
  let header = DibHeader::top_down(image.size)?;

  let mut bitmap = {
    let surface = compositor.create_surface()?;
    compositor.create_bitmap(&surface, header)?
  };
  trace!("allocated {}x{} thumbnail bitmap", image.size.width, image.size.height);

  copy_pixels(
    image.pixels,
    image.size,
    settings.pixel_layout,
    settings.channel_order,
    bitmap.pixels_mut(),
  )?;

  Ok(bitmap)
}
