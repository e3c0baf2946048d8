//! Conversion of host pixel buffers into the row-major, top-down, BGRA
//! layout of a 32-bit DIB section.

use crate::{
  debug::{error::ThumbnailError, ThumbnailResult},
  geometry::Size,
};

pub const BYTES_PER_PIXEL: usize = 4;

/// How the host's buffer is arranged.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PixelLayout {
  /// Row-major, first row is the top of the image.
  #[default]
  TopDown,
  /// Row-major, first row is the bottom of the image (`glReadPixels`).
  BottomUp,
  /// Column-major, pixel (x, y) at `x * height + y`.
  ColumnMajor,
}

/// Byte order of the four channels in the host's buffer.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ChannelOrder {
  /// Same order as the DIB, copied as is.
  #[default]
  Bgra,
  /// Red and blue are swapped while copying.
  Rgba,
}

/// A borrowed pixel buffer handed in by the host.
#[derive(Debug, Copy, Clone)]
pub struct Image<'a> {
  pub size: Size,
  pub pixels: &'a [u8],
}

impl<'a> Image<'a> {
  pub fn new(size: impl Into<Size>, pixels: &'a [u8]) -> Self {
    Self {
      size: size.into(),
      pixels,
    }
  }

  /// Fails if the size is empty or the buffer is shorter than
  /// `width * height * 4`.
  pub fn validate(&self) -> ThumbnailResult<usize> {
    let required = required_len(self.size)?;
    check_len(required, self.pixels.len())?;
    Ok(required)
  }
}

pub fn required_len(size: Size) -> ThumbnailResult<usize> {
  if size.is_empty() {
    return Err(ThumbnailError::EmptySize {
      width: size.width,
      height: size.height,
    });
  }

  (size.width as usize)
    .checked_mul(size.height as usize)
    .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
    .ok_or(ThumbnailError::SizeOverflow {
      width: size.width,
      height: size.height,
    })
}

fn check_len(expected: usize, actual: usize) -> ThumbnailResult<()> {
  if actual < expected {
    return Err(ThumbnailError::BufferTooShort { expected, actual });
  }
  Ok(())
}

/// Index into the source buffer, in pixels, of destination pixel (x, y).
///
/// `x < size.width` and `y < size.height` must hold.
pub fn source_index(layout: PixelLayout, size: Size, x: usize, y: usize) -> usize {
  let width = size.width as usize;
  let height = size.height as usize;
  match layout {
    PixelLayout::TopDown => y * width + x,
    PixelLayout::BottomUp => (height - 1 - y) * width + x,
    PixelLayout::ColumnMajor => x * height + y,
  }
}

/// Fills `dst` row-major, top-down, BGRA from `src`.
///
/// Both buffers are checked against `size` before anything is written.
pub fn copy_pixels(
  src: &[u8],
  size: Size,
  layout: PixelLayout,
  order: ChannelOrder,
  dst: &mut [u8],
) -> ThumbnailResult<()> {
  let len = required_len(size)?;
  check_len(len, src.len())?;
  check_len(len, dst.len())?;

  let src = &src[..len];
  let dst = &mut dst[..len];

  if layout == PixelLayout::TopDown && order == ChannelOrder::Bgra {
    dst.copy_from_slice(src);
    return Ok(());
  }

  let stride = size.width as usize * BYTES_PER_PIXEL;
  for (y, row) in dst.chunks_exact_mut(stride).enumerate() {
    for (x, out) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
      let k = source_index(layout, size, x, y) * BYTES_PER_PIXEL;
      let pixel = &src[k..k + BYTES_PER_PIXEL];
      match order {
        ChannelOrder::Bgra => out.copy_from_slice(pixel),
        ChannelOrder::Rgba => {
          out[0] = pixel[2];
          out[1] = pixel[1];
          out[2] = pixel[0];
          out[3] = pixel[3];
        }
      }
    }
  }

  Ok(())
}
