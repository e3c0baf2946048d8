use crate::{
  debug::{error::ThumbnailError, ThumbnailResult},
  geometry::Size,
  pixels::{required_len, BYTES_PER_PIXEL},
};

/// Geometry of a 32-bit, uncompressed, top-down DIB section.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DibHeader {
  pub width: i32,
  /// Negative for top-down bitmaps.
  pub height: i32,
  pub planes: u16,
  pub bit_count: u16,
}

impl DibHeader {
  pub const BIT_COUNT: u16 = 32;

  pub fn top_down(size: Size) -> ThumbnailResult<Self> {
    required_len(size)?;

    let overflow = || ThumbnailError::SizeOverflow {
      width: size.width,
      height: size.height,
    };
    let width = i32::try_from(size.width).map_err(|_| overflow())?;
    let height = i32::try_from(size.height).map_err(|_| overflow())?;

    Ok(Self {
      width,
      height: -height,
      planes: 1,
      bit_count: Self::BIT_COUNT,
    })
  }

  pub fn size(&self) -> Size {
    Size::new(self.width.unsigned_abs(), self.height.unsigned_abs())
  }

  pub fn is_top_down(&self) -> bool {
    self.height < 0
  }

  pub fn stride(&self) -> usize {
    self.width.unsigned_abs() as usize * BYTES_PER_PIXEL
  }

  pub fn byte_len(&self) -> usize {
    self.stride() * self.height.unsigned_abs() as usize
  }
}
