use std::{cell::RefCell, rc::Rc};

use super::{Compositor, DibSection, IconicAttribute};
use crate::{
  bitmap::DibHeader,
  debug::{error::ThumbnailError, ThumbnailResult},
  geometry::{Position, Size, WindowId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Submission {
  pub window: WindowId,
  pub size: Size,
  pub pixels: Vec<u8>,
  pub client_offset: Option<Position>,
  /// Device contexts still alive when the bitmap was handed over.
  pub surfaces_live: usize,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Journal {
  pub attributes: Vec<(WindowId, IconicAttribute, bool)>,
  pub surfaces_created: usize,
  pub surfaces_live: usize,
  pub bitmaps_created: usize,
  pub bitmaps_live: usize,
  pub thumbnails: Vec<Submission>,
  pub live_previews: Vec<Submission>,
  pub invalidations: Vec<WindowId>,
}

/// Records every call and can be told to fail any of them.
#[derive(Debug, Default)]
pub(crate) struct MockCompositor {
  journal: Rc<RefCell<Journal>>,
  fail_surface: bool,
  fail_bitmap: bool,
  fail_submit: bool,
  fail_attribute: Option<IconicAttribute>,
  client_size: Size,
}

impl MockCompositor {
  pub fn fail_surface(mut self) -> Self {
    self.fail_surface = true;
    self
  }

  pub fn fail_bitmap(mut self) -> Self {
    self.fail_bitmap = true;
    self
  }

  pub fn fail_submit(mut self) -> Self {
    self.fail_submit = true;
    self
  }

  pub fn fail_attribute(mut self, attribute: IconicAttribute) -> Self {
    self.fail_attribute = Some(attribute);
    self
  }

  pub fn with_client_size(mut self, size: impl Into<Size>) -> Self {
    self.client_size = size.into();
    self
  }

  pub fn journal(&self) -> Journal {
    self.journal.borrow().clone()
  }

  fn submission(
    &self,
    window: WindowId,
    bitmap: &MockBitmap,
    client_offset: Option<Position>,
  ) -> Submission {
    Submission {
      window,
      size: bitmap.header.size(),
      pixels: bitmap.pixels.clone(),
      client_offset,
      surfaces_live: self.journal.borrow().surfaces_live,
    }
  }
}

pub(crate) struct MockSurface {
  journal: Rc<RefCell<Journal>>,
}

impl Drop for MockSurface {
  fn drop(&mut self) {
    self.journal.borrow_mut().surfaces_live -= 1;
  }
}

pub(crate) struct MockBitmap {
  journal: Rc<RefCell<Journal>>,
  header: DibHeader,
  pixels: Vec<u8>,
}

impl DibSection for MockBitmap {
  fn header(&self) -> &DibHeader {
    &self.header
  }

  fn pixels_mut(&mut self) -> &mut [u8] {
    &mut self.pixels
  }
}

impl Drop for MockBitmap {
  fn drop(&mut self) {
    self.journal.borrow_mut().bitmaps_live -= 1;
  }
}

impl Compositor for MockCompositor {
  type Bitmap = MockBitmap;
  type Surface = MockSurface;

  fn set_window_attribute(
    &self,
    window: WindowId,
    attribute: IconicAttribute,
    enabled: bool,
  ) -> ThumbnailResult<()> {
    if self.fail_attribute == Some(attribute) {
      return Err(ThumbnailError::Compositor {
        call: "DwmSetWindowAttribute",
        code: 0x8007_0057_u32 as i32,
      });
    }
    self
      .journal
      .borrow_mut()
      .attributes
      .push((window, attribute, enabled));
    Ok(())
  }

  fn create_surface(&self) -> ThumbnailResult<Self::Surface> {
    if self.fail_surface {
      return Err(ThumbnailError::DeviceContext);
    }
    let mut journal = self.journal.borrow_mut();
    journal.surfaces_created += 1;
    journal.surfaces_live += 1;
    Ok(MockSurface {
      journal: self.journal.clone(),
    })
  }

  fn create_bitmap(
    &self,
    _surface: &Self::Surface,
    header: DibHeader,
  ) -> ThumbnailResult<Self::Bitmap> {
    if self.fail_bitmap {
      return Err(ThumbnailError::Bitmap);
    }
    let mut journal = self.journal.borrow_mut();
    journal.bitmaps_created += 1;
    journal.bitmaps_live += 1;
    Ok(MockBitmap {
      journal: self.journal.clone(),
      header,
      pixels: vec![0; header.byte_len()],
    })
  }

  fn set_iconic_thumbnail(&self, window: WindowId, bitmap: &Self::Bitmap) -> ThumbnailResult<()> {
    let submission = self.submission(window, bitmap, None);
    self.journal.borrow_mut().thumbnails.push(submission);
    if self.fail_submit {
      return Err(ThumbnailError::Compositor {
        call: "DwmSetIconicThumbnail",
        code: 0x8000_4005_u32 as i32,
      });
    }
    Ok(())
  }

  fn set_iconic_live_preview(
    &self,
    window: WindowId,
    bitmap: &Self::Bitmap,
    client_offset: Option<Position>,
  ) -> ThumbnailResult<()> {
    let submission = self.submission(window, bitmap, client_offset);
    self.journal.borrow_mut().live_previews.push(submission);
    if self.fail_submit {
      return Err(ThumbnailError::Compositor {
        call: "DwmSetIconicLivePreviewBitmap",
        code: 0x8000_4005_u32 as i32,
      });
    }
    Ok(())
  }

  fn invalidate_iconic_bitmaps(&self, window: WindowId) -> ThumbnailResult<()> {
    self.journal.borrow_mut().invalidations.push(window);
    Ok(())
  }

  fn client_size(&self, _window: WindowId) -> ThumbnailResult<Size> {
    Ok(self.client_size)
  }
}
