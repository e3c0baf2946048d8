use std::ffi::c_void;

use tracing::*;
use windows::Win32::{
  Foundation::{BOOL, HANDLE, HWND, POINT, RECT},
  Graphics::{
    Dwm::{
      DwmInvalidateIconicBitmaps,
      DwmSetIconicLivePreviewBitmap,
      DwmSetIconicThumbnail,
      DwmSetWindowAttribute,
      DWMWINDOWATTRIBUTE,
    },
    Gdi::{
      CreateCompatibleDC,
      CreateDIBSection,
      DeleteDC,
      DeleteObject,
      BITMAPINFO,
      BITMAPINFOHEADER,
      BI_RGB,
      DIB_RGB_COLORS,
      HBITMAP,
      HDC,
      HGDIOBJ,
    },
  },
  UI::WindowsAndMessaging::GetClientRect,
};

use super::{Compositor, DibSection, IconicAttribute};
use crate::{
  bitmap::DibHeader,
  debug::{error::ThumbnailError, ThumbnailResult},
  geometry::{Position, Size, WindowId},
};

fn hwnd(window: WindowId) -> HWND {
  HWND(window.0 as _)
}

fn compositor_error(call: &'static str, error: windows::core::Error) -> ThumbnailError {
  ThumbnailError::Compositor {
    call,
    code: error.code().0,
  }
}

/// DWM and GDI. Must be used from the thread that owns the window.
#[derive(Default, Debug, Copy, Clone)]
pub struct Win32Compositor;

/// Memory device context from `CreateCompatibleDC`, deleted on drop.
pub struct MemoryDc(HDC);

impl MemoryDc {
  pub fn hdc(&self) -> HDC {
    self.0
  }
}

impl Drop for MemoryDc {
  fn drop(&mut self) {
    if !unsafe { DeleteDC(self.0) }.as_bool() {
      warn!("failed to delete thumbnail device context");
    }
  }
}

/// DIB section from `CreateDIBSection`, deleted on drop.
pub struct Win32Bitmap {
  handle: HBITMAP,
  bits: *mut u8,
  header: DibHeader,
}

impl Win32Bitmap {
  pub fn handle(&self) -> HBITMAP {
    self.handle
  }
}

impl DibSection for Win32Bitmap {
  fn header(&self) -> &DibHeader {
    &self.header
  }

  fn pixels_mut(&mut self) -> &mut [u8] {
    // the section stays mapped until DeleteObject in drop
    unsafe { std::slice::from_raw_parts_mut(self.bits, self.header.byte_len()) }
  }
}

impl Drop for Win32Bitmap {
  fn drop(&mut self) {
    if !unsafe { DeleteObject(HGDIOBJ(self.handle.0)) }.as_bool() {
      warn!("failed to delete thumbnail bitmap");
    }
  }
}

impl Compositor for Win32Compositor {
  type Bitmap = Win32Bitmap;
  type Surface = MemoryDc;

  fn set_window_attribute(
    &self,
    window: WindowId,
    attribute: IconicAttribute,
    enabled: bool,
  ) -> ThumbnailResult<()> {
    let value = BOOL::from(enabled);
    unsafe {
      DwmSetWindowAttribute(
        hwnd(window),
        DWMWINDOWATTRIBUTE(attribute as i32),
        std::ptr::addr_of!(value) as *const c_void,
        std::mem::size_of::<BOOL>() as u32,
      )
    }
    .map_err(|error| compositor_error("DwmSetWindowAttribute", error))
  }

  fn create_surface(&self) -> ThumbnailResult<Self::Surface> {
    let hdc = unsafe { CreateCompatibleDC(HDC::default()) };
    if hdc.is_invalid() {
      return Err(ThumbnailError::DeviceContext);
    }
    Ok(MemoryDc(hdc))
  }

  fn create_bitmap(
    &self,
    surface: &Self::Surface,
    header: DibHeader,
  ) -> ThumbnailResult<Self::Bitmap> {
    let bmi = BITMAPINFO {
      bmiHeader: BITMAPINFOHEADER {
        biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
        biWidth: header.width,
        biHeight: header.height,
        biPlanes: header.planes,
        biBitCount: header.bit_count,
        biCompression: BI_RGB.0,
        ..Default::default()
      },
      ..Default::default()
    };

    let mut bits: *mut c_void = std::ptr::null_mut();
    let handle = unsafe {
      CreateDIBSection(
        surface.hdc(),
        &bmi,
        DIB_RGB_COLORS,
        &mut bits,
        HANDLE::default(),
        0,
      )
    }
    .map_err(|error| {
      error!("CreateDIBSection: {error}");
      ThumbnailError::Bitmap
    })?;

    let bitmap = Win32Bitmap {
      handle,
      bits: bits.cast(),
      header,
    };
    if bitmap.bits.is_null() {
      return Err(ThumbnailError::Bitmap);
    }

    Ok(bitmap)
  }

  fn set_iconic_thumbnail(&self, window: WindowId, bitmap: &Self::Bitmap) -> ThumbnailResult<()> {
    unsafe { DwmSetIconicThumbnail(hwnd(window), bitmap.handle(), 0) }
      .map_err(|error| compositor_error("DwmSetIconicThumbnail", error))
  }

  fn set_iconic_live_preview(
    &self,
    window: WindowId,
    bitmap: &Self::Bitmap,
    client_offset: Option<Position>,
  ) -> ThumbnailResult<()> {
    let client = client_offset.map(|offset| POINT {
      x: offset.x,
      y: offset.y,
    });
    unsafe {
      DwmSetIconicLivePreviewBitmap(
        hwnd(window),
        bitmap.handle(),
        client.as_ref().map(|point| point as *const POINT),
        0,
      )
    }
    .map_err(|error| compositor_error("DwmSetIconicLivePreviewBitmap", error))
  }

  fn invalidate_iconic_bitmaps(&self, window: WindowId) -> ThumbnailResult<()> {
    unsafe { DwmInvalidateIconicBitmaps(hwnd(window)) }
      .map_err(|error| compositor_error("DwmInvalidateIconicBitmaps", error))
  }

  fn client_size(&self, window: WindowId) -> ThumbnailResult<Size> {
    let mut rect = RECT::default();
    unsafe { GetClientRect(hwnd(window), std::ptr::addr_of_mut!(rect)) }?;
    Ok(Size::new(
      (rect.right - rect.left).max(0) as u32,
      (rect.bottom - rect.top).max(0) as u32,
    ))
  }
}
