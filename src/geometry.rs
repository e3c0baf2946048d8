#[cfg(all(feature = "rwh_05", not(feature = "rwh_06")))]
use rwh_05::{HasRawWindowHandle, RawWindowHandle};
#[cfg(all(feature = "rwh_06", not(feature = "rwh_05")))]
use rwh_06::{HasWindowHandle, RawWindowHandle};

#[cfg(any(feature = "rwh_05", feature = "rwh_06"))]
use crate::debug::{error::ThumbnailError, ThumbnailResult};

#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Size {
  pub width: u32,
  pub height: u32,
}

impl Size {
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }

  pub fn is_empty(&self) -> bool {
    self.width == 0 || self.height == 0
  }

  pub fn area(&self) -> u64 {
    self.width as u64 * self.height as u64
  }
}

impl From<(u32, u32)> for Size {
  fn from(value: (u32, u32)) -> Self {
    Self {
      width: value.0,
      height: value.1,
    }
  }
}

impl From<[u32; 2]> for Size {
  fn from(value: [u32; 2]) -> Self {
    Self {
      width: value[0],
      height: value[1],
    }
  }
}

impl From<Size> for (u32, u32) {
  fn from(val: Size) -> Self {
    (val.width, val.height)
  }
}

impl From<Size> for [u32; 2] {
  fn from(val: Size) -> Self {
    [val.width, val.height]
  }
}

/// Offset of the client area inside a live preview bitmap.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
  pub x: i32,
  pub y: i32,
}

impl Position {
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }
}

impl From<(i32, i32)> for Position {
  fn from(value: (i32, i32)) -> Self {
    Self {
      x: value.0,
      y: value.1,
    }
  }
}

/// An OS window handle. The window is owned by the host; this crate only
/// refers to it.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct WindowId(pub isize);

impl WindowId {
  pub fn from_raw(hwnd: *mut std::ffi::c_void) -> Self {
    Self(hwnd as isize)
  }

  pub fn is_null(&self) -> bool {
    self.0 == 0
  }

  #[cfg(all(feature = "rwh_06", not(feature = "rwh_05")))]
  pub fn from_window(window: &impl HasWindowHandle) -> ThumbnailResult<Self> {
    let handle = window
      .window_handle()
      .map_err(|_| ThumbnailError::UnsupportedHandle)?;
    match handle.as_raw() {
      RawWindowHandle::Win32(handle) => Ok(Self(handle.hwnd.get())),
      _ => Err(ThumbnailError::UnsupportedHandle),
    }
  }

  #[cfg(all(feature = "rwh_05", not(feature = "rwh_06")))]
  pub fn from_window(window: &impl HasRawWindowHandle) -> ThumbnailResult<Self> {
    match window.raw_window_handle() {
      RawWindowHandle::Win32(handle) if !handle.hwnd.is_null() => {
        Ok(Self::from_raw(handle.hwnd))
      }
      _ => Err(ThumbnailError::UnsupportedHandle),
    }
  }
}
