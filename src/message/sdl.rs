//! Layout mirror of SDL2's `SDL_SysWMmsg` for the Windows video subsystem.
//!
//! SDL only delivers these through `SDL_SYSWMEVENT`, which must be turned on
//! with `SDL_EventState(SDL_SYSWMEVENT, SDL_ENABLE)` before DWM requests
//! can reach the application.

use std::ffi::{c_int, c_void};

use super::SystemMessage;
use crate::{
  debug::{error::ThumbnailError, ThumbnailResult},
  geometry::WindowId,
  thumbnail_error,
};

/// `SDL_SYSWM_WINDOWS` from `SDL_SYSWM_TYPE`.
pub const SDL_SYSWM_WINDOWS: c_int = 1;

#[repr(C)]
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SdlVersion {
  pub major: u8,
  pub minor: u8,
  pub patch: u8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SdlWindowsMsg {
  pub hwnd: *mut c_void,
  pub msg: u32,
  pub w_param: usize,
  pub l_param: isize,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct SdlSysWmMsg {
  pub version: SdlVersion,
  pub subsystem: c_int,
  pub win: SdlWindowsMsg,
}

impl SdlSysWmMsg {
  /// Borrows the message behind `SDL_SysWMEvent::msg`.
  ///
  /// # Safety
  ///
  /// `ptr` must be null or point to a live `SDL_SysWMmsg` that outlives
  /// `'a`. SDL frees it once the event is consumed.
  pub unsafe fn from_ptr<'a>(ptr: *const c_void) -> ThumbnailResult<&'a Self> {
    let message = unsafe { ptr.cast::<Self>().as_ref() }
      .ok_or_else(|| thumbnail_error!("system message pointer was null"))?;

    if message.subsystem != SDL_SYSWM_WINDOWS {
      return Err(ThumbnailError::UnsupportedSubsystem(message.subsystem));
    }

    Ok(message)
  }
}

impl SystemMessage for SdlSysWmMsg {
  fn window(&self) -> WindowId {
    WindowId::from_raw(self.win.hwnd)
  }

  fn message(&self) -> u32 {
    self.win.msg
  }

  fn w_param(&self) -> usize {
    self.win.w_param
  }

  fn l_param(&self) -> isize {
    self.win.l_param
  }
}

#[cfg(test)]
mod tests {
  use std::mem::{offset_of, size_of};

  use super::*;
  use crate::{
    geometry::Size,
    message::{max_height, max_width, IconicRequest, WM_DWMSENDICONICTHUMBNAIL},
    utilities::make_long,
  };

  fn windows_message(subsystem: c_int) -> SdlSysWmMsg {
    SdlSysWmMsg {
      version: SdlVersion {
        major: 2,
        minor: 30,
        patch: 0,
      },
      subsystem,
      win: SdlWindowsMsg {
        hwnd: 0x4242 as *mut c_void,
        msg: WM_DWMSENDICONICTHUMBNAIL,
        w_param: 0,
        l_param: make_long(160, 90),
      },
    }
  }

  #[test]
  fn union_follows_subsystem() {
    assert_eq!(offset_of!(SdlSysWmMsg, subsystem), 4);
    assert_eq!(offset_of!(SdlSysWmMsg, win), 8);
    assert_eq!(offset_of!(SdlWindowsMsg, msg), size_of::<*mut c_void>());
  }

  #[test]
  fn reads_fields_through_pointer() {
    let raw = windows_message(SDL_SYSWM_WINDOWS);
    let message =
      unsafe { SdlSysWmMsg::from_ptr(std::ptr::addr_of!(raw).cast()) }.unwrap();

    assert_eq!(message.window(), WindowId(0x4242));
    assert_eq!(max_width(message), 160);
    assert_eq!(max_height(message), 90);
    assert_eq!(
      IconicRequest::collect(message),
      IconicRequest::Thumbnail {
        max_size: Size::new(160, 90)
      }
    );
  }

  #[test]
  fn rejects_null() {
    let result = unsafe { SdlSysWmMsg::from_ptr(std::ptr::null()) };
    assert!(matches!(result, Err(ThumbnailError::Error(_))));
  }

  #[test]
  fn rejects_other_subsystems() {
    let raw = windows_message(2);
    let result = unsafe { SdlSysWmMsg::from_ptr(std::ptr::addr_of!(raw).cast()) };
    assert!(matches!(result, Err(ThumbnailError::UnsupportedSubsystem(2))));
  }
}
