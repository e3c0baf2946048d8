//! Decoding of the DWM iconic requests out of raw window messages.
//!
//! DWM only sends these after the window opted in with
//! [`IconicWindow::enable_iconic_representation`](crate::thumbnail::IconicWindow::enable_iconic_representation).

use crate::{
  geometry::{Size, WindowId},
  utilities::{hi_word, lo_word},
};

pub mod sdl;

/// Sent when DWM needs a taskbar or Alt-Tab thumbnail. `lParam` carries
/// the maximum width in its high word and the maximum height in its low
/// word.
pub const WM_DWMSENDICONICTHUMBNAIL: u32 = 0x0323;
/// Sent when DWM needs a bitmap for the live preview (peek).
pub const WM_DWMSENDICONICLIVEPREVIEWBITMAP: u32 = 0x0326;

/// The parts of a platform window message this crate reads.
pub trait SystemMessage {
  fn window(&self) -> WindowId;
  fn message(&self) -> u32;
  fn w_param(&self) -> usize;
  fn l_param(&self) -> isize;
}

/// A window message with its fields already pulled out by the host.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RawMessage {
  pub window: WindowId,
  pub message: u32,
  pub w_param: usize,
  pub l_param: isize,
}

impl RawMessage {
  pub fn new(window: WindowId, message: u32, w_param: usize, l_param: isize) -> Self {
    Self {
      window,
      message,
      w_param,
      l_param,
    }
  }
}

impl SystemMessage for RawMessage {
  fn window(&self) -> WindowId {
    self.window
  }

  fn message(&self) -> u32 {
    self.message
  }

  fn w_param(&self) -> usize {
    self.w_param
  }

  fn l_param(&self) -> isize {
    self.l_param
  }
}

pub fn message_kind(message: &(impl SystemMessage + ?Sized)) -> u32 {
  message.message()
}

pub fn max_width(message: &(impl SystemMessage + ?Sized)) -> u32 {
  unpack_max_size(message.l_param()).width
}

pub fn max_height(message: &(impl SystemMessage + ?Sized)) -> u32 {
  unpack_max_size(message.l_param()).height
}

/// Splits the `lParam` of [`WM_DWMSENDICONICTHUMBNAIL`] into the maximum
/// thumbnail size.
pub fn unpack_max_size(l_param: isize) -> Size {
  let packed = l_param as u32;
  Size::new(hi_word(packed) as u32, lo_word(packed) as u32)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IconicRequest {
  Thumbnail { max_size: Size },
  LivePreview,
  None,
}

impl IconicRequest {
  pub fn collect(message: &(impl SystemMessage + ?Sized)) -> Self {
    match message.message() {
      WM_DWMSENDICONICTHUMBNAIL => Self::Thumbnail {
        max_size: unpack_max_size(message.l_param()),
      },
      WM_DWMSENDICONICLIVEPREVIEWBITMAP => Self::LivePreview,
      _ => Self::None,
    }
  }
}
