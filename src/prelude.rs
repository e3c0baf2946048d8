#[cfg(windows)]
pub use crate::compositor::win32::Win32Compositor;
pub use crate::{
  compositor::{Compositor, DibSection, IconicAttribute},
  debug::{error::ThumbnailError, ThumbnailResult},
  geometry::{Position, Size, WindowId},
  message::{
    max_height,
    max_width,
    message_kind,
    sdl::SdlSysWmMsg,
    IconicRequest,
    RawMessage,
    SystemMessage,
  },
  pixels::{ChannelOrder, Image, PixelLayout},
  settings::ThumbnailSettings,
  thumbnail::{IconicWindow, Response},
};
