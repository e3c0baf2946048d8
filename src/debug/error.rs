use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbnailError {
  #[error("{0}")]
  Error(String),
  #[error("thumbnail size must not be empty (got {width}x{height})")]
  EmptySize { width: u32, height: u32 },
  #[error("thumbnail size {width}x{height} is too large for a bitmap")]
  SizeOverflow { width: u32, height: u32 },
  #[error("pixel buffer holds {actual} bytes but {expected} are required")]
  BufferTooShort { expected: usize, actual: usize },
  #[error("failed to create a memory device context for the thumbnail bitmap")]
  DeviceContext,
  #[error("failed to allocate the thumbnail bitmap")]
  Bitmap,
  #[error("{call} failed ({code:#010x})")]
  Compositor { call: &'static str, code: i32 },
  #[error("window handle is not a Win32 window handle")]
  UnsupportedHandle,
  #[error("system message did not come from the Windows video subsystem (subsystem {0})")]
  UnsupportedSubsystem(i32),
  #[cfg(windows)]
  #[error("{0}")]
  Win32Error(#[from] windows::core::Error),
}

#[macro_export]
macro_rules! thumbnail_error {
  () => {
    $crate::debug::error::ThumbnailError::Error("thumbnail error".to_string())
  };
  ($($arg:tt)*) => {{
    $crate::debug::error::ThumbnailError::Error(format!($($arg)*))
  }}
}
