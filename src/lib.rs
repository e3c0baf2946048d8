//! Application-drawn taskbar thumbnails and live previews for windows
//! managed by SDL2 or any `raw-window-handle` library.
//!
//! The flow is: [`IconicWindow::enable_iconic_representation`] once after
//! the window is created, then [`IconicWindow::handle_message`] for every
//! system message the host receives. DWM answers with
//! [`WM_DWMSENDICONICTHUMBNAIL`](message::WM_DWMSENDICONICTHUMBNAIL) when
//! the taskbar needs a thumbnail.
//!
//! Decoding and pixel conversion are plain functions available on every
//! platform; the DWM/GDI backend only exists on Windows.
//!
//! [`IconicWindow::enable_iconic_representation`]: thumbnail::IconicWindow::enable_iconic_representation
//! [`IconicWindow::handle_message`]: thumbnail::IconicWindow::handle_message
#![deny(unsafe_op_in_unsafe_fn)]

pub mod bitmap;
pub mod compositor;
pub mod debug;
pub mod geometry;
pub mod message;
pub mod pixels;
pub mod prelude;
pub mod settings;
pub mod thumbnail;
pub mod utilities;
