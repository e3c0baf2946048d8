use crate::pixels::{ChannelOrder, PixelLayout};

/// How the host lays out the pixels it hands over, and which iconic
/// requests get answered.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ThumbnailSettings {
  pub pixel_layout: PixelLayout,
  pub channel_order: ChannelOrder,
  pub live_preview: bool,
}

impl Default for ThumbnailSettings {
  fn default() -> Self {
    let pixel_layout = PixelLayout::default();
    let channel_order = ChannelOrder::default();
    let live_preview = true;

    Self {
      pixel_layout,
      channel_order,
      live_preview,
    }
  }
}

impl ThumbnailSettings {
  /// Settings for buffers read back from an OpenGL framebuffer with
  /// `GL_RGBA`/`GL_UNSIGNED_BYTE`.
  pub fn gl_read_pixels() -> Self {
    Self::default()
      .with_pixel_layout(PixelLayout::BottomUp)
      .with_channel_order(ChannelOrder::Rgba)
  }

  pub fn with_pixel_layout(mut self, pixel_layout: PixelLayout) -> Self {
    self.pixel_layout = pixel_layout;
    self
  }

  pub fn with_channel_order(mut self, channel_order: ChannelOrder) -> Self {
    self.channel_order = channel_order;
    self
  }

  pub fn with_live_preview(mut self, live_preview: bool) -> Self {
    self.live_preview = live_preview;
    self
  }
}
