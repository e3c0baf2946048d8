use crate::debug::error::ThumbnailError;

pub mod error;

pub type ThumbnailResult<T> = Result<T, ThumbnailError>;
