//! Image-library glue for asciigram: decoding and resizing.

pub mod error;
pub mod image;
pub mod resize;

pub use error::DecodeError;
pub use crate::image::open;
pub use crate::resize::resize;
