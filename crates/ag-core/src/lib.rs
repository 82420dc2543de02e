//! Configuration, types, and shared structures for asciigram.
//!
//! This crate holds the pixel and grid types, the character ramps, and the
//! configuration logic shared across the asciigram workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::Ramp;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{AsciiGrid, FrameBuffer, Pixel};
