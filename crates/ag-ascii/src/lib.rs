//! ASCII conversion engine for asciigram.
//!
//! Maps pixels to glyphs of a [`Ramp`](ag_core::Ramp) and assembles the
//! resulting character grid.

pub mod quantizer;
pub mod render;

pub use quantizer::{Quantizer, bucket_index, select_char};
pub use render::render;
