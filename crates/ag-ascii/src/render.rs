use ag_core::frame::{AsciiGrid, FrameBuffer};
use rayon::prelude::*;

use crate::quantizer::Quantizer;

/// Convertit un buffer déjà redimensionné en grille ASCII, un glyphe par pixel.
///
/// Avec `parallel`, les rangées sont réparties sur le pool rayon ; la sortie
/// est identique au rendu séquentiel.
///
/// # Example
/// ```
/// use ag_core::frame::{FrameBuffer, Pixel};
/// use ag_ascii::quantizer::Quantizer;
/// use ag_ascii::render::render;
///
/// let mut frame = FrameBuffer::new(2, 1);
/// frame.set_pixel(1, 0, Pixel::rgb(255, 255, 255));
/// let grid = render(&frame, &Quantizer::default(), false);
/// assert_eq!(grid.to_string(), "# \n");
/// ```
#[must_use]
pub fn render(frame: &FrameBuffer, quantizer: &Quantizer, parallel: bool) -> AsciiGrid {
    let mut grid = AsciiGrid::new(frame.width, frame.height);
    if frame.width == 0 || frame.height == 0 {
        return grid;
    }

    let width = frame.width as usize;
    let fill_row = |(cy, row): (usize, &mut [char])| {
        for (cx, cell) in row.iter_mut().enumerate() {
            *cell = quantizer.map(frame.pixel(cx as u32, cy as u32));
        }
    };

    if parallel {
        grid.cells.par_chunks_mut(width).enumerate().for_each(fill_row);
    } else {
        grid.cells.chunks_mut(width).enumerate().for_each(fill_row);
    }

    log::debug!(
        "Rendu {}×{} ({} glyphes, parallel={parallel})",
        grid.width,
        grid.height,
        quantizer.ramp().len()
    );
    grid
}
