use ag_core::error::CoreError;
use ag_core::frame::FrameBuffer;
use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize.
///
/// L'algorithme de rééchantillonnage est celui par défaut de la crate.
///
/// # Example
/// ```
/// use ag_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch image for source (owned buffer to avoid the mut borrow issue).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns an error if either buffer has a zero dimension or the resize
    /// operation fails.
    ///
    /// # Example
    /// ```
    /// use ag_source::resize::Resizer;
    /// use ag_core::frame::FrameBuffer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(100, 100);
    /// let mut dst = FrameBuffer::new(50, 50);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &FrameBuffer, dst: &mut FrameBuffer) -> Result<()> {
        for fb in [src, &*dst] {
            if fb.width == 0 || fb.height == 0 {
                return Err(CoreError::InvalidDimensions {
                    width: fb.width,
                    height: fb.height,
                }
                .into());
            }
        }
        dst.has_alpha = src.has_alpha;

        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        // fast_image_resize exige &mut sur la source
        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x4)
                .context("Invalid source dimensions")?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x4)
                .context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Redimensionne `src` vers une grille `width`×`height` (un pixel par cellule).
///
/// # Errors
/// Returns an error if a dimension is zero or the resize operation fails.
///
/// # Example
/// ```
/// use ag_source::resize::resize;
/// use ag_core::frame::FrameBuffer;
/// let src = FrameBuffer::new(100, 100);
/// let dst = resize(&src, 40, 20).unwrap();
/// assert_eq!((dst.width, dst.height), (40, 20));
/// ```
pub fn resize(src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height }.into());
    }
    log::debug!(
        "Resize {}×{} → {width}×{height}",
        src.width,
        src.height
    );
    let mut dst = FrameBuffer::new(width, height);
    Resizer::new().resize_into(src, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::frame::Pixel;

    fn solid(width: u32, height: u32, pixel: Pixel) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                fb.set_pixel(x, y, pixel);
            }
        }
        fb
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = FrameBuffer::new(4, 4);
        let err = resize(&src, 0, 3).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn empty_source_is_rejected() {
        let src = FrameBuffer::new(0, 0);
        assert!(resize(&src, 2, 2).is_err());
    }

    #[test]
    fn same_size_is_a_copy() {
        let mut src = FrameBuffer::new(2, 1);
        src.set_pixel(1, 0, Pixel::rgb(1, 2, 3));
        let dst = resize(&src, 2, 1).unwrap();
        assert_eq!(dst.data, src.data);
    }

    #[test]
    fn solid_color_survives_downscale() {
        let src = solid(16, 8, Pixel::rgb(255, 255, 255));
        let dst = resize(&src, 4, 2).unwrap();
        assert_eq!((dst.width, dst.height), (4, 2));
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(dst.pixel(x, y), Pixel::rgb(255, 255, 255));
            }
        }
    }

    #[test]
    fn alpha_flag_follows_source() {
        let mut src = solid(4, 4, Pixel::rgb(0, 0, 0));
        src.has_alpha = true;
        let dst = resize(&src, 2, 2).unwrap();
        assert!(dst.has_alpha);
    }

    #[test]
    fn resizer_is_reusable() {
        let mut r = Resizer::new();
        let src = solid(10, 10, Pixel::rgb(0, 0, 0));
        let mut a = FrameBuffer::new(5, 5);
        let mut b = FrameBuffer::new(3, 7);
        r.resize_into(&src, &mut a).unwrap();
        r.resize_into(&src, &mut b).unwrap();
        assert_eq!(b.pixel(2, 6), Pixel::rgb(0, 0, 0));
    }
}
