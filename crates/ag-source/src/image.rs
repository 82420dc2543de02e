use std::path::Path;

use ag_core::frame::FrameBuffer;

use crate::error::DecodeError;

/// Décode une image depuis le disque en buffer RGBA.
///
/// Tous les formats activés dans la crate `image` sont acceptés. Les images
/// sans canal alpha produisent un buffer avec `has_alpha == false`.
///
/// # Errors
/// Returns [`DecodeError::NotFound`] if `path` is not a file, or
/// [`DecodeError::Decode`] if the format is unsupported or the data corrupt.
///
/// # Example
/// ```no_run
/// use ag_source::image::open;
/// use std::path::Path;
/// let frame = open(Path::new("photo.png")).unwrap();
/// assert!(frame.width > 0);
/// ```
pub fn open(path: &Path) -> Result<FrameBuffer, DecodeError> {
    if !path.is_file() {
        return Err(DecodeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|source| DecodeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let has_alpha = img.color().has_alpha();
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!(
        "Image décodée : {} ({width}×{height}, alpha={has_alpha})",
        path.display()
    );

    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
        has_alpha,
    })
}
