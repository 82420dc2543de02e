use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ag_ascii::quantizer::Quantizer;
use ag_core::config::RenderConfig;
use ag_core::frame::AsciiGrid;
use anyhow::{Context, Result};

/// Charge, redimensionne et convertit une image en grille ASCII.
///
/// # Errors
/// Returns an error if the image cannot be decoded, the resize fails, or the
/// configured ramp is empty.
pub fn convert(image: &Path, width: u32, height: u32, config: &RenderConfig) -> Result<AsciiGrid> {
    let frame = ag_source::open(image)?;
    log::info!(
        "Image chargée : {} ({}×{})",
        image.display(),
        frame.width,
        frame.height
    );

    let resized = ag_source::resize(&frame, width, height)
        .with_context(|| format!("Redimensionnement vers {width}×{height} impossible"))?;

    let ramp = config.ramp()?;
    log::debug!(
        "Rampe {:?} ({} glyphes, invert={}), sentinel={}",
        config.charset,
        ramp.len(),
        config.invert,
        config.sentinel
    );
    let quantizer = Quantizer::new(ramp, config.sentinel);

    let grid = ag_ascii::render(&resized, &quantizer, config.parallel);
    log::info!("Rendu terminé : {}×{}", grid.width, grid.height);
    Ok(grid)
}

/// Écrit la grille suivie d'une ligne vide finale.
///
/// # Errors
/// Propagates any I/O error from `out`.
pub fn write_frame<W: Write>(out: &mut W, grid: &AsciiGrid) -> io::Result<()> {
    write!(out, "{grid}")?;
    writeln!(out)?;
    out.flush()
}

/// Envoie la grille vers `output`, ou vers stdout si absent.
///
/// # Errors
/// Returns an error if the file cannot be created or a write fails.
pub fn emit(grid: &AsciiGrid, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Impossible de créer {}", path.display()))?;
        write_frame(&mut BufWriter::new(file), grid)
            .with_context(|| format!("Écriture dans {} échouée", path.display()))?;
        log::info!("Sortie écrite dans {}", path.display());
    } else {
        let stdout = io::stdout();
        write_frame(&mut stdout.lock(), grid).context("Écriture sur stdout échouée")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_source::DecodeError;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn print(grid: &AsciiGrid) -> String {
        let mut out = Vec::new();
        write_frame(&mut out, grid).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn one_pixel(dir: &Path, name: &str, rgb: [u8; 3]) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(1, 1, Rgb(rgb)).save(&path).unwrap();
        path
    }

    #[test]
    fn black_pixel_prints_darkest_glyph() {
        let dir = tempfile::tempdir().unwrap();
        let path = one_pixel(dir.path(), "black.png", [0, 0, 0]);
        let grid = convert(&path, 1, 1, &RenderConfig::default()).unwrap();
        assert_eq!(print(&grid), "#\n\n");
    }

    #[test]
    fn white_pixel_prints_lightest_glyph() {
        let dir = tempfile::tempdir().unwrap();
        let path = one_pixel(dir.path(), "white.png", [255, 255, 255]);
        let config = RenderConfig {
            charset: "@o.".into(),
            ..RenderConfig::default()
        };
        let grid = convert(&path, 1, 1, &config).unwrap();
        assert_eq!(print(&grid), ".\n\n");
    }

    #[test]
    fn output_has_requested_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        RgbImage::from_fn(50, 30, |x, _| Rgb([(x * 5) as u8; 3]))
            .save(&path)
            .unwrap();

        let grid = convert(&path, 12, 5, &RenderConfig::default()).unwrap();
        let text = print(&grid);
        assert!(text.ends_with("\n\n"));
        let rows: Vec<&str> = text.trim_end_matches('\n').split('\n').collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.chars().count() == 12));
    }

    #[test]
    fn parallel_output_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grad.png");
        RgbImage::from_fn(40, 40, |x, y| Rgb([(x * 6) as u8, (y * 6) as u8, 90]))
            .save(&path)
            .unwrap();

        let serial = convert(&path, 20, 10, &RenderConfig::default()).unwrap();
        let config = RenderConfig {
            parallel: true,
            ..RenderConfig::default()
        };
        assert_eq!(convert(&path, 20, 10, &config).unwrap(), serial);
    }

    #[test]
    fn transparent_image_is_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clear.png");
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0])).save(&path).unwrap();
        let config = RenderConfig {
            charset: "@".into(),
            ..RenderConfig::default()
        };
        let grid = convert(&path, 2, 2, &config).unwrap();
        assert_eq!(print(&grid), "  \n  \n\n");
    }

    #[test]
    fn missing_image_is_a_decode_error() {
        let err = convert(Path::new("/nonexistent.png"), 1, 1, &RenderConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DecodeError>(),
            Some(DecodeError::NotFound { .. })
        ));
    }

    #[test]
    fn emit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("art.txt");
        let mut grid = AsciiGrid::new(2, 1);
        grid.set(0, 0, '#');
        emit(&grid, Some(&out)).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "# \n\n");
    }
}
