use ag_core::charset::Ramp;
use ag_core::frame::Pixel;

/// Poids identique des trois canaux. La somme (0.9999) n'atteint pas 1 :
/// le blanc pur donne une luminance de 254.
pub const CHANNEL_WEIGHT: f64 = 0.3333;

/// Luminance approximative d'un pixel : moyenne pondérée tronquée.
///
/// # Example
/// ```
/// use ag_ascii::quantizer::gray;
/// assert_eq!(gray(0, 0, 0), 0);
/// assert_eq!(gray(255, 255, 255), 254);
/// ```
#[inline(always)]
#[must_use]
pub fn gray(r: u8, g: u8, b: u8) -> u32 {
    (CHANNEL_WEIGHT * f64::from(r) + CHANNEL_WEIGHT * f64::from(g) + CHANNEL_WEIGHT * f64::from(b))
        .floor() as u32
}

/// Index de case pour une luminance donnée.
///
/// `unit = sentinel / n`, `i = floor(gray / unit)`, puis `i` est borné à
/// `n - 1`.
///
/// # Example
/// ```
/// use ag_ascii::quantizer::bucket_index;
/// assert_eq!(bucket_index(0, 9, 256), 0);
/// assert_eq!(bucket_index(255, 9, 256), 8);
/// ```
#[inline(always)]
#[must_use]
pub fn bucket_index(gray: u32, n: usize, sentinel: u32) -> usize {
    let last = n.saturating_sub(1);
    if n == 0 || sentinel == 0 {
        return last;
    }
    let unit = f64::from(sentinel) / n as f64;
    let i = (f64::from(gray) / unit).floor() as usize;
    i.min(last)
}

/// Choisit le glyphe d'un pixel.
///
/// Un pixel dont l'alpha vaut explicitement 0 donne toujours `' '`, quelle
/// que soit la rampe.
///
/// # Example
/// ```
/// use ag_core::{Pixel, Ramp};
/// use ag_ascii::quantizer::select_char;
/// let ramp = Ramp::new("#. ").unwrap();
/// assert_eq!(select_char(Pixel::rgb(0, 0, 0), &ramp, 256), '#');
/// assert_eq!(select_char(Pixel::rgba(0, 0, 0, 0), &ramp, 256), ' ');
/// ```
#[inline]
#[must_use]
pub fn select_char(pixel: Pixel, ramp: &Ramp, sentinel: u32) -> char {
    if pixel.is_transparent() {
        return ' ';
    }
    let g = gray(pixel.r, pixel.g, pixel.b);
    ramp.get(bucket_index(g, ramp.len(), sentinel))
}

/// Table précalculée luminance → glyphe pour une rampe et un diviseur.
///
/// Same output as [`select_char`] for every pixel, at O(1) per lookup.
///
/// # Example
/// ```
/// use ag_core::{Pixel, Ramp};
/// use ag_ascii::quantizer::Quantizer;
/// let q = Quantizer::new(Ramp::new("#. ").unwrap(), 256);
/// assert_eq!(q.map(Pixel::rgb(255, 255, 255)), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct Quantizer {
    ramp: Ramp,
    sentinel: u32,
    lut: [char; 256],
}

impl Quantizer {
    /// Build the table for `ramp` with divisor `sentinel`.
    #[must_use]
    pub fn new(ramp: Ramp, sentinel: u32) -> Self {
        let mut lut = [' '; 256];
        for (g, slot) in lut.iter_mut().enumerate() {
            *slot = ramp.get(bucket_index(g as u32, ramp.len(), sentinel));
        }
        Self {
            ramp,
            sentinel,
            lut,
        }
    }

    /// Glyph for a pixel.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, pixel: Pixel) -> char {
        if pixel.is_transparent() {
            return ' ';
        }
        self.map_gray(gray(pixel.r, pixel.g, pixel.b))
    }

    /// Glyph for an already computed luminance.
    #[inline(always)]
    #[must_use]
    pub fn map_gray(&self, gray: u32) -> char {
        self.lut[(gray as usize).min(255)]
    }

    /// The ramp this table was built from.
    #[must_use]
    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    /// Divisor used to size the buckets.
    #[must_use]
    pub fn sentinel(&self) -> u32 {
        self.sentinel
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(Ramp::default(), ag_core::config::DEFAULT_SENTINEL)
    }
}
