use std::fmt;

/// Un pixel tel que fourni par la bibliothèque d'image.
///
/// `alpha` vaut `None` quand l'image source n'a pas de canal alpha
/// (pixel considéré entièrement opaque).
///
/// # Example
/// ```
/// use ag_core::frame::Pixel;
/// let p = Pixel::rgb(10, 20, 30);
/// assert_eq!(p.alpha, None);
/// assert!(!p.is_transparent());
/// assert!(Pixel::rgba(10, 20, 30, 0).is_transparent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red [0, 255].
    pub r: u8,
    /// Green [0, 255].
    pub g: u8,
    /// Blue [0, 255].
    pub b: u8,
    /// Alpha [0, 255], or `None` when the source has no transparency.
    pub alpha: Option<u8>,
}

impl Pixel {
    /// Opaque pixel without an alpha channel.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Pixel with an explicit alpha value.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(a),
        }
    }

    /// True only for an explicit alpha of zero.
    #[inline(always)]
    #[must_use]
    pub const fn is_transparent(&self) -> bool {
        matches!(self.alpha, Some(0))
    }
}

/// Buffer de pixels décodé.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel. `has_alpha`
/// indique si l'image d'origine portait un canal alpha ; sinon l'octet
/// alpha du buffer est ignoré par [`FrameBuffer::pixel`].
///
/// # Example
/// ```
/// use ag_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Whether the decoded source carried an alpha channel.
    pub has_alpha: bool,
}

impl FrameBuffer {
    /// Crée un buffer noir opaque, sans canal alpha, aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            data,
            width,
            height,
            has_alpha: false,
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// Returns `None` if `data` is not exactly `width * height * 4` bytes.
    #[must_use]
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32, has_alpha: bool) -> Option<Self> {
        (data.len() == width as usize * height as usize * 4).then_some(Self {
            data,
            width,
            height,
            has_alpha,
        })
    }

    /// Écrit le pixel (x, y). Le canal alpha n'est conservé que si
    /// `has_alpha` est vrai ; sinon l'octet vaut 255.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::{FrameBuffer, Pixel};
    /// let mut fb = FrameBuffer::new(2, 2);
    /// fb.set_pixel(1, 1, Pixel::rgb(1, 2, 3));
    /// assert_eq!(fb.pixel(1, 1), Pixel::rgb(1, 2, 3));
    /// ```
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        let idx = self.offset(x, y);
        self.data[idx] = pixel.r;
        self.data[idx + 1] = pixel.g;
        self.data[idx + 2] = pixel.b;
        self.data[idx + 3] = pixel.alpha.unwrap_or(255);
    }

    /// Accès au pixel (x, y).
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::{FrameBuffer, Pixel};
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), Pixel::rgb(0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.offset(x, y);
        if idx + 3 >= self.data.len() {
            return Pixel::rgba(0, 0, 0, 0);
        }
        let alpha = self.has_alpha.then_some(self.data[idx + 3]);
        Pixel {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
            alpha,
        }
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Grille de sortie ASCII : une ligne de texte par rangée de pixels.
///
/// Construite une fois par rendu puis seulement lue. `Display` écrit chaque
/// rangée suivie d'un `'\n'`.
///
/// # Example
/// ```
/// use ag_core::frame::AsciiGrid;
/// let mut grid = AsciiGrid::new(3, 2);
/// grid.set(0, 0, '@');
/// assert_eq!(grid.get(0, 0), '@');
/// assert_eq!(grid.to_string(), "@  \n   \n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl AsciiGrid {
    /// Crée une grille remplie d'espaces.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::AsciiGrid;
    /// let grid = AsciiGrid::new(80, 24);
    /// assert_eq!(grid.cells.len(), 80 * 24);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set a glyph at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Glyph at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Iterate rows as glyph slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl fmt::Display for AsciiGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.rows() {
            for &ch in row {
                fmt::Write::write_char(f, ch)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
