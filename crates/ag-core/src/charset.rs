use crate::error::CoreError;

/// 9 caractères — la rampe historique, du plus dense au plus clair.
pub const CHARSET_CLASSIC: &str = "#;:\",`'. ";

/// 70 caractères — Paul Bourke, résolution maximale (dense→clair).
pub const CHARSET_STANDARD: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// 10 caractères — compact, bon contraste.
pub const CHARSET_COMPACT: &str = "@%#*+=-:. ";

/// Blocs Unicode — pseudo-pixels.
pub const CHARSET_BLOCKS: &str = "█▓▒░ ";

/// Built-in ramps by name, in the order they are listed to users.
pub const PRESETS: &[(&str, &str)] = &[
    ("classic", CHARSET_CLASSIC),
    ("standard", CHARSET_STANDARD),
    ("compact", CHARSET_COMPACT),
    ("blocks", CHARSET_BLOCKS),
];

/// Ordered, immutable sequence of glyphs from "most ink" to "least ink".
///
/// Index 0 is what the darkest pixels render as; the last glyph is used for
/// the brightest ones.
///
/// # Example
/// ```
/// use ag_core::charset::Ramp;
/// let ramp = Ramp::new("#. ").unwrap();
/// assert_eq!(ramp.len(), 3);
/// assert_eq!(ramp.get(0), '#');
/// assert_eq!(ramp.last(), ' ');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ramp {
    glyphs: Vec<char>,
}

impl Ramp {
    /// Build a ramp from a string, one glyph per `char`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyRamp`] if `charset` is empty.
    pub fn new(charset: &str) -> Result<Self, CoreError> {
        let glyphs: Vec<char> = charset.chars().collect();
        if glyphs.is_empty() {
            return Err(CoreError::EmptyRamp);
        }
        Ok(Self { glyphs })
    }

    /// Look up a built-in ramp by name (`classic`, `standard`, `compact`, `blocks`).
    ///
    /// # Errors
    /// Returns [`CoreError::UnknownPreset`] if no preset has that name.
    ///
    /// # Example
    /// ```
    /// use ag_core::charset::Ramp;
    /// let ramp = Ramp::preset("compact").unwrap();
    /// assert_eq!(ramp.get(0), '@');
    /// assert!(Ramp::preset("nope").is_err());
    /// ```
    pub fn preset(name: &str) -> Result<Self, CoreError> {
        PRESETS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map_or_else(
                || {
                    Err(CoreError::UnknownPreset {
                        name: name.to_string(),
                        available: preset_names().join(", "),
                    })
                },
                |(_, charset)| Self::new(charset),
            )
    }

    /// Same glyphs in the opposite order, for light backgrounds.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut glyphs = self.glyphs.clone();
        glyphs.reverse();
        Self { glyphs }
    }

    /// Number of glyphs (N). Always ≥ 1.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Never true: construction rejects empty ramps.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at `index`, clamped to the last slot.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// Last (least dense) glyph.
    #[inline]
    #[must_use]
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// Whether `ch` is one of this ramp's glyphs.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains(&ch)
    }

    /// Position of `ch` in the ramp, if present.
    #[must_use]
    pub fn position(&self, ch: char) -> Option<usize> {
        self.glyphs.iter().position(|&c| c == ch)
    }

    /// Glyphs as a slice.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            glyphs: CHARSET_CLASSIC.chars().collect(),
        }
    }
}

/// Names of the built-in presets.
#[must_use]
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_charset_is_rejected() {
        assert_eq!(Ramp::new(""), Err(CoreError::EmptyRamp));
    }

    #[test]
    fn single_glyph_ramp_is_valid() {
        let ramp = Ramp::new("x").unwrap();
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp.get(0), 'x');
        assert_eq!(ramp.get(7), 'x');
    }

    #[test]
    fn default_is_classic() {
        let ramp = Ramp::default();
        assert_eq!(ramp.len(), 9);
        assert_eq!(ramp.get(0), '#');
        assert_eq!(ramp.last(), ' ');
    }

    #[test]
    fn every_preset_builds() {
        for name in preset_names() {
            let ramp = Ramp::preset(name).unwrap();
            assert!(!ramp.is_empty(), "preset {name} vide");
        }
        assert_eq!(Ramp::preset("standard").unwrap().len(), 70);
    }

    #[test]
    fn preset_lookup_ignores_case() {
        assert_eq!(Ramp::preset("BLOCKS").unwrap().get(0), '█');
    }

    #[test]
    fn unknown_preset_lists_available() {
        let err = Ramp::preset("neon").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("neon"));
        assert!(msg.contains("classic"));
    }

    #[test]
    fn reversed_swaps_ends() {
        let ramp = Ramp::new("#. ").unwrap().reversed();
        assert_eq!(ramp.get(0), ' ');
        assert_eq!(ramp.last(), '#');
        assert_eq!(ramp.position('.'), Some(1));
    }

    #[test]
    fn get_clamps_past_end() {
        let ramp = Ramp::new("ab").unwrap();
        assert_eq!(ramp.get(2), 'b');
        assert_eq!(ramp.get(usize::MAX), 'b');
    }
}
