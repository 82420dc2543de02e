use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CHARSET_CLASSIC, Ramp};
use crate::error::CoreError;

/// Borne supérieure par défaut de la luminance (diviseur de quantification).
pub const DEFAULT_SENTINEL: u32 = 256;

/// Configuration du rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ag_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.sentinel, 256);
/// assert!(!config.invert);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Rampe de caractères (du plus dense au plus clair).
    pub charset: String,
    /// Inverser la rampe (pour fond clair).
    pub invert: bool,
    /// Rendu des rangées en parallèle (rayon).
    pub parallel: bool,
    /// Upper bound used as the quantization divisor.
    pub sentinel: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            charset: CHARSET_CLASSIC.to_string(),
            invert: false,
            parallel: false,
            sentinel: DEFAULT_SENTINEL,
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.sentinel = self.sentinel.clamp(1, 65_536);
    }

    /// Build the effective ramp: `charset`, reversed when `invert` is set.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyRamp`] if `charset` is empty.
    ///
    /// # Example
    /// ```
    /// use ag_core::config::RenderConfig;
    /// let config = RenderConfig { invert: true, ..RenderConfig::default() };
    /// assert_eq!(config.ramp().unwrap().get(0), ' ');
    /// ```
    pub fn ramp(&self) -> Result<Ramp, CoreError> {
        let ramp = Ramp::new(&self.charset)?;
        Ok(if self.invert { ramp.reversed() } else { ramp })
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    charset: Option<String>,
    preset: Option<String>,
    invert: Option<bool>,
    parallel: Option<bool>,
    sentinel: Option<u32>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML, names an unknown preset,
/// or sets both `charset` and `preset`.
///
/// # Example
/// ```
/// use ag_core::config::parse_config;
/// let config = parse_config("[render]\npreset = \"compact\"\n").unwrap();
/// assert_eq!(config.charset, "@%#*+=-:. ");
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RenderConfig::default();
    let Some(r) = file.render else {
        log::debug!("Pas de section [render], valeurs par défaut");
        return Ok(config);
    };

    match (r.charset, r.preset) {
        (Some(_), Some(_)) => {
            return Err(CoreError::Config(
                "`charset` et `preset` sont mutuellement exclusifs".into(),
            )
            .into());
        }
        (Some(v), None) => {
            Ramp::new(&v)?;
            config.charset = v;
        }
        (None, Some(name)) => {
            config.charset = Ramp::preset(&name)?.glyphs().iter().collect();
        }
        (None, None) => {}
    }
    if let Some(v) = r.invert {
        config.invert = v;
    }
    if let Some(v) = r.parallel {
        config.parallel = v;
    }
    if let Some(v) = r.sentinel {
        config.sentinel = v;
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ag_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))
}
