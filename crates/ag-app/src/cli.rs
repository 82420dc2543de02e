use std::path::PathBuf;

use ag_core::charset::{Ramp, preset_names};
use ag_core::config::RenderConfig;
use clap::Parser;
use thiserror::Error;

/// asciigram — convertit une image en art ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Largeur de la grille, en caractères.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Hauteur de la grille, en lignes. Aucune correction d'aspect n'est appliquée.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Rampe personnalisée, du glyphe le plus dense au plus clair.
    #[arg(long)]
    pub charset: Option<String>,

    /// Rampe intégrée : classic, standard, compact, blocks.
    #[arg(long)]
    pub preset: Option<String>,

    /// Inverser la rampe (fond clair).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Rendre les rangées en parallèle.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Fichier de configuration TOML.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Écrire dans un fichier plutôt que sur la sortie standard.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Options that parse individually but do not make sense together.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// Both ramp sources were given.
    #[error("--charset et --preset sont mutuellement exclusifs")]
    ConflictingRamp,

    /// `--charset ""`.
    #[error("--charset ne peut pas être vide")]
    EmptyCharset,

    /// `--preset` names no built-in ramp.
    #[error("Preset inconnu : {name} (disponibles : {available})")]
    UnknownPreset {
        /// Requested name.
        name: String,
        /// Comma-separated known presets.
        available: String,
    },
}

impl Cli {
    /// Check option combinations clap cannot express on its own.
    ///
    /// # Errors
    /// Returns an [`ArgumentError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if self.charset.is_some() && self.preset.is_some() {
            return Err(ArgumentError::ConflictingRamp);
        }
        if self.charset.as_deref() == Some("") {
            return Err(ArgumentError::EmptyCharset);
        }
        if let Some(ref name) = self.preset {
            if Ramp::preset(name).is_err() {
                return Err(ArgumentError::UnknownPreset {
                    name: name.clone(),
                    available: preset_names().join(", "),
                });
            }
        }
        Ok(())
    }

    /// Apply CLI overrides on top of a loaded config.
    ///
    /// Flags only ever switch `invert` / `parallel` on; a config that enables
    /// them stays enabled.
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(ref charset) = self.charset {
            config.charset.clone_from(charset);
        } else if let Some(ramp) = self.preset.as_deref().and_then(|n| Ramp::preset(n).ok()) {
            config.charset = ramp.glyphs().iter().collect();
        }
        if self.invert {
            config.invert = true;
        }
        if self.parallel {
            config.parallel = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("asciigram").chain(args.iter().copied()))
    }

    #[test]
    fn positional_arguments() {
        let cli = parse(&["cat.png", "80", "40"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("cat.png"));
        assert_eq!((cli.width, cli.height), (80, 40));
        assert_eq!(cli.log_level, "warn");
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn missing_height_is_rejected() {
        let err = parse(&["cat.png", "80"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn non_numeric_width_is_rejected() {
        let err = parse(&["cat.png", "wide", "40"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(parse(&["cat.png", "80", "0"]).is_err());
    }

    #[test]
    fn charset_and_preset_conflict() {
        let cli = parse(&["a.png", "1", "1", "--charset", "@.", "--preset", "blocks"]).unwrap();
        assert_eq!(cli.validate(), Err(ArgumentError::ConflictingRamp));
    }

    #[test]
    fn empty_charset_is_rejected() {
        let cli = parse(&["a.png", "1", "1", "--charset", ""]).unwrap();
        assert_eq!(cli.validate(), Err(ArgumentError::EmptyCharset));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let cli = parse(&["a.png", "1", "1", "--preset", "neon"]).unwrap();
        assert!(matches!(
            cli.validate(),
            Err(ArgumentError::UnknownPreset { ref name, .. }) if name == "neon"
        ));
    }

    #[test]
    fn apply_overrides_config() {
        let cli = parse(&["a.png", "1", "1", "--preset", "compact", "--invert", "--parallel"])
            .unwrap();
        let mut config = RenderConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.charset, ag_core::charset::CHARSET_COMPACT);
        assert!(config.invert);
        assert!(config.parallel);
    }

    #[test]
    fn apply_keeps_config_when_flags_absent() {
        let cli = parse(&["a.png", "1", "1"]).unwrap();
        let mut config = RenderConfig {
            charset: "xo".into(),
            invert: true,
            ..RenderConfig::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.charset, "xo");
        assert!(config.invert);
    }
}
