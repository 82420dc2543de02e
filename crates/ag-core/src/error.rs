use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A ramp needs at least one glyph to quantize into.
    #[error("Ramp vide : au moins un caractère est requis")]
    EmptyRamp,

    /// Requested built-in ramp does not exist.
    #[error("Preset inconnu : {name} (disponibles : {available})")]
    UnknownPreset {
        /// Name that was requested.
        name: String,
        /// Comma-separated list of known presets.
        available: String,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
