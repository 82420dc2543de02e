use std::path::PathBuf;

use thiserror::Error;

/// Échecs de chargement d'une image.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The path does not point to a readable file.
    #[error("Fichier introuvable : {}", path.display())]
    NotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The file exists but the image library could not decode it.
    #[error("Impossible de décoder {}", path.display())]
    Decode {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
}
