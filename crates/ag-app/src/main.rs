use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    let level = cli.log_level.parse().ok();
    env_logger::Builder::new()
        .filter_level(level.unwrap_or(log::LevelFilter::Warn))
        .init();
    if level.is_none() {
        log::warn!("Niveau de log inconnu '{}', utilisation de warn.", cli.log_level);
    }

    // 3. Valider les combinaisons d'options
    cli.validate()?;

    // 4. Charger la config puis appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply(&mut config);

    // 5. Charger → redimensionner → quantifier
    let grid = pipeline::convert(&cli.image, cli.width, cli.height, &config)?;

    // 6. Sortie
    pipeline::emit(&grid, cli.output.as_deref())
}

/// Resolve config: --config if given, built-in defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<ag_core::config::RenderConfig> {
    if let Some(ref path) = cli.config {
        log::debug!("Chargement de la config {}", path.display());
        ag_core::config::load_config(path)
    } else {
        Ok(ag_core::config::RenderConfig::default())
    }
}
