use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use folio_core::config::GeneralConfig;
use folio_core::content::BUNDLED_CONTENT;
use folio_core::AppConfig;

/// Write the default config to `config_path` and the bundled content next to it
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    let content_path = config_path.with_file_name("portfolio.toml");

    for path in [config_path, content_path.as_path()] {
        if path.exists() && !force {
            bail!(
                "{} already exists.\nRun `folio init --force` to overwrite it.",
                path.display()
            );
        }
    }

    let config = AppConfig {
        general: GeneralConfig {
            content_path: Some(content_path.clone()),
            ..Default::default()
        },
        ..Default::default()
    };
    config.save_to(config_path)?;
    write_content(&content_path)?;

    info!(config = %config_path.display(), content = %content_path.display(), "initialized");
    println!("Wrote {}", config_path.display());
    println!("Wrote {}", content_path.display());
    println!("\nEdit the content file, then run `folio check`.");
    Ok(())
}

fn write_content(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, BUNDLED_CONTENT)?;
    Ok(())
}
