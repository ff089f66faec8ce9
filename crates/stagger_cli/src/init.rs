//! Config scaffolding

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::StaggerConfig;

const HEADER: &str = "\
# Stagger configuration
#
# [animator]         how title text is wrapped
# [animator.timing]  delay of the first glyph and step between glyphs (seconds)
# [selection]        classes of the title elements animated by `stagger page`

";

/// Write a default stagger.toml to `path`
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let content = format!("{HEADER}{}", StaggerConfig::default().to_toml()?);
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote default config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_a_toml_comment() {
        let content = format!("{HEADER}{}", StaggerConfig::default().to_toml().unwrap());
        assert_eq!(
            StaggerConfig::from_toml(&content).unwrap(),
            StaggerConfig::default()
        );
    }
}
