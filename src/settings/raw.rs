use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use aidfind::ui::theme;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;
use super::util::{default_title_for, sanitize_categories};

const DEFAULT_DATA_FILE: &str = "organizations.json";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    data: DataSection,
    ui: UiSection,
}

/// Dataset configuration as it is read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
    path: Option<PathBuf>,
    categories: Option<Vec<String>>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    theme: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.data.clone() {
            self.data.path = Some(path);
        }
        if let Some(categories) = cli.categories.clone() {
            self.data.categories = Some(categories);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(name) = cli.theme.clone() {
            self.ui.theme = Some(name);
        }
    }

    /// Validate the combined values and produce the application-ready
    /// configuration.
    pub(super) fn resolve(self) -> Result<ResolvedConfig> {
        let data_path = resolve_data_path(self.data.path)?;

        let categories = self
            .data
            .categories
            .map(sanitize_categories)
            .filter(|categories| !categories.is_empty());

        if let Some(name) = self.ui.theme.as_deref() {
            ensure!(
                theme::by_name(name).is_some(),
                "unknown theme '{name}' (available: {})",
                theme::names().join(", ")
            );
        }

        let title = self
            .ui
            .title
            .unwrap_or_else(|| default_title_for(&data_path));

        Ok(ResolvedConfig {
            data_path,
            categories,
            title,
            theme: self.ui.theme,
        })
    }
}

fn resolve_data_path(path: Option<PathBuf>) -> Result<PathBuf> {
    let mut path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    if path.is_relative() {
        path = env::current_dir()
            .context("failed to resolve current directory for the dataset path")?
            .join(path);
    }

    let metadata = fs::metadata(&path)
        .with_context(|| format!("failed to inspect dataset file {}", path.display()))?;
    ensure!(metadata.is_file(), "dataset path must be a file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn raw_with_data(file: &NamedTempFile) -> RawConfig {
        RawConfig {
            data: DataSection {
                path: Some(file.path().to_path_buf()),
                categories: None,
            },
            ui: UiSection::default(),
        }
    }

    fn dataset_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"[]").expect("write");
        file
    }

    #[test]
    fn cli_overrides_replace_file_values() {
        let file = dataset_file();
        let mut raw = raw_with_data(&file);
        raw.ui.theme = Some("slate".into());

        let cli = CliArgs::parse_from(["aidfind", "--theme", "light"]);
        raw.apply_cli_overrides(&cli);
        let resolved = raw.resolve().expect("resolve");
        assert_eq!(resolved.theme.as_deref(), Some("light"));
    }

    #[test]
    fn unknown_themes_are_rejected() {
        let file = dataset_file();
        let mut raw = raw_with_data(&file);
        raw.ui.theme = Some("neon".into());
        assert!(raw.resolve().is_err());
    }

    #[test]
    fn missing_dataset_files_are_rejected() {
        let raw = RawConfig {
            data: DataSection {
                path: Some(PathBuf::from("/nonexistent/orgs.json")),
                categories: None,
            },
            ui: UiSection::default(),
        };
        assert!(raw.resolve().is_err());
    }

    #[test]
    fn blank_category_lists_fall_back_to_derivation() {
        let file = dataset_file();
        let mut raw = raw_with_data(&file);
        raw.data.categories = Some(vec!["  ".into(), String::new()]);
        let resolved = raw.resolve().expect("resolve");
        assert_eq!(resolved.categories, None);
    }
}
