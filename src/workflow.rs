use anyhow::{Context, Result};
use tracing::{error, info};

use aidfind::ui::theme;
use aidfind::{App, Dataset, SessionOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates loading the dataset and running the interactive session.
pub(crate) struct DirectoryWorkflow {
    app: App,
}

impl DirectoryWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            data_path,
            categories,
            title,
            theme: theme_name,
        } = config;

        let dataset = Dataset::load(&data_path)
            .inspect_err(|err| error!(path = %data_path.display(), %err, "dataset load failed"))
            .with_context(|| format!("failed to load dataset {}", data_path.display()))?;
        info!(
            path = %data_path.display(),
            records = dataset.len(),
            "dataset loaded"
        );

        let categories = categories.unwrap_or_else(|| dataset.derive_categories());

        let mut app = App::new(dataset, categories);
        app.set_title(title);
        if let Some(theme) = theme_name.as_deref().and_then(theme::by_name) {
            app.set_theme(theme);
        }

        Ok(Self { app })
    }

    pub(crate) fn run(mut self) -> Result<SessionOutcome> {
        self.app.run()
    }
}
