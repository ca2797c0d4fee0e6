use std::path::PathBuf;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) data_path: PathBuf,
    pub(crate) categories: Option<Vec<String>>,
    pub(crate) title: String,
    pub(crate) theme: Option<String>,
}

impl ResolvedConfig {
    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Dataset: {}", self.data_path.display());
        match &self.categories {
            Some(categories) => println!("  Categories: {}", categories.join(", ")),
            None => println!("  Categories: (derived from the dataset)"),
        }
        println!("  Title: {}", self.title);
        println!(
            "  Theme: {}",
            self.theme.as_deref().unwrap_or("(default)")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prints_without_panic() {
        let config = ResolvedConfig {
            data_path: PathBuf::from("/tmp/organizations.json"),
            categories: Some(vec!["Housing".into()]),
            title: "Ocala Resources".into(),
            theme: None,
        };

        config.print_summary();
    }
}
