use anyhow::Result;
use indexmap::IndexMap;

use crate::generator_config::GeneratorConfig;

/// Source of project templates and the engine that expands them
pub trait ProjectTemplates {
    /// Every known template id with its human readable description
    fn templates(&self) -> Result<IndexMap<String, String>>;

    /// Generate the project described by `config` into
    /// `config.destination_dir/config.name`
    fn generate(&self, config: &GeneratorConfig) -> Result<()>;
}

/// Template ids with their descriptions, sorted by id, the description
/// column starting two characters after the longest id.
pub fn list_templates(templates: &impl ProjectTemplates) -> Result<Vec<String>> {
    let mut entries: Vec<(String, String)> = templates.templates()?.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let pad_length = entries
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or_default()
        + 2;

    Ok(entries
        .into_iter()
        .map(|(name, description)| format!("{name:<pad_length$}{description}"))
        .collect())
}

pub fn is_known(templates: &impl ProjectTemplates, template: &str) -> Result<bool> {
    Ok(templates.templates()?.contains_key(template))
}
