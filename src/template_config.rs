use anyhow::Result;
use semver::VersionReq;
use serde::Deserialize;
use std::path::Path;
use std::{collections::HashMap, fs};
use std::{convert::TryFrom, io::ErrorKind};

/// Descriptor every template directory carries at its root
pub const CONFIG_FILE_NAME: &str = "template.toml";

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
pub struct Config {
    pub template: Option<TemplateConfig>,
    pub conditional: Option<HashMap<String, ConditionalConfig>>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
pub struct TemplateConfig {
    pub description: Option<String>,
    pub blade_version: Option<VersionReq>,
}

/// Files only generated while the variable naming the block is true
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct ConditionalConfig {
    pub include: Option<Vec<String>>,
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        Ok(config)
    }

    pub fn description(&self) -> &str {
        self.template
            .as_ref()
            .and_then(|t| t.description.as_deref())
            .unwrap_or_default()
    }

    pub fn blade_version(&self) -> Option<&VersionReq> {
        self.template.as_ref().and_then(|t| t.blade_version.as_ref())
    }

    /// Whether the file at `relative_path` belongs in the generated project,
    /// `enabled` telling which conditional blocks are switched on
    pub fn is_included(&self, relative_path: &Path, enabled: impl Fn(&str) -> bool) -> bool {
        let Some(conditionals) = &self.conditional else {
            return true;
        };
        conditionals.iter().all(|(flag, conditional)| {
            let listed = conditional
                .include
                .iter()
                .flatten()
                .any(|pattern| matches_pattern(pattern, relative_path));
            !listed || enabled(flag)
        })
    }
}

/// `dir/*` matches everything below `dir`, any other pattern is an exact path
fn matches_pattern(pattern: &str, relative_path: &Path) -> bool {
    match pattern.strip_suffix("/*") {
        Some(dir) => relative_path.starts_with(dir),
        None => relative_path == Path::new(pattern),
    }
}
