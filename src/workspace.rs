//! Liferay workspace detection and the workspace-level `gradle.properties`.

use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use crate::properties::{self, PropertiesError};

pub const SETTINGS_GRADLE_FILE_NAME: &str = "settings.gradle";
pub const BUILD_GRADLE_FILE_NAME: &str = "build.gradle";
pub const GRADLE_PROPERTIES_FILE_NAME: &str = "gradle.properties";

pub const DEFAULT_MODULES_DIR: &str = "modules";
pub const DEFAULT_MODULES_DIR_PROPERTY: &str = "liferay.workspace.modules.dir";
pub const DEFAULT_WARS_DIR: &str = "wars";
pub const DEFAULT_WARS_DIR_PROPERTY: &str = "liferay.workspace.wars.dir";

static WORKSPACE_PLUGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)apply.*plugin.*:.*['"]com\.liferay\.workspace['"]"#)
        .expect("workspace plugin pattern is valid")
});

/// Nearest ancestor of `dir` (inclusive) holding `settings.gradle` or `gradle.properties`
pub fn get_workspace_dir(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .find(|candidate| {
            candidate.join(SETTINGS_GRADLE_FILE_NAME).exists()
                || candidate.join(GRADLE_PROPERTIES_FILE_NAME).exists()
        })
        .map(Path::to_path_buf)
}

/// A directory belongs to a workspace when its workspace root has a
/// `settings.gradle` and applies the `com.liferay.workspace` plugin, either
/// there or, for older workspaces, in `build.gradle`.
pub fn is_workspace(dir: &Path) -> bool {
    let Some(workspace_dir) = get_workspace_dir(dir) else {
        return false;
    };
    if !workspace_dir.join(SETTINGS_GRADLE_FILE_NAME).is_file() {
        return false;
    }

    [SETTINGS_GRADLE_FILE_NAME, BUILD_GRADLE_FILE_NAME]
        .iter()
        .filter_map(|name| fs::read_to_string(workspace_dir.join(name)).ok())
        .any(|script| WORKSPACE_PLUGIN.is_match(&script))
}

/// Key/value settings of the workspace a directory belongs to
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkspaceProperties {
    root: Option<PathBuf>,
    values: IndexMap<String, String>,
}

impl WorkspaceProperties {
    /// Read the properties of the workspace containing `base_dir`.
    ///
    /// Outside of a workspace, or without a `gradle.properties` file, the
    /// mapping is empty. Read and parse failures are returned.
    pub fn load(base_dir: &Path) -> Result<Self, PropertiesError> {
        if !is_workspace(base_dir) {
            return Ok(Self::default());
        }
        let Some(root) = get_workspace_dir(base_dir) else {
            return Ok(Self::default());
        };

        let path = root.join(GRADLE_PROPERTIES_FILE_NAME);
        let values = match properties::from_path(&path) {
            Ok(values) => values,
            Err(PropertiesError::Io(e)) if e.kind() == ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e),
        };
        debug!("Loaded {} workspace properties from {}", values.len(), path.display());

        Ok(Self {
            root: Some(root),
            values,
        })
    }

    /// Root directory of the workspace, `None` outside of a workspace
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Sub-directory holding module projects
    pub fn modules_dir(&self) -> &str {
        self.get(DEFAULT_MODULES_DIR_PROPERTY)
            .unwrap_or(DEFAULT_MODULES_DIR)
    }

    /// Sub-directory holding web-archive projects.
    ///
    /// The property may name several directories separated by commas, only
    /// the first one is a default.
    pub fn wars_dir(&self) -> &str {
        let value = self
            .get(DEFAULT_WARS_DIR_PROPERTY)
            .unwrap_or(DEFAULT_WARS_DIR);
        value.split(',').next().unwrap_or(value)
    }
}
