use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::properties::PropertiesError;
use crate::utils::canonical_path;
use crate::workspace::WorkspaceProperties;

/// Templates that produce web archives rather than OSGi modules
const WEB_ARCHIVE_TEMPLATES: [&str; 3] = ["theme", "layout-template", "spring-mvc-portlet"];

/// Where inside a workspace a template's projects live by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateCategory {
    Module,
    WebArchive,
}

impl TemplateCategory {
    pub fn of(template: &str) -> Self {
        if WEB_ARCHIVE_TEMPLATES.contains(&template) {
            Self::WebArchive
        } else {
            Self::Module
        }
    }

    /// Configured sub-directory of the workspace for this category
    fn sub_dir(self, properties: &WorkspaceProperties) -> &str {
        match self {
            Self::Module => properties.modules_dir(),
            Self::WebArchive => properties.wars_dir(),
        }
    }
}

/// Stores the directory of the project to create
#[derive(Debug, PartialEq, Clone)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

/// Why an existing path cannot receive a new project
#[derive(Error, Debug, PartialEq)]
pub enum DirConflict {
    #[error("{0} is a file")]
    IsFile(PathBuf),
    #[error("{0} is not empty")]
    NotEmpty(PathBuf),
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Conflict(#[from] DirConflict),
    #[error(transparent)]
    Properties(#[from] PropertiesError),
    #[error("cannot resolve the destination directory: {0}")]
    Io(#[from] io::Error),
}

/// Base directory a project is created under, and the project directory itself
#[derive(Debug, PartialEq, Clone)]
pub struct ResolvedLayout {
    pub base_dir: PathBuf,
    pub project_dir: ProjectDir,
}

/// Compute where project `name` made from `template` goes.
///
/// An explicit directory wins. Otherwise, inside a workspace the project goes
/// to the sub-directory configured for the template's category, unless the
/// base directory already lies within it. Outside of a workspace the base
/// directory is used as is.
pub fn resolve_destination(
    name: &str,
    template: &str,
    explicit_dir: Option<&Path>,
    base_dir: &Path,
) -> Result<ResolvedLayout, ResolveError> {
    let dir = match explicit_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_dir(TemplateCategory::of(template), base_dir)?,
    };
    debug!("Projects made from `{template}` go to {}", dir.display());

    let project_dir = ProjectDir(dir.join(name));
    check_dir(project_dir.as_ref())?;
    debug!("Project directory {project_dir} is free");

    Ok(ResolvedLayout {
        base_dir: dir,
        project_dir,
    })
}

/// Default directory for a template category, relative to `base_dir`
pub fn default_dir(category: TemplateCategory, base_dir: &Path) -> Result<PathBuf, ResolveError> {
    let properties = WorkspaceProperties::load(base_dir)?;
    let Some(workspace_dir) = properties.root() else {
        return Ok(base_dir.to_path_buf());
    };

    let category_dir = workspace_dir.join(category.sub_dir(&properties));
    if contains_dir(base_dir, &category_dir)? {
        return Ok(base_dir.to_path_buf());
    }
    Ok(category_dir)
}

/// Whether `current_dir` is `parent_dir` or lies below it, comparing
/// canonical paths component by component.
pub fn contains_dir(current_dir: &Path, parent_dir: &Path) -> io::Result<bool> {
    let current_path = canonical_path(current_dir)?;
    let parent_path = canonical_path(parent_dir)?;
    Ok(current_path.starts_with(parent_path))
}

/// A project can be created at `path` when nothing is there yet or when it
/// is an empty directory.
pub fn check_dir(path: &Path) -> Result<(), DirConflict> {
    if !path.exists() {
        return Ok(());
    }
    if !path.is_dir() {
        return Err(DirConflict::IsFile(path.to_path_buf()));
    }
    let has_children = fs::read_dir(path)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    if has_children {
        return Err(DirConflict::NotEmpty(path.to_path_buf()));
    }
    Ok(())
}
