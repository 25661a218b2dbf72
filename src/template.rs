//! Templates kept as plain directories and rendered with liquid.
//!
//! Every sub-directory of the catalog root holding a [`CONFIG_FILE_NAME`]
//! is a template named after the directory. Relative paths and UTF-8 file
//! contents are rendered, other files are copied as they are.

use anyhow::{bail, Context, Result};
use console::style;
use heck::ToUpperCamelCase;
use indexmap::IndexMap;
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value, ValueView};
use log::debug;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

use crate::generator_config::GeneratorConfig;
use crate::progressbar::spinner;
use crate::template_catalog::ProjectTemplates;
use crate::template_config::{Config, CONFIG_FILE_NAME};

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template directory {0} does not exist")]
    MissingCatalog(PathBuf),
    #[error("template `{template}` not found in {}", .root.display())]
    UnknownTemplate { template: String, root: PathBuf },
}

/// Catalog and engine backed by a directory of templates
#[derive(Debug, Clone)]
pub struct LiquidProjectTemplates {
    root: PathBuf,
}

impl LiquidProjectTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn template_dir(&self, template: &str) -> Result<PathBuf> {
        let dir = self.root.join(template);
        if !dir.join(CONFIG_FILE_NAME).is_file() {
            bail!(TemplateError::UnknownTemplate {
                template: template.to_string(),
                root: self.root.clone(),
            });
        }
        Ok(dir)
    }
}

impl ProjectTemplates for LiquidProjectTemplates {
    fn templates(&self) -> Result<IndexMap<String, String>> {
        if !self.root.is_dir() {
            bail!(TemplateError::MissingCatalog(self.root.clone()));
        }

        let mut templates = IndexMap::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let config_path = entry.path().join(CONFIG_FILE_NAME);
            if !config_path.is_file() {
                continue;
            }
            let config = Config::from_path(&config_path)
                .with_context(|| format!("invalid {}", config_path.display()))?;
            templates.insert(
                entry.file_name().to_string_lossy().into_owned(),
                config.description().to_string(),
            );
        }
        templates.sort_keys();
        Ok(templates)
    }

    fn generate(&self, config: &GeneratorConfig) -> Result<()> {
        let template_dir = self.template_dir(&config.template)?;
        let template_config = Config::from_path(template_dir.join(CONFIG_FILE_NAME))?;
        check_blade_version(&config.template, &template_config)?;

        let engine = create_liquid_engine();
        let liquid_object = create_liquid_object(config);
        let project_dir = config.project_dir();
        fs::create_dir_all(&project_dir)?;

        let spinner = spinner();
        for entry in WalkDir::new(&template_dir).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let relative = entry.path().strip_prefix(&template_dir)?;
            if relative == Path::new(CONFIG_FILE_NAME)
                || !template_config.is_included(relative, |flag| is_enabled(&liquid_object, flag))
            {
                debug!("Skipping {}", relative.display());
                continue;
            }

            let target = project_dir.join(render(
                &engine,
                &relative.to_string_lossy(),
                &liquid_object,
            )?);
            spinner.set_message(format!("Writing {}", target.display()));
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }

            match fs::read_to_string(entry.path()) {
                Ok(contents) => {
                    let rendered = render(&engine, &contents, &liquid_object)
                        .with_context(|| format!("cannot render {}", relative.display()))?;
                    fs::write(&target, rendered)?;
                }
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    fs::copy(entry.path(), &target)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
        spinner.finish_and_clear();
        Ok(())
    }
}

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .build()
        .expect("can't fail due to no partials support")
}

/// create liquid object for the template, pre-filled with every known variable
pub fn create_liquid_object(config: &GeneratorConfig) -> Object {
    let class_name = config
        .class_name
        .clone()
        .unwrap_or_else(|| config.name.to_upper_camel_case());
    let package_name = config
        .package_name
        .clone()
        .unwrap_or_else(|| default_package_name(&config.name));
    let package_path = package_name.replace('.', "/");

    let mut liquid_object = Object::new();
    let mut insert = |key: &'static str, value: String| {
        liquid_object.insert(key.into(), Value::Scalar(value.into()));
    };
    insert("name", config.name.clone());
    insert("class_name", class_name);
    insert("package_name", package_name);
    insert("package_path", package_path);
    insert("service", config.service.clone().unwrap_or_default());
    insert(
        "contributor_type",
        config.contributor_type.clone().unwrap_or_default(),
    );
    insert(
        "host_bundle_symbolic_name",
        config.host_bundle_symbolic_name.clone().unwrap_or_default(),
    );
    insert(
        "host_bundle_version",
        config.host_bundle_version.clone().unwrap_or_default(),
    );
    insert("template", config.template.clone());
    insert("build_type", config.build_type().as_str().to_string());

    liquid_object.insert("gradle".into(), Value::Scalar(config.gradle.into()));
    liquid_object.insert("maven".into(), Value::Scalar(config.maven.into()));
    liquid_object
}

/// Package derived from a project name, `my-cool_portlet` becomes `my.cool.portlet`
fn default_package_name(name: &str) -> String {
    name.replace(['-', '_'], ".").to_lowercase()
}

fn is_enabled(liquid_object: &Object, flag: &str) -> bool {
    liquid_object
        .get(flag)
        .and_then(|value| value.as_scalar())
        .and_then(|scalar| scalar.to_bool())
        .unwrap_or(false)
}

fn render(engine: &Parser, text: &str, liquid_object: &Object) -> Result<String> {
    let template = engine.parse(text)?;
    Ok(template.render(liquid_object)?)
}

fn check_blade_version(template: &str, template_config: &Config) -> Result<()> {
    if let Some(requirement) = template_config.blade_version() {
        let version = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;
        if !requirement.matches(&version) {
            bail!(
                "⛔ {} `{}` {} {} {} {}",
                style("Template").bold().red(),
                style(template).yellow(),
                style("requires blade").bold().red(),
                style(requirement).yellow(),
                style("but this is").bold().red(),
                style(version).yellow(),
            );
        }
    }
    Ok(())
}
