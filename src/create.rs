//! The `create` command: checks the request, works out where the project
//! goes and hands the rest to the template engine.

use std::io::Write;

use anyhow::Result;
use console::style;
use log::{debug, info};
use thiserror::Error;

use crate::args::CreateOptions;
use crate::blade::Blade;
use crate::generator_config::GeneratorConfig;
use crate::project_dir::{resolve_destination, ResolveError};
use crate::template_catalog::{is_known, list_templates, ProjectTemplates};
use crate::utils::{absolute_from, set_executable};

pub const ERROR_PREFIX: &str = "Create";
pub const DEFAULT_TEMPLATE: &str = "mvc-portlet";

/// Launcher script made executable once a project has been generated
pub const GRADLE_WRAPPER: &str = "gradlew";

/// Problems with a request that stop `create` before anything is written
#[derive(Error, Debug, PartialEq)]
pub enum CreateError {
    #[error("SYNOPSIS\n\t create [options] <[name]>")]
    MissingName,
    #[error("the template {0} is not in the list")]
    UnknownTemplate(String),
    #[error("{0} is not empty or it is a file. Please clean or delete it then run again")]
    Conflict(String),
}

pub struct CreateCommand {
    options: CreateOptions,
}

impl CreateCommand {
    pub fn new(options: CreateOptions) -> Self {
        Self { options }
    }

    /// Run the command.
    ///
    /// Request problems are recorded in the error log of `blade` and end the
    /// command with `Ok`. Failures reading the workspace or generating the
    /// project are returned.
    pub fn execute<W: Write, T: ProjectTemplates>(
        &self,
        blade: &mut Blade<W>,
        templates: &T,
    ) -> Result<()> {
        if self.options.list_templates {
            return print_templates(blade, templates);
        }

        let config = match self.prepare(blade, templates)? {
            Ok(config) => config,
            Err(error) => {
                blade.add_error(ERROR_PREFIX, error.to_string());
                return Ok(());
            }
        };

        generate(&config, templates)?;

        writeln!(
            blade.out(),
            "Successfully created project {} in {}",
            config.name,
            config.destination_dir.display()
        )?;
        Ok(())
    }

    /// Validate the request and build the generator configuration for it
    fn prepare<W: Write, T: ProjectTemplates>(
        &self,
        blade: &Blade<W>,
        templates: &T,
    ) -> Result<Result<GeneratorConfig, CreateError>> {
        let name = match self.options.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(Err(CreateError::MissingName)),
        };

        let template = match self.options.template.as_deref() {
            None => DEFAULT_TEMPLATE,
            Some(template) if is_known(templates, template)? => template,
            Some(template) => return Ok(Err(CreateError::UnknownTemplate(template.to_string()))),
        };
        debug!("Using template `{template}`");

        let explicit_dir = self
            .options
            .dir
            .as_ref()
            .map(|dir| absolute_from(blade.base(), dir));
        let layout = match resolve_destination(name, template, explicit_dir.as_deref(), blade.base())
        {
            Ok(layout) => layout,
            Err(ResolveError::Conflict(conflict)) => {
                debug!("{conflict}");
                return Ok(Err(CreateError::Conflict(name.to_string())));
            }
            Err(e) => return Err(e.into()),
        };

        let config = GeneratorConfig::new(&self.options, name, template, layout.base_dir);
        debug!(
            "Creating `{}` in {} for {}",
            config.name,
            config.destination_dir.display(),
            config.build_type().as_str()
        );
        Ok(Ok(config))
    }
}

fn print_templates<W: Write, T: ProjectTemplates>(
    blade: &mut Blade<W>,
    templates: &T,
) -> Result<()> {
    for line in list_templates(templates)? {
        writeln!(blade.out(), "{line}")?;
    }
    Ok(())
}

/// Expand the template and make the generated Gradle wrapper runnable
fn generate<T: ProjectTemplates>(config: &GeneratorConfig, templates: &T) -> Result<()> {
    info!(
        "🔧 {}",
        style(format!("Generating `{}` from {} ...", config.name, config.template))
            .bold()
            .yellow()
    );
    templates.generate(config)?;

    let gradlew = config.project_dir().join(GRADLE_WRAPPER);
    if gradlew.exists() {
        set_executable(&gradlew)?;
    }
    Ok(())
}
