use std::path::PathBuf;

use clap::ValueEnum;

use crate::args::CreateOptions;

/// Build system the generated project is set up for
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildType {
    #[default]
    Gradle,
    Maven,
}

impl BuildType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gradle => "gradle",
            Self::Maven => "maven",
        }
    }
}

/// Everything the template engine needs to generate one project
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub class_name: Option<String>,
    pub contributor_type: Option<String>,
    pub destination_dir: PathBuf,
    pub host_bundle_symbolic_name: Option<String>,
    pub host_bundle_version: Option<String>,
    pub name: String,
    pub package_name: Option<String>,
    pub service: Option<String>,
    pub template: String,
    pub gradle: bool,
    pub maven: bool,
}

impl GeneratorConfig {
    pub fn new(
        options: &CreateOptions,
        name: &str,
        template: &str,
        destination_dir: impl Into<PathBuf>,
    ) -> Self {
        let maven = options.build == BuildType::Maven;
        Self {
            class_name: options.classname.clone(),
            contributor_type: options.contributor_type.clone(),
            destination_dir: destination_dir.into(),
            host_bundle_symbolic_name: options.hostbundlebsn.clone(),
            host_bundle_version: options.hostbundleversion.clone(),
            name: name.to_string(),
            package_name: options.packagename.clone(),
            service: options.service.clone(),
            template: template.to_string(),
            gradle: !maven,
            maven,
        }
    }

    pub const fn build_type(&self) -> BuildType {
        if self.maven {
            BuildType::Maven
        } else {
            BuildType::Gradle
        }
    }

    /// Directory the project ends up in
    pub fn project_dir(&self) -> PathBuf {
        self.destination_dir.join(&self.name)
    }
}
