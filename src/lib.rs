//! Blade scaffolds Liferay module projects from templates, placing them where
//! the enclosing workspace expects them, and forwards build commands to Gradle.

pub mod app_log;
pub mod args;
pub mod blade;
pub mod create;
pub mod error_log;
pub mod generator_config;
pub mod gradle;
pub mod progressbar;
pub mod project_dir;
pub mod properties;
pub mod template;
pub mod template_catalog;
pub mod template_config;
pub mod utils;
pub mod workspace;

pub use args::{BladeCommand, Cli, CreateOptions, GradleArgs};
pub use blade::Blade;
pub use create::CreateCommand;
pub use generator_config::{BuildType, GeneratorConfig};
pub use gradle::GradleCommand;
pub use template::LiquidProjectTemplates;
pub use template_catalog::ProjectTemplates;
