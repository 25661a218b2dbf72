use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::env;

use crate::generator_config::BuildType;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
    pub const TEMPLATE_PARAMETERS: &str = "Template Parameters";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

#[derive(Parser, Debug)]
#[command(
    name = "blade",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct Cli {
    /// The directory to act from, defaults to the current directory
    #[arg(long, global = true, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Root directory of the project template catalog [default: ~/.blade/templates]
    #[arg(long = "templates", env = "BLADE_TEMPLATES", global = true, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, global = true, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: BladeCommand,
}

#[derive(Subcommand, Debug)]
pub enum BladeCommand {
    /// Creates a new Liferay module project from several available templates.
    #[command(disable_help_flag = true)]
    Create(CreateOptions),
    /// Execute gradle command using the gradle wrapper if detected
    Gw(GradleArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct CreateOptions {
    /// Specify the build type of the project.
    #[arg(short, long, value_enum, default_value_t, help_heading = heading::OUTPUT_PARAMETERS)]
    pub build: BuildType,

    /// If a class is generated in the project, provide the name of the class to be generated. If
    /// not provided defaults to Project name.
    #[arg(short = 'c', long = "classname", help_heading = heading::TEMPLATE_PARAMETERS)]
    pub classname: Option<String>,

    /// Used to identify your module as a Theme Contributor. Also, used to add the
    /// Liferay-Theme-Contributor-Type and Web-ContextPath bundle headers.
    #[arg(short = 'C', long = "contributorType", help_heading = heading::TEMPLATE_PARAMETERS)]
    pub contributor_type: Option<String>,

    /// The directory where to create the new project.
    #[arg(short, long, value_name = "DIR", help_heading = heading::OUTPUT_PARAMETERS)]
    pub dir: Option<PathBuf>,

    /// If a new jsp hook fragment needs to be created, provide the name of the host bundle
    /// symbolic name.
    #[arg(short = 'h', long = "hostbundlebsn", help_heading = heading::TEMPLATE_PARAMETERS)]
    pub hostbundlebsn: Option<String>,

    /// If a new jsp hook fragment needs to be created, provide the name of the host bundle
    /// version.
    #[arg(short = 'H', long = "hostbundleversion", help_heading = heading::TEMPLATE_PARAMETERS)]
    pub hostbundleversion: Option<String>,

    /// Prints a list of available project templates
    #[arg(short = 'l', long = "listtemplates", action, help_heading = heading::TEMPLATE_SELECTION)]
    pub list_templates: bool,

    /// The package name of the generated classes.
    #[arg(short = 'p', long = "packagename", help_heading = heading::TEMPLATE_PARAMETERS)]
    pub packagename: Option<String>,

    /// If a new DS component needs to be created, provide the name of the service to be
    /// implemented.
    #[arg(short, long, help_heading = heading::TEMPLATE_PARAMETERS)]
    pub service: Option<String>,

    /// The project template to use when creating the project. To see the list of templates
    /// available use blade create <-l | --listtemplates>
    #[arg(short, long, help_heading = heading::TEMPLATE_SELECTION)]
    pub template: Option<String>,

    /// Name of the project to create
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct GradleArgs {
    /// Arguments handed to gradle as they are
    #[arg(
        value_name = "ARGS",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> Cli {
    Cli::parse_from(env::args())
}
