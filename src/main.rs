/// Main file
use anyhow::Result;
use console::style;
use log::debug;
use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use blade::app_log::log_env_init;
use blade::args::{resolve_args, BladeCommand};
use blade::utils::{canonicalize_path, expand_home, home};
use blade::{Blade, CreateCommand, GradleCommand, LiquidProjectTemplates};

/// Template catalog location under the home directory
const DEFAULT_TEMPLATES_DIR: &str = ".blade/templates";

fn main() -> Result<()> {
    let cli = resolve_args();
    log_env_init(cli.verbose);

    let base = match &cli.base {
        Some(base) => canonicalize_path(base)?,
        None => env::current_dir()?,
    };
    debug!("Working from {}", base.display());
    let mut blade = Blade::new(base);

    match cli.command {
        BladeCommand::Create(options) => {
            let templates = LiquidProjectTemplates::new(templates_dir(cli.templates.as_deref())?);
            debug!("Reading templates from {}", templates.root().display());
            CreateCommand::new(options).execute(&mut blade, &templates)?;
        }
        BladeCommand::Gw(args) => GradleCommand::new(args).execute(&blade)?,
    }

    if !blade.errors().is_empty() {
        // written past the logger so `RUST_LOG` cannot hide them
        let mut stderr = io::stderr().lock();
        for message in blade.errors().messages() {
            writeln!(stderr, "⛔ {}", style(message).for_stderr().red())?;
        }
        process::exit(1);
    }
    Ok(())
}

fn templates_dir(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(dir) => expand_home(dir),
        None => Ok(home()?.join(DEFAULT_TEMPLATES_DIR)),
    }
}
