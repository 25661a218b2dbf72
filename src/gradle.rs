//! The `gw` command: runs Gradle through the wrapper of the enclosing
//! project, or the `gradle` found on `PATH` when there is none.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{bail, Context, Result};
use console::style;
use log::{debug, info};

use crate::args::GradleArgs;
use crate::blade::Blade;

#[cfg(windows)]
pub const GRADLE_WRAPPER_FILE_NAME: &str = "gradlew.bat";
#[cfg(not(windows))]
pub const GRADLE_WRAPPER_FILE_NAME: &str = "gradlew";

/// Wrapper script of the nearest enclosing project, `dir` included
pub fn find_gradle_wrapper(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|candidate| candidate.join(GRADLE_WRAPPER_FILE_NAME))
        .find(|wrapper| wrapper.is_file())
}

/// Executable to run Gradle with from `dir`
pub fn gradle_executable(dir: &Path) -> Result<PathBuf> {
    if let Some(wrapper) = find_gradle_wrapper(dir) {
        return Ok(wrapper);
    }
    which::which("gradle").context("unable to find gradle wrapper or gradle executable")
}

pub struct GradleCommand {
    args: GradleArgs,
}

impl GradleCommand {
    pub fn new(args: GradleArgs) -> Self {
        Self { args }
    }

    pub fn execute<W: Write>(&self, blade: &Blade<W>) -> Result<()> {
        let gradle = gradle_executable(blade.base())?;
        info!(
            "🔧 {}",
            style(format!("{} {}", gradle.display(), self.args.args.join(" ")))
                .bold()
                .yellow()
        );

        let status = Command::new(&gradle)
            .args(&self.args.args)
            .current_dir(blade.base())
            .status()
            .with_context(|| format!("cannot run {}", gradle.display()))?;
        debug!("gradle finished with {status}");

        if !status.success() {
            bail!("gradle command failed with {status}");
        }
        Ok(())
    }
}
