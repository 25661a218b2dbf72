use std::{
    io::{self, Stdout, Write},
    path::{Path, PathBuf},
};

use crate::error_log::ErrorLog;

/// Handle shared by every command of one invocation: the directory the
/// command acts from, where its output goes and the errors it reports.
#[derive(Debug)]
pub struct Blade<W: Write = Stdout> {
    base: PathBuf,
    out: W,
    errors: ErrorLog,
}

impl Blade<Stdout> {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self::with_output(base, io::stdout())
    }
}

impl<W: Write> Blade<W> {
    pub fn with_output(base: impl Into<PathBuf>, out: W) -> Self {
        Self {
            base: base.into(),
            out,
            errors: ErrorLog::new(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn add_errors<I, S>(&mut self, prefix: &str, errors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.add_errors(prefix, errors);
    }

    pub fn add_error(&mut self, prefix: &str, error: impl Into<String>) {
        self.errors.add_error(prefix, error);
    }

    pub const fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
