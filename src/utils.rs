use anyhow::Context;
use anyhow::Result;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Make a temperary
pub fn tmp_dir() -> io::Result<tempfile::TempDir> {
    tempfile::Builder::new().prefix("blade").tempdir()
}

/// deals with `~/` and `$HOME/` prefixes
pub fn expand_home(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = p.as_ref();
    let p = if p.starts_with("~/") {
        home()?.join(p.strip_prefix("~/")?)
    } else if p.starts_with("$HOME/") {
        home()?.join(p.strip_prefix("$HOME/")?)
    } else {
        p.to_path_buf()
    };
    Ok(p)
}

/// deals with `~/` and `$HOME/` prefixes, the path must exist
pub fn canonicalize_path(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = expand_home(p)?;
    p.canonicalize()
        .with_context(|| format!("path does not exist: {}", p.display()))
}

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}

/// Canonical form of a path that may not exist yet.
///
/// `.` and `..` are folded lexically first, then the deepest existing
/// ancestor is resolved through the filesystem (symlinks included) and the
/// missing tail appended to it.
pub fn canonical_path(p: impl AsRef<Path>) -> io::Result<PathBuf> {
    let absolute = normalize(&std::path::absolute(p.as_ref())?);

    let mut existing = absolute.as_path();
    let mut tail = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_owned());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut canonical = existing.canonicalize()?;
    for component in tail.iter().rev() {
        canonical.push(component);
    }
    Ok(canonical)
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Resolve `p` against `base` unless it is already absolute
pub fn absolute_from(base: &Path, p: impl AsRef<Path>) -> PathBuf {
    let p = p.as_ref();
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}

/// Mark a file executable for everyone who can read it
#[cfg(unix)]
pub fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    let mode = permissions.mode();
    permissions.set_mode(mode | ((mode & 0o444) >> 2));
    std::fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
