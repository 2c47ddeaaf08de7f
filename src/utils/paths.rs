use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Directory containing the running executable.
///
/// State and configuration are anchored here so that invocations from
/// different working directories share them.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not determine executable path")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))
}

/// Resolves `path` against `base` unless it is already absolute
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
