// src/file.rs

use std::{fs, path::{Path, PathBuf}};

use crate::error::Result;

/// Write the rendered post to `path`, creating parent directories.
/// Returns the path written to.
pub fn write_output(path: &Path, text: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, text)?;
    logf!("File: wrote {} ({} bytes)", path.display(), text.len());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()).into());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
