use crate::prelude::*;
use std::{env::current_dir, path::PathBuf};

/// Relative paths resolve against the current working directory.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        return Ok(path);
    }

    Ok(current_dir()?.join(path))
}
