use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    custom_error::{CustomError, CustomResult},
    logger::Logger,
};

pub struct Location {
    logger: Logger,
}

impl Location {
    pub fn new() -> Self {
        Self {
            logger: Logger::new(),
        }
    }

    /// Changes the process working directory. Relative paths are taken from
    /// the current directory.
    pub fn enter(&self, path: &Path) -> CustomResult<PathBuf> {
        let current_dir = env::current_dir().map_err(|source| CustomError::DirectoryChange {
            path: path.to_path_buf(),
            source,
        })?;
        let target = resolve_target_path(&current_dir, path);

        self.logger
            .debug(format!("Entering directory {}", target.display()));

        env::set_current_dir(&target).map_err(|source| CustomError::DirectoryChange {
            path: target.clone(),
            source,
        })?;

        Ok(target)
    }
}

fn resolve_target_path(current_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir.join(path)
    }
}
