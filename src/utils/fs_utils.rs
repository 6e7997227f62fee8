// File system utilities

use std::env;
use std::path::{Path, PathBuf};

use crate::utils::error::{PostprocessError, Result};

/// Join the expected `CMakeLists.txt` onto the given source directory and
/// check that it exists. This is the only curated precondition of the tool;
/// everything else surfaces as a plain IO error.
pub fn resolve_source_path(source_dir: &Path) -> Result<PathBuf> {
    let path = source_dir.join("CMakeLists.txt");
    if !path.exists() {
        return Err(PostprocessError::MissingSource(path));
    }
    Ok(path)
}

/// Default target location, `<cwd>/../cmake/util.cmake`.
///
/// The original pipeline invokes the tool from a build subdirectory and
/// relies on this working-directory-relative layout; `--target` exists for
/// callers that want to spell the path out instead.
pub fn default_target_path() -> Result<PathBuf> {
    let cwd = env::current_dir()?;
    Ok(cwd.join("..").join("cmake").join("util.cmake"))
}
