use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::{extractor, rewriter};
use crate::utils::error::Result;
use crate::utils::fs_utils;

/// Propagate version values from a source CMakeLists.txt into the target
/// cmake/util.cmake
#[derive(Debug, Args)]
pub struct PropagateCommand {
    /// Directory containing the CMakeLists.txt to read versions from
    pub source_dir: PathBuf,

    /// Target file to rewrite (default: <cwd>/../cmake/util.cmake)
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Output JSON instead of the three plain value lines
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the propagate run
#[derive(Debug, Serialize, Deserialize)]
pub struct PropagateResponse {
    pub status: String,
    pub version: String,
    pub version2: String,
    pub soversion: String,
    pub target: String,
}

impl PropagateCommand {
    /// Execute the propagate run: resolve paths, scan, report, rewrite.
    pub fn run(&self) -> Result<()> {
        let source_path = fs_utils::resolve_source_path(&self.source_dir)?;

        let target_path = match &self.target {
            Some(path) => path.clone(),
            None => fs_utils::default_target_path()?,
        };

        let triple = extractor::extract_triple(&source_path)?;

        // Diagnostic output goes out before the rewrite, as the pipeline
        // expects: version, version2, soversion, one per line, no labels.
        if self.json {
            let response = PropagateResponse {
                status: "success".to_string(),
                version: triple.version.clone(),
                version2: triple.version2.clone(),
                soversion: triple.soversion.clone(),
                target: target_path.display().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", triple.version);
            println!("{}", triple.version2);
            println!("{}", triple.soversion);
        }

        rewriter::rewrite_target(&target_path, &triple)?;

        Ok(())
    }
}
