// Rewrite pass: substitute the version triple into util.cmake

use std::fs;
use std::path::Path;

use crate::models::version_triple::VersionTriple;
use crate::utils::error::Result;

/// Rewrite the target file in place, replacing the three version assignment
/// lines and passing every other line through unchanged.
///
/// In-place means truncate and rewrite, no temp-file-and-rename: an
/// interrupted run may leave the file truncated. The build pipeline accepts
/// this for a single-invocation tool.
pub fn rewrite_target(path: &Path, triple: &VersionTriple) -> Result<()> {
    let original = fs::read_to_string(path)?;
    let mut output = String::with_capacity(original.len());

    for line in original.lines() {
        output.push_str(&transform_line(line, triple));
        output.push('\n');
    }
    if !original.ends_with('\n') && !original.is_empty() {
        output.pop();
    }

    fs::write(path, output)?;
    Ok(())
}

/// Total per-line transform with an identity default.
///
/// The markers carry a trailing space and the more specific ones are tested
/// first, so exactly one rule can fire per line and the three patterns never
/// cross-trigger.
fn transform_line(line: &str, triple: &VersionTriple) -> String {
    if line.contains("set(VERSION2 ") {
        format!("    set(VERSION2 {})", triple.version2)
    } else if line.contains("set(SOVERSION ") {
        format!("    set(SOVERSION {})", triple.soversion)
    } else if line.contains("set(VERSION ") {
        format!("    set(VERSION {})", triple.version)
    } else {
        line.to_string()
    }
}
