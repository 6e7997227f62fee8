// Scan pass: pull the version triple out of CMakeLists.txt

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::version_triple::VersionTriple;
use crate::utils::error::{PostprocessError, Result};

const VERSION2_MARKER: &str = "set(qhull_VERSION2";
const VERSION_MARKER: &str = "set(qhull_VERSION";
const SOVERSION_MARKER: &str = "set(qhull_SOVERSION";

/// Scan the source file line by line and collect the version triple.
///
/// The scan stops as soon as all three values are found; fields whose marker
/// never appears keep the `"0"` default.
pub fn extract_triple(path: &Path) -> Result<VersionTriple> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut triple = VersionTriple::default();

    for line in reader.lines() {
        let line = line?;

        // The VERSION marker is a literal substring of the VERSION2 marker,
        // so the more specific one must be tested first.
        if line.contains(VERSION2_MARKER) {
            triple.set_version2(quoted_value(path, &line)?);
        } else if line.contains(VERSION_MARKER) {
            triple.set_version(quoted_value(path, &line)?);
        } else if line.contains(SOVERSION_MARKER) {
            triple.set_soversion(token_value(path, &line)?);
        }

        if triple.is_complete() {
            break;
        }
    }

    Ok(triple)
}

/// Quoted-value extraction: the text between the first pair of double
/// quotes on the line.
fn quoted_value(file: &Path, line: &str) -> Result<String> {
    line.split('"')
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| malformed(file, line))
}

/// Token-value extraction: the second whitespace-delimited token, truncated
/// at the first `)` character.
fn token_value(file: &Path, line: &str) -> Result<String> {
    let token = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| malformed(file, line))?;

    let value = match token.find(')') {
        Some(idx) => &token[..idx],
        None => token,
    };
    Ok(value.to_string())
}

fn malformed(file: &Path, line: &str) -> PostprocessError {
    PostprocessError::MalformedLine {
        file: file.to_path_buf(),
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_source(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CMakeLists.txt");
        fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_extract_all_three_values() {
        let (_dir, path) = write_source(
            "project(qhull)\n\
             set(qhull_VERSION2 \"2017.1\")\n\
             set(qhull_VERSION \"2017\")\n\
             set(qhull_SOVERSION 8)\n",
        );

        let triple = extract_triple(&path).unwrap();
        assert_eq!(triple.version, "2017");
        assert_eq!(triple.version2, "2017.1");
        assert_eq!(triple.soversion, "8");
    }

    #[test]
    fn test_version2_never_confused_with_version() {
        // VERSION before VERSION2: the VERSION2 line must still hit the
        // VERSION2 rule even though it contains the VERSION marker.
        let (_dir, path) = write_source(
            "set(qhull_VERSION \"2017\")\n\
             set(qhull_VERSION2 \"2017.1\")\n",
        );

        let triple = extract_triple(&path).unwrap();
        assert_eq!(triple.version, "2017");
        assert_eq!(triple.version2, "2017.1");
    }

    #[test]
    fn test_missing_markers_default_to_zero() {
        let (_dir, path) = write_source("project(qhull)\nadd_subdirectory(src)\n");

        let triple = extract_triple(&path).unwrap();
        assert_eq!(triple.version, "0");
        assert_eq!(triple.version2, "0");
        assert_eq!(triple.soversion, "0");
    }

    #[test]
    fn test_soversion_without_space_before_paren() {
        let (_dir, path) = write_source("set(qhull_SOVERSION 8)\n");

        let triple = extract_triple(&path).unwrap();
        assert_eq!(triple.soversion, "8");
    }

    #[test]
    fn test_soversion_with_space_before_paren() {
        let (_dir, path) = write_source("set(qhull_SOVERSION 8 )\n");

        let triple = extract_triple(&path).unwrap();
        assert_eq!(triple.soversion, "8");
    }

    #[test]
    fn test_first_occurrence_wins_for_duplicates() {
        let (_dir, path) = write_source(
            "set(qhull_VERSION \"2017\")\n\
             set(qhull_VERSION \"2018\")\n",
        );

        let triple = extract_triple(&path).unwrap();
        assert_eq!(triple.version, "2017");
    }

    #[test]
    fn test_unquoted_version_line_is_malformed() {
        let (_dir, path) = write_source("set(qhull_VERSION 2017)\n");

        let err = extract_triple(&path).unwrap_err();
        assert!(matches!(err, PostprocessError::MalformedLine { .. }));
    }
}
