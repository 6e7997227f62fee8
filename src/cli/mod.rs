// CLI module for command-line interface

pub mod propagate;

use clap::Parser;

use self::propagate::PropagateCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "postprocess")]
#[command(about = "Propagate qhull version values from CMakeLists.txt into cmake/util.cmake")]
#[command(long_about = r#"Borsch post-processing step for the qhull build tree.

Reads set(qhull_VERSION ...), set(qhull_VERSION2 ...) and
set(qhull_SOVERSION ...) from <SOURCE_DIR>/CMakeLists.txt, prints the three
resolved values, and rewrites the matching set(VERSION ...), set(VERSION2 ...)
and set(SOVERSION ...) lines of the target file. Every other target line is
left untouched. Values whose marker is missing default to "0".

By default the target is <cwd>/../cmake/util.cmake, matching how the build
pipeline invokes the tool from a build subdirectory; pass --target to spell
the path out instead.

Examples:
  postprocess ../qhull                 Propagate into ../cmake/util.cmake
  postprocess ../qhull --json          Machine-readable output
  postprocess src --target cmake/util.cmake"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub command: PropagateCommand,
}
