// Borsch postprocess - version propagation for CMake build trees
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::version_triple::VersionTriple;
pub use utils::error::{PostprocessError, Result};
