// Utility modules

pub mod error;
pub mod fs_utils;
