//! # CUtil - Common Utilities Library
//!
//! Small helpers shared by the workspace crates.
//!
//! ## Features
//!
//! - `fs`: File system utilities (file checks, file names, listing a directory by extension)
//! - `time`: Local time formatting

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "time")]
pub mod time;
