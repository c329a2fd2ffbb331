//! Output generation for extracted news.
//!
//! # Submodules
//!
//! - [`console`]: numbered plain-text listing for the terminal
//! - [`json`]: writes a `NewsReport` to a date-grouped JSON file

pub mod console;
pub mod json;
