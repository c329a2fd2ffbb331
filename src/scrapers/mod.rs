//! Page acquisition for the extraction pipeline.
//!
//! The pipeline itself never touches the network or the disk. This module is
//! the collaborator that supplies it with raw markup:
//!
//! 1. **Fetching**: download each registered subject page and save it
//! 2. **Loading**: read a saved snapshot back for extraction
//!
//! | Step | Function | Notes |
//! |------|----------|-------|
//! | Fetch | [`snapshot::fetch_and_save_pages`] | Sequential, browser User-Agent, pause + jitter |
//! | Load | [`snapshot::load_snapshot`] | Missing file yields `None` |

pub mod snapshot;
