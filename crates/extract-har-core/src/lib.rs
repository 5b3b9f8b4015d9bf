pub mod config;
pub mod logging;

// Extraction pipeline, leaves first.
pub mod error;
pub mod extract;
pub mod filename;
pub mod json_path;
pub mod mime;
pub mod payload;
pub mod pipeline;
pub mod storage;
pub mod tree;
