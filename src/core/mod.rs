//! Core functionality: the bookmark store, path resolution, and error kinds

pub mod error;
pub mod resolver;
pub mod store;
