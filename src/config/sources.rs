//! Configuration file sources

pub(crate) mod global_file;
