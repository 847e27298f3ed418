//! Utility modules for file I/O and clipboard access.

pub mod clipboard;
pub mod file_helper;
