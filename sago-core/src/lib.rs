//! Core utilities and types for the sago RBI generator.
//!
//! This crate provides the qualified-name model, the file-naming transform,
//! and the output-tree abstraction used across the sago ecosystem.

mod file;
mod naming;
mod qualified_name;
mod tree;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult, write_file};
// String utilities
pub use naming::to_snake_case;
// Fundamental types
pub use qualified_name::QualifiedName;
// Output tree
pub use tree::{FsTree, MemoryTree, OutputTree, RBI_EXTENSION};
