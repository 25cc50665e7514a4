//! Pipeline orchestration entrypoints.
//!
//! Each operation takes the loaded application, the generator registry, and
//! an output tree, and returns a report for rendering. The console banners
//! that precede the report (`Loading ...`) belong to the CLI.

pub mod dsl;
pub mod verify;
