//! Host-application input layer for sago.
//!
//! The pipeline never loads the host application itself. A framework-side
//! collaborator inspects the running application and dumps a reflection
//! snapshot; this crate loads that snapshot, along with the optional
//! `sago.toml` configuration file.

mod config;
mod error;
mod snapshot;

pub use config::Config;
pub use error::{Error, Result};
pub use snapshot::{Application, SNAPSHOT_VERSION, TypeEntry, TypeKind};
