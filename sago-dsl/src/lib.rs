//! Generation-and-reconciliation pipeline for sago.
//!
//! The pipeline turns a reflection snapshot into a set of RBI declaration
//! files and reconciles them against the output tree:
//!
//! 1. resolve requested constants against the snapshot ([`resolver`])
//! 2. filter the generator registry ([`GeneratorRegistry::select`])
//! 3. collect and merge signature fragments per type ([`Engine`])
//! 4. write the desired set and remove stale files ([`reconcile`]), or
//!    classify drift without mutating anything ([`verify`])
//!
//! [`ops::dsl`] and [`ops::verify`] tie the stages together and return
//! [`report`] values that render the console protocol.

mod engine;
mod error;
mod fragment;
mod generator;
pub mod ops;
mod rbi;
pub mod reconcile;
pub mod report;
mod resolver;
mod verify;

pub use engine::{Engine, GeneratedFile};
pub use error::DslError;
pub use fragment::{MethodSignature, Param, Receiver, SignatureFragment};
pub use generator::{Generator, GeneratorError, GeneratorRegistry};
pub use rbi::RbiFile;
pub use resolver::{TypeReference, resolve};
pub use verify::{Diff, diff_trees};
