//! Ceili dance catalogue: source data model, YAML I/O, and integrity checks.
//!
//! This crate knows nothing about the generated output. It loads the
//! human-curated dance records (from the embedded catalogue or a directory
//! of YAML files) and reports structural problems in them. Consumers pass
//! the records on to `ceili-normalize`.

pub mod builtin;
pub mod integrity;
pub mod types;
pub mod yaml;

pub use builtin::builtin_dances;
pub use integrity::{CatalogueIssue, check_catalogue};
pub use types::*;
pub use yaml::{YamlError, load_dances, parse_dances};
