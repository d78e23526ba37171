//! The catalogue compiled into the binary.

use crate::types::SourceDance;
use crate::yaml::{YamlError, parse_dances};

const BUILTIN_CATALOGUE: &str = include_str!("../data/dances.yaml");

/// Parse the embedded catalogue.
///
/// The YAML is fixed at compile time, so an error here means the shipped
/// data file is malformed.
pub fn builtin_dances() -> Result<Vec<SourceDance>, YamlError> {
    parse_dances(BUILTIN_CATALOGUE, "<builtin>")
}
