use crate::region::catalog::District;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Path,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Path => f.write_str("path"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    #[error("{district} {field} contains unescapable character {character:?} at byte {offset}")]
    UnescapableCharacter {
        district: District,
        field: Field,
        character: char,
        offset: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("extraction incomplete: {found}/{expected} districts (missing: {missing})")]
    IncompleteExtraction {
        found: usize,
        expected: usize,
        missing: String,
    },
}
