use thiserror::Error;

use crate::shape::ShapeKind;

/// every failure of the kernel is local and synchronous, nothing here is worth a retry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid construction arguments: {0}")]
    InvalidConstructionArgs(String),
    #[error("{operation} is not supported for {shape}")]
    Unsupported {
        operation: &'static str,
        shape: ShapeKind,
    },
    #[error("{shape} has no finite bounding volume")]
    Unbounded { shape: ShapeKind },
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error("polygons do not overlap")]
    NoOverlap,
    #[error("no separating axis candidates for {a} and {b}")]
    NoSeparatingAxisData { a: ShapeKind, b: ShapeKind },
    #[error("flat data for {kind} expects {expected} scalars, found {found}")]
    InvalidFlatData {
        kind: ShapeKind,
        expected: String,
        found: usize,
    },
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
