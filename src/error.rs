use thiserror::Error;

use crate::{cube::Face, geom::Point3};

#[derive(Debug, Error)]
pub enum CubeError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid path syntax: unexpected {found:?} at offset {offset}")]
    InvalidPathSyntax { offset: usize, found: char },

    #[error("malformed net: {tiles} tiles cannot cover six square faces")]
    MalformedNet { tiles: usize },

    #[error("net cannot be folded into a cube: {reason}")]
    UnfoldableNet { reason: String },

    #[error("no tile at {pos} on the {face:?} face")]
    NoSuchTile { face: Face, pos: Point3 },

    #[error("heading {heading} does not unfold onto the net plane")]
    UnmappableHeading { heading: Point3 },

    #[error("no open tile to start from")]
    NoOpenTile,

    #[error("no open tile at row {row}, column {col}")]
    InvalidStart { row: usize, col: usize },
}
