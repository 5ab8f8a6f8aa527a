//! Walks a path over the monkey map from AoC 2022, day 22, either flat with wrap-around or folded
//! into a cube.
//!
//! The cube is folded for real: every tile of the net gets a position and an outward normal in
//! 3D space, and remembers the quarter turns that brought it there, so the final heading can be
//! unfolded back onto the net.

pub mod board;
pub mod cube;
pub mod dump;
pub mod error;
mod facing;
pub mod fold;
pub mod geom;
pub mod input;
pub mod net;
pub mod path;
pub mod walk;

pub use board::{Board, Pos};
pub use cube::{Cube, Face};
pub use dump::{FaceMap, TrailMap};
pub use error::CubeError;
pub use fold::Tile3D;
pub use geom::{Direction, Point2, Point3, QuarterTurn, Rotate};
pub use input::{parse_input, Grid};
pub use net::{Net, Tile, TileId, TileKind};
pub use path::{Action, Outcome, Path, Start, Trail};
pub use walk::Position3D;
