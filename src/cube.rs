use std::{collections::HashMap, fmt::Display};

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{
    error::CubeError,
    fold::{self, Tile3D},
    geom::{Direction, Point3},
    net::{Net, Tile, TileId},
    walk::Position3D,
};

/// The six sides of the cube, named by their outward normal.
#[repr(u8)]
#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, Hash, PartialEq)]
pub enum Face {
    Bottom,
    Top,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const fn normal(self) -> Point3 {
        use Face::*;

        match self {
            Bottom => Point3(0, 0, -1),
            Top => Point3(0, 0, 1),
            Left => Point3(-1, 0, 0),
            Right => Point3(1, 0, 0),
            Front => Point3(0, 1, 0),
            Back => Point3(0, -1, 0),
        }
    }

    pub fn from_normal(normal: Point3) -> Option<Self> {
        Face::iter().find(|f| f.normal() == normal)
    }

    pub const fn letter(self) -> char {
        use Face::*;

        match self {
            Bottom => 'B',
            Top => 'T',
            Left => 'L',
            Right => 'R',
            Front => 'F',
            Back => 'K',
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.letter().fmt(f)
    }
}

/// A folded net, with every tile reachable by face and cube position.
#[derive(Clone, Debug)]
pub struct Cube {
    net: Net,
    edge: i16,
    tiles: Vec<Tile3D>,
    faces: [HashMap<Point3, TileId>; Face::COUNT],
}

impl Cube {
    pub fn new(net: Net) -> Result<Self, CubeError> {
        if let Some(id) = net.detached() {
            return Err(CubeError::UnfoldableNet {
                reason: format!("{} is not connected to the rest of the net", at(net.tile(id))),
            });
        }

        let tiles = fold::fold(&net)?;

        let mut faces: [HashMap<Point3, TileId>; Face::COUNT] = Default::default();

        for t in &tiles {
            if let Some(other) = faces[t.face() as usize].insert(t.pos(), t.id()) {
                let (a, b) = (net.tile(other), t.tile());

                return Err(CubeError::UnfoldableNet {
                    reason: format!(
                        "{} and {} overlap on the {:?} face",
                        at(a),
                        at(b),
                        t.face()
                    ),
                });
            }
        }

        // fold already checked the edge fits
        let edge = net.edge() as i16;

        let cube = Self {
            net,
            edge,
            tiles,
            faces,
        };

        cube.check_seams()?;

        Ok(cube)
    }

    // tiles side by side on the net must stay side by side on the cube: stepping across their
    // shared side from one of them lands on the other, facing the same way it would on the net
    fn check_seams(&self) -> Result<(), CubeError> {
        for t in &self.tiles {
            let across = self
                .net
                .neighbours(t.id())
                .filter(|&(dir, _)| matches!(dir, Direction::East | Direction::South));

            for (dir, id) in across {
                let from = Position3D {
                    pos: t.pos(),
                    heading: t.refold(dir.versor3()),
                    face: t.face(),
                };

                let next = from.ahead(self)?;
                let other = &self.tiles[id];

                if (other.face(), other.pos(), other.refold(dir.versor3()))
                    != (next.face, next.pos, next.heading)
                {
                    return Err(CubeError::UnfoldableNet {
                        reason: format!(
                            "{} and {} touch on the net but not on the cube",
                            at(t.tile()),
                            at(other.tile())
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    pub const fn edge(&self) -> i16 {
        self.edge
    }

    pub const fn net(&self) -> &Net {
        &self.net
    }

    pub fn tiles(&self) -> &[Tile3D] {
        &self.tiles
    }

    pub fn tile3d(&self, id: TileId) -> &Tile3D {
        &self.tiles[id]
    }

    /// Finds the tile lying at `pos` on `face`.
    pub fn tile_at(&self, face: Face, pos: Point3) -> Result<&Tile3D, CubeError> {
        self.faces[face as usize]
            .get(&pos)
            .map(|&id| &self.tiles[id])
            .ok_or(CubeError::NoSuchTile { face, pos })
    }

    pub fn contains(&self, pos: Point3) -> bool {
        let Point3(x, y, z) = pos;

        [x, y, z].iter().all(|c| (0..self.edge).contains(c))
    }

    /// The face a net cell ended up on, given its 0-based `(row, col)`.
    pub fn face_of(&self, row: usize, col: usize) -> Option<Face> {
        self.net.id_at(row, col).map(|id| self.tiles[id].face())
    }
}

fn at(t: &Tile) -> String {
    format!("tile at row {}, column {}", t.row + 1, t.col + 1)
}
