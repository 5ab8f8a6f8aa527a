use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{
    cube::Face,
    error::CubeError,
    geom::{Axis, Point2, Point3, QuarterTurn},
    net::{Net, Tile, TileId},
};

// a valid net settles in two or three passes; anything still loose after this is not a cube
const MAX_FOLD_PASSES: usize = 16;

/// A net tile placed in cube space, along with every fold it went through.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tile3D {
    id: TileId,
    tile: Tile,
    pos: Point3,
    normal: Point3,
    face: Face,

    // inverse of every fold applied to this tile, oldest first
    unfold: Vec<QuarterTurn>,
}

impl Tile3D {
    /// Lays a tile flat on the z = 0 plane, relative to the anchor, facing down.
    fn flat(id: TileId, tile: &Tile, anchor: &Tile) -> Self {
        let (Point2(x, y), Point2(ax, ay)) = (tile.net_pos(), anchor.net_pos());

        Self {
            id,
            tile: *tile,
            pos: Point3(x - ax, y - ay, 0),
            normal: Face::Bottom.normal(),
            face: Face::Bottom,
            unfold: Vec::new(),
        }
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub const fn tile(&self) -> &Tile {
        &self.tile
    }

    pub const fn pos(&self) -> Point3 {
        self.pos
    }

    pub const fn normal(&self) -> Point3 {
        self.normal
    }

    pub const fn face(&self) -> Face {
        self.face
    }

    /// The inverse of every fold applied to this tile, oldest first.
    pub fn unfold_history(&self) -> &[QuarterTurn] {
        &self.unfold
    }

    fn in_cube(&self, edge: i16) -> bool {
        let Point3(x, y, z) = self.pos;

        [x, y, z].iter().all(|c| (0..edge).contains(c))
    }

    fn fold(&mut self, hinge: Point3, turn: QuarterTurn, shift: Point3) -> Result<(), CubeError> {
        self.pos = turn.apply(self.pos - hinge) + hinge + shift;
        self.normal = turn.apply(self.normal);
        self.face = Face::from_normal(self.normal).ok_or_else(|| CubeError::UnfoldableNet {
            reason: format!("fold produced a skewed normal {}", self.normal),
        })?;

        self.unfold.push(turn.inverse());

        Ok(())
    }

    /// Takes a cube-space vector back to the flat net, undoing the newest fold first.
    pub fn unfold(&self, v: Point3) -> Point3 {
        self.unfold.iter().rev().fold(v, |acc, turn| turn.apply(acc))
    }

    /// Takes a net-plane vector onto the folded cube; the inverse of [`Tile3D::unfold`].
    pub fn refold(&self, v: Point3) -> Point3 {
        self.unfold
            .iter()
            .fold(v, |acc, turn| turn.inverse().apply(acc))
    }
}

#[derive(Clone, Copy, Debug)]
enum Side {
    Below,
    Above,
}

/// One of the six ways a tile can stick out of the cube's bounding box.
#[derive(Clone, Copy, Debug)]
struct Overflow {
    axis: Axis,
    side: Side,
}

impl Overflow {
    // x < 0, x > max, y < 0, y > max, z < 0, z > max
    fn all() -> impl Iterator<Item = Self> {
        Axis::iter()
            .cartesian_product([Side::Below, Side::Above])
            .map(|(axis, side)| Self { axis, side })
    }

    fn direction(self) -> Point3 {
        match self.side {
            Side::Below => -self.axis.versor(),
            Side::Above => self.axis.versor(),
        }
    }

    fn exceeded_by(self, p: Point3, edge: i16) -> bool {
        let c = p[self.axis];

        match self.side {
            Side::Below => c < 0,
            Side::Above => c >= edge,
        }
    }
}

/// Folds every tile of the net onto the surface of the `[0, edge)³` cube.
///
/// The anchor tile sits at the origin facing down, and never moves. Each pass looks at the six
/// directions in which tiles can stick out of the cube, and folds every protruding group in
/// towards the cube with a quarter turn around the edge it hangs from. Passes repeat until
/// nothing sticks out.
pub fn fold(net: &Net) -> Result<Vec<Tile3D>, CubeError> {
    let edge = i16::try_from(net.edge()).map_err(|_| CubeError::MalformedNet {
        tiles: net.tiles().len(),
    })?;

    let anchor = net.anchor();

    let mut tiles: Vec<_> = net
        .tiles()
        .iter()
        .enumerate()
        .map(|(id, t)| Tile3D::flat(id, t, anchor))
        .collect();

    for _ in 0..MAX_FOLD_PASSES {
        if tiles.iter().all(|t| t.in_cube(edge)) {
            return Ok(tiles);
        }

        for overflow in Overflow::all() {
            fold_overflow(net, &mut tiles, overflow, edge)?;
        }
    }

    if tiles.iter().all(|t| t.in_cube(edge)) {
        return Ok(tiles);
    }

    Err(CubeError::UnfoldableNet {
        reason: format!("tiles still stick out of the cube after {MAX_FOLD_PASSES} passes"),
    })
}

fn fold_overflow(
    net: &Net,
    tiles: &mut [Tile3D],
    overflow: Overflow,
    edge: i16,
) -> Result<(), CubeError> {
    let group: Vec<TileId> = tiles
        .iter()
        .filter(|t| overflow.exceeded_by(t.pos, edge))
        .map(Tile3D::id)
        .collect();

    // the tile nearest to the anchor in the flat net is the one hanging from the fold edge
    let anchor = net.anchor();
    let Some(&pivot) = group
        .iter()
        .min_by_key(|&&id| net.tile(id).distance(anchor))
    else {
        return Ok(());
    };

    let (hinge, normal) = (tiles[pivot].pos, tiles[pivot].normal);
    let dir = overflow.direction();

    // rotating around normal x dir takes dir to -normal (into the cube) and normal to dir
    let turn = QuarterTurn::about(normal.cross(dir)).ok_or_else(|| {
        let Tile { row, col, .. } = *net.tile(pivot);

        CubeError::UnfoldableNet {
            reason: format!(
                "tile at row {}, column {} faces {normal} and cannot fold along {dir}",
                row + 1,
                col + 1
            ),
        }
    })?;

    for id in group {
        tiles[id].fold(hinge, turn, -dir)?;
    }

    Ok(())
}
