use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::{
    error::CubeError,
    geom::{Direction, Point2},
    input::{Grid, Material},
    path::Start,
};

/// Index of a tile in its net, in row-major order. Tile 0 is the anchor.
pub type TileId = usize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TileKind {
    Open,
    Wall,
}

impl TileKind {
    pub const fn is_walkable(self) -> bool {
        matches!(self, TileKind::Open)
    }
}

/// A square of the unfolded net, identified by its 0-based `(row, col)`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub kind: TileKind,
}

impl Tile {
    pub fn distance(&self, other: &Tile) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn net_pos(&self) -> Point2 {
        (self.col, self.row)
            .try_into()
            .expect("grid dimensions are checked to fit an i16")
    }
}

/// The tiles of a grid, checked to be enough to cover the six faces of a cube.
#[derive(Clone, Debug)]
pub struct Net {
    tiles: Vec<Tile>,
    index: HashMap<(usize, usize), TileId>,
    edge: usize,
}

impl Net {
    pub fn new(grid: &Grid) -> Result<Self, CubeError> {
        let tiles: Vec<_> = grid
            .cells()
            .map(|(row, col, m)| Tile {
                row,
                col,
                kind: match m {
                    Material::Wall => TileKind::Wall,
                    _ => TileKind::Open,
                },
            })
            .collect();

        let count = tiles.len();

        // six faces of edge * edge tiles each
        let edge = (count as f64 / 6.0).sqrt().round() as usize;

        if count == 0 || 6 * edge * edge != count {
            return Err(CubeError::MalformedNet { tiles: count });
        }

        let index = tiles
            .iter()
            .enumerate()
            .map(|(id, t)| ((t.row, t.col), id))
            .collect();

        Ok(Self { tiles, index, edge })
    }

    pub const fn edge(&self) -> usize {
        self.edge
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id]
    }

    pub fn anchor(&self) -> &Tile {
        &self.tiles[0]
    }

    /// Looks up a tile by its 0-based net coordinates.
    pub fn id_at(&self, row: usize, col: usize) -> Option<TileId> {
        self.index.get(&(row, col)).copied()
    }

    /// Tiles sharing a side with `id`, with the direction leading to them.
    pub fn neighbours(&self, id: TileId) -> impl Iterator<Item = (Direction, TileId)> + '_ {
        let Tile { row, col, .. } = self.tiles[id];

        Direction::iter().filter_map(move |dir| {
            let Point2(dx, dy) = dir.versor();

            let row = row.checked_add_signed(dy as isize)?;
            let col = col.checked_add_signed(dx as isize)?;

            self.id_at(row, col).map(|n| (dir, n))
        })
    }

    /// The first tile that cannot be reached from the anchor by crossing tile sides.
    pub fn detached(&self) -> Option<TileId> {
        let mut seen = vec![false; self.tiles.len()];
        let mut stack = vec![0];

        seen[0] = true;

        while let Some(cur) = stack.pop() {
            for (_, n) in self.neighbours(cur) {
                if !seen[n] {
                    seen[n] = true;
                    stack.push(n);
                }
            }
        }

        seen.iter().position(|&s| !s)
    }

    pub fn first_open(&self) -> Option<TileId> {
        self.tiles.iter().position(|t| t.kind.is_walkable())
    }

    /// Resolves a walk start to an open tile.
    pub fn start_tile(&self, start: &Start) -> Result<TileId, CubeError> {
        let Some(cell) = start.cell() else {
            return self.first_open().ok_or(CubeError::NoOpenTile);
        };

        let (row, col) = cell?;

        self.id_at(row, col)
            .filter(|&id| self.tile(id).kind.is_walkable())
            .ok_or(CubeError::InvalidStart {
                row: row + 1,
                col: col + 1,
            })
    }

    /// `(rows, cols)` spanned by the net.
    pub fn extent(&self) -> (usize, usize) {
        self.tiles.iter().fold((0, 0), |(rows, cols), t| {
            (rows.max(t.row + 1), cols.max(t.col + 1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Direction;

    fn net(s: &str) -> Result<Net, CubeError> {
        Net::new(&s.parse::<Grid>().unwrap())
    }

    #[test]
    fn edge_from_tile_count() {
        let n = net("  .\n.#.\n  ..").unwrap();

        assert_eq!(n.edge(), 1);
        assert_eq!(n.tiles().len(), 6);
        assert_eq!(n.extent(), (3, 4));

        let n = net("    ..\n    ..\n......\n......\n    ....\n    ....").unwrap();

        assert_eq!(n.edge(), 2);
        assert_eq!(n.anchor().col, 4);
    }

    #[test]
    fn tile_count_must_fill_six_squares() {
        assert!(matches!(
            net("...\n....").unwrap_err(),
            CubeError::MalformedNet { tiles: 7 }
        ));
        assert!(matches!(
            net("......\n......").unwrap_err(),
            CubeError::MalformedNet { tiles: 12 }
        ));
        assert!(matches!(
            net("   \n").unwrap_err(),
            CubeError::MalformedNet { tiles: 0 }
        ));
    }

    #[test]
    fn tiles_are_row_major_with_kinds() {
        let n = net("  #\n...\n  ..").unwrap();

        assert_eq!(n.id_at(0, 2), Some(0));
        assert_eq!(n.id_at(1, 0), Some(1));
        assert_eq!(n.id_at(0, 0), None);
        assert_eq!(n.tile(0).kind, TileKind::Wall);
        assert!(!n.tile(0).kind.is_walkable());
        assert_eq!(n.first_open(), Some(1));
        assert_eq!(n.tile(1).distance(n.tile(5)), 4);
    }

    #[test]
    fn start_must_be_open() {
        let n = net("  #\n...\n  ..").unwrap();

        assert_eq!(n.start_tile(&Start::default()).unwrap(), 1);
        assert_eq!(
            n.start_tile(&Start::at(3, 4, Direction::North)).unwrap(),
            5
        );
        assert!(matches!(
            n.start_tile(&Start::at(1, 3, Direction::East)),
            Err(CubeError::InvalidStart { row: 1, col: 3 })
        ));
        assert!(matches!(
            n.start_tile(&Start::at(1, 1, Direction::East)),
            Err(CubeError::InvalidStart { row: 1, col: 1 })
        ));
    }

    #[test]
    fn neighbours_share_a_side() {
        let n = net("  .\n...\n  ..").unwrap();

        let around: Vec<_> = n.neighbours(3).collect();

        assert_eq!(
            around,
            vec![
                (Direction::South, 4),
                (Direction::West, 2),
                (Direction::North, 0)
            ]
        );
        assert_eq!(n.neighbours(1).collect::<Vec<_>>(), vec![(Direction::East, 2)]);
    }

    #[test]
    fn detached_tiles_are_found() {
        assert_eq!(net("  .\n...\n  ..").unwrap().detached(), None);
        assert_eq!(net("....\n. .").unwrap().detached(), None);

        // row 2, column 1 touches nothing
        let n = net(" ....\n. .").unwrap();

        assert_eq!(n.detached(), Some(4));
        assert_eq!((n.tile(4).row, n.tile(4).col), (1, 0));
    }

    #[test]
    fn all_walls_have_no_start() {
        let n = net("######").unwrap();

        assert!(matches!(
            n.start_tile(&Start::default()),
            Err(CubeError::NoOpenTile)
        ));
    }
}
