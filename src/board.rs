use crate::{
    error::CubeError,
    geom::{Direction, Point2, Rotate},
    input::{Grid, Material},
    path::{Action, Outcome, Path, Start, Trail},
};

/// Position and direction of a walker on the flat board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pos {
    pub pos: Point2,
    pub dir: Direction,
}

impl Pos {
    pub fn rotate(self, rot: Rotate) -> Self {
        Self {
            pos: self.pos,
            dir: self.dir.turn(rot),
        }
    }

    pub fn outcome(self) -> Outcome {
        let Self {
            pos: Point2(x, y),
            dir,
        } = self;

        Outcome {
            row: y as usize + 1,
            col: x as usize + 1,
            facing: dir,
        }
    }
}

/// The board walked without folding: leaving it on one side re-enters from the other.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
}

impl Board {
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spawn(&self, start: &Start) -> Result<Pos, CubeError> {
        let Some(cell) = start.cell() else {
            // the first open spot, reading from the NW corner
            return self
                .grid
                .cells()
                .find(|&(_, _, m)| m == Material::Open)
                .map(|(row, col, _)| Pos {
                    pos: Point2(col as i16, row as i16),
                    dir: start.facing,
                })
                .ok_or(CubeError::NoOpenTile);
        };

        let (row, col) = cell?;

        Point2::try_from((col, row))
            .ok()
            .filter(|&p| self.grid.is_inside(p) && self.grid[p] == Material::Open)
            .map(|pos| Pos {
                pos,
                dir: start.facing,
            })
            .ok_or(CubeError::InvalidStart {
                row: row + 1,
                col: col + 1,
            })
    }

    pub fn advance(&self, Pos { mut pos, dir }: Pos, count: usize, trail: &mut Trail) -> Pos {
        for _ in 0..count {
            let mut next = pos + dir;

            if self.grid.is_outside(next) {
                // we are outside the map, roll over
                let dim = dir.dim();

                // the row always holds at least `pos`
                let Some(wrapped) = self
                    .grid
                    .row_on(dim, pos[dim] as usize)
                    .first_at(dir.opposite().into())
                else {
                    break;
                };

                next = wrapped;
            }

            if self.grid[next] == Material::Wall {
                break;
            }

            pos = next;

            trail.insert(pos, dir);
        }

        Pos { pos, dir }
    }

    pub fn walk(&self, from: Pos, path: &Path, trail: &mut Trail) -> Pos {
        path.actions().iter().fold(from, |cur, action| match *action {
            Action::Forward(count) => self.advance(cur, count, trail),
            Action::Turn(rot) => {
                let cur = cur.rotate(rot);

                trail.insert(cur.pos, cur.dir);

                cur
            }
        })
    }

    pub fn replay(&self, path: &Path, start: &Start) -> Result<(Outcome, Trail), CubeError> {
        let from = self.spawn(start)?;

        let mut trail = Trail::from_iter([(from.pos, from.dir)]);

        let end = self.walk(from, path, &mut trail);

        Ok((end.outcome(), trail))
    }
}
