use crate::{
    cube::{Cube, Face},
    error::CubeError,
    geom::{Point3, Rotate},
    path::{Action, Outcome, Path, Start, Trail},
};

/// The walker on the cube surface: where it stands, where it looks, and the face it stands on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position3D {
    pub pos: Point3,
    pub heading: Point3,
    pub face: Face,
}

impl Position3D {
    pub fn turn(self, rot: Rotate) -> Self {
        let normal = self.face.normal();

        let heading = match rot {
            Rotate::Right => self.heading.cross(normal),
            Rotate::Left => normal.cross(self.heading),
        };

        Self { heading, ..self }
    }

    // the position one step ahead, possibly on the next face
    pub(crate) fn ahead(self, cube: &Cube) -> Result<Self, CubeError> {
        let next = self.pos + self.heading;

        if cube.contains(next) {
            return Ok(Self { pos: next, ..self });
        }

        // over the edge: the edge voxel is shared, and we now walk into the cube
        let face = Face::from_normal(self.heading).ok_or(CubeError::UnmappableHeading {
            heading: self.heading,
        })?;

        Ok(Self {
            pos: self.pos,
            heading: -self.face.normal(),
            face,
        })
    }
}

impl Cube {
    /// Places the walker on its start tile, facing the start direction as seen on the flat net.
    pub fn spawn(&self, start: &Start) -> Result<Position3D, CubeError> {
        let t = self.tile3d(self.net().start_tile(start)?);

        Ok(Position3D {
            pos: t.pos(),
            heading: t.refold(start.facing.versor3()),
            face: t.face(),
        })
    }

    /// Moves up to `count` tiles ahead, stopping in front of the first wall.
    pub fn advance(
        &self,
        mut cur: Position3D,
        count: usize,
        trail: &mut Trail,
    ) -> Result<Position3D, CubeError> {
        for _ in 0..count {
            let next = cur.ahead(self)?;

            if !self.tile_at(next.face, next.pos)?.tile().kind.is_walkable() {
                break;
            }

            cur = next;

            self.mark(cur, trail)?;
        }

        Ok(cur)
    }

    /// Executes every action of `path` in order, starting from `from`.
    pub fn walk(
        &self,
        from: Position3D,
        path: &Path,
        trail: &mut Trail,
    ) -> Result<Position3D, CubeError> {
        path.actions().iter().try_fold(from, |cur, action| match *action {
            Action::Forward(count) => self.advance(cur, count, trail),
            Action::Turn(rot) => {
                let cur = cur.turn(rot);

                self.mark(cur, trail)?;

                Ok(cur)
            }
        })
    }

    /// Walks `path` from `start`, and reports where it ends on the flat net.
    pub fn replay(&self, path: &Path, start: &Start) -> Result<(Outcome, Trail), CubeError> {
        let mut trail = Trail::new();

        let from = self.spawn(start)?;
        self.mark(from, &mut trail)?;

        let end = self.walk(from, path, &mut trail)?;

        Ok((self.resolve(&end)?, trail))
    }

    fn mark(&self, at: Position3D, trail: &mut Trail) -> Result<(), CubeError> {
        let t = self.tile_at(at.face, at.pos)?;

        trail.insert(t.tile().net_pos(), t.net_facing(at.heading)?);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geom::{Direction, Point2},
        input::Grid,
        net::Net,
    };

    const SMALL: &str = "    ..\n    ..\n......\n......\n    ....\n    ....";

    fn cube(s: &str) -> Cube {
        Cube::new(Net::new(&s.parse::<Grid>().unwrap()).unwrap()).unwrap()
    }

    fn replay(c: &Cube, path: &str, start: Start) -> Outcome {
        c.replay(&path.parse().unwrap(), &start).unwrap().0
    }

    fn outcome(row: usize, col: usize, facing: Direction) -> Outcome {
        Outcome { row, col, facing }
    }

    #[test]
    fn turning_keeps_the_walker_on_the_face() {
        let p = Position3D {
            pos: Point3(0, 0, 0),
            heading: Point3(1, 0, 0),
            face: Face::Bottom,
        };

        let right = p.turn(Rotate::Right);

        assert_eq!(right.heading, Point3(0, 1, 0));
        assert_eq!(right.pos, p.pos);
        assert_eq!(right.turn(Rotate::Left), p);

        let back = p
            .turn(Rotate::Left)
            .turn(Rotate::Left)
            .turn(Rotate::Left)
            .turn(Rotate::Left);

        assert_eq!(back, p);
    }

    #[test]
    fn spawn_faces_east_on_first_open_tile() {
        let c = cube(SMALL);

        let p = c.spawn(&Start::default()).unwrap();

        assert_eq!(p.pos, Point3(0, 0, 0));
        assert_eq!(p.face, Face::Bottom);
        assert_eq!(p.heading, Point3(1, 0, 0));
    }

    #[test]
    fn crossing_two_edges() {
        let c = cube(SMALL);

        let end = replay(&c, "2R2", Start::default());

        assert_eq!(end, outcome(3, 6, Direction::West));
        assert_eq!(end.password(), 3026);
    }

    #[test]
    fn straight_walks_around_the_cube() {
        let c = cube(SMALL);

        let expected = [
            outcome(1, 5, Direction::East),
            outcome(1, 6, Direction::East),
            outcome(6, 8, Direction::West),
            outcome(6, 7, Direction::West),
            outcome(6, 6, Direction::West),
            outcome(6, 5, Direction::West),
            outcome(4, 3, Direction::North),
            outcome(3, 3, Direction::North),
            outcome(1, 5, Direction::East),
        ];

        for (k, want) in expected.into_iter().enumerate() {
            assert_eq!(replay(&c, &k.to_string(), Start::default()), want, "{k}");
        }
    }

    #[test]
    fn walls_stop_the_walk() {
        let c = cube("    ..\n    .#\n......\n......\n    ....\n    ....");

        assert_eq!(
            replay(&c, "1R1", Start::default()),
            outcome(1, 6, Direction::South)
        );
    }

    #[test]
    fn walls_past_an_edge_block_the_transfer() {
        let c = cube("    ..\n    ..\n......\n......\n    ....\n    ...#");

        assert_eq!(
            replay(&c, "8", Start::default()),
            outcome(1, 6, Direction::East)
        );

        let c = cube("    ..\n    ..\n......\n......\n    ....\n    ..#.");

        assert_eq!(
            replay(&c, "8", Start::default()),
            outcome(6, 8, Direction::West)
        );
    }

    #[test]
    fn start_can_be_moved() {
        let c = cube(SMALL);

        assert_eq!(
            replay(&c, "3", Start::at(4, 5, Direction::South)),
            outcome(4, 2, Direction::North)
        );
    }

    #[test]
    fn trail_follows_the_walker() {
        let c = cube(SMALL);

        let (_, trail) = c.replay(&"2".parse().unwrap(), &Start::default()).unwrap();

        assert_eq!(trail.len(), 3);
        assert_eq!(trail[&Point2(4, 0)], Direction::East);
        assert_eq!(trail[&Point2(5, 0)], Direction::East);
        assert_eq!(trail[&Point2(7, 5)], Direction::West);
    }

    #[test]
    fn replay_is_deterministic() {
        let c = cube(SMALL);
        let path: Path = "3L7R2R5L11".parse().unwrap();

        let first = c.replay(&path, &Start::default()).unwrap();
        let second = c.replay(&path, &Start::default()).unwrap();

        assert_eq!(first, second);
    }
}
