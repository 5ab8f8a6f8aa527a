use strum::IntoEnumIterator;

use crate::{
    cube::Cube,
    error::CubeError,
    fold::Tile3D,
    geom::{Direction, Point3},
    path::Outcome,
    walk::Position3D,
};

impl TryFrom<Point3> for Direction {
    type Error = CubeError;

    fn try_from(heading: Point3) -> Result<Self, Self::Error> {
        Direction::iter()
            .find(|d| d.versor3() == heading)
            .ok_or(CubeError::UnmappableHeading { heading })
    }
}

impl Tile3D {
    /// The direction on the flat net that a cube heading on this tile corresponds to.
    pub fn net_facing(&self, heading: Point3) -> Result<Direction, CubeError> {
        self.unfold(heading).try_into()
    }
}

impl Cube {
    /// Reports where a walker stands in terms of the flat net.
    pub fn resolve(&self, at: &Position3D) -> Result<Outcome, CubeError> {
        let t = self.tile_at(at.face, at.pos)?;

        Ok(Outcome {
            row: t.tile().row + 1,
            col: t.tile().col + 1,
            facing: t.net_facing(at.heading)?,
        })
    }
}
