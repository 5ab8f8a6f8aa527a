use std::fmt::Display;

use crate::{cube::Cube, geom::Point2, input::Grid, path::Trail};

/// The board with the walker's trail drawn over it.
pub struct TrailMap<'a> {
    pub grid: &'a Grid,
    pub trail: &'a Trail,
}

impl Display for TrailMap<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (j, row) in self.grid.rows().enumerate() {
            let line: String = row
                .iter()
                .enumerate()
                .map(|(i, m)| {
                    Point2::try_from((i, j))
                        .ok()
                        .and_then(|p| self.trail.get(&p))
                        .map_or_else(|| m.to_string(), |dir| dir.to_string())
                })
                .collect();

            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

/// The net with every tile replaced by the letter of the cube face it folded onto.
pub struct FaceMap<'a>(pub &'a Cube);

impl Display for FaceMap<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.0.net().extent();

        for row in 0..rows {
            let line: String = (0..cols)
                .map(|col| self.0.face_of(row, col).map_or(' ', |face| face.letter()))
                .collect();

            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
