use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::{
    error::CubeError,
    geom::{Direction, Point2, Rotate},
    input::actions,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Forward(usize),
    Turn(Rotate),
}

/// The instructions to replay, in order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Path(Vec<Action>);

impl Path {
    pub fn actions(&self) -> &[Action] {
        &self.0
    }
}

impl From<Vec<Action>> for Path {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

impl FromStr for Path {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim_start();
        let lead = s.len() - body.len();
        let body = body.trim_end();

        let (rest, actions) =
            actions(body).map_err(|e| CubeError::MalformedInput(e.to_string()))?;

        match rest.chars().next() {
            None => Ok(Self(actions)),
            // a digit is only left over when its run does not fit a step count
            Some(found) if found.is_ascii_digit() => {
                let run = rest.split(|c: char| !c.is_ascii_digit()).next().unwrap_or(rest);

                Err(CubeError::MalformedInput(format!("move count {run} is too large")))
            }
            Some(found) => Err(CubeError::InvalidPathSyntax {
                offset: lead + body.len() - rest.len(),
                found,
            }),
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for action in &self.0 {
            match action {
                Action::Forward(n) => write!(f, "{n}")?,
                Action::Turn(Rotate::Left) => write!(f, "L")?,
                Action::Turn(Rotate::Right) => write!(f, "R")?,
            }
        }

        Ok(())
    }
}

/// Where a walk begins. Rows and columns are 1-based, like the reported [`Outcome`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Start {
    /// `(row, col)` of the starting tile; the first open tile of the board when `None`.
    pub tile: Option<(usize, usize)>,
    pub facing: Direction,
}

impl Start {
    pub const fn at(row: usize, col: usize, facing: Direction) -> Self {
        Self {
            tile: Some((row, col)),
            facing,
        }
    }

    /// The 0-based `(row, col)` requested, if any.
    pub(crate) fn cell(&self) -> Option<Result<(usize, usize), CubeError>> {
        self.tile.map(|(row, col)| {
            row.checked_sub(1)
                .zip(col.checked_sub(1))
                .ok_or(CubeError::InvalidStart { row, col })
        })
    }
}

/// Final tile and facing of a walk, 1-based.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Outcome {
    pub row: usize,
    pub col: usize,
    pub facing: Direction,
}

impl Outcome {
    pub const fn password(&self) -> usize {
        1000 * self.row + 4 * self.col + self.facing.facing() as usize
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { row, col, facing } = self;

        write!(f, "row {row}, column {col}, facing {facing:?} ({})", facing.facing())
    }
}

/// Last facing seen on every visited cell of the net, keyed by `(column, row)`.
pub type Trail = HashMap<Point2, Direction>;
