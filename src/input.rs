use std::{
    cmp::max,
    fmt::Display,
    ops::Index,
    str::FromStr,
};

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, line_ending, multispace0},
    combinator::{all_consuming, map, map_res, value},
    multi::{fold_many0, many0, many1},
    sequence::terminated,
    Err as NomErr, IResult,
};
use num::Unsigned;

use crate::{
    error::CubeError,
    geom::{Dimension, Point2, Rotate, RowDirection},
    path::{Action, Path},
};

const fn is_int_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn unsigned<N: Unsigned + FromStr>(input: &str) -> IResult<&str, N> {
    map_res(take_while(is_int_digit), str::parse)(input)
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Material {
    #[default]
    Outside,
    Open,
    Wall,
}

impl Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Material::*;

        match self {
            Outside => ' ',
            Open => '.',
            Wall => '#',
        }
        .fmt(f)
    }
}

/// A line of cells across the grid, either a row (locked on Y) or a column (locked on X).
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    grid: &'a Grid,
    locked_on: Dimension,
    ix: usize,
}

impl Row<'_> {
    fn len(&self) -> usize {
        let (dim_x, dim_y) = self.grid.dims();

        match self.locked_on {
            Dimension::X => dim_y,
            Dimension::Y => dim_x,
        }
    }

    // (col, row) of the n-th cell along the line
    fn coord(&self, n: usize) -> (usize, usize) {
        match self.locked_on {
            Dimension::X => (self.ix, n),
            Dimension::Y => (n, self.ix),
        }
    }

    /// The first cell on the board, walking from the given end of the line.
    pub(crate) fn first_at(&self, dir: RowDirection) -> Option<Point2> {
        let on_board = |&n: &usize| self[n] != Material::Outside;

        let n = match dir {
            RowDirection::Start => (0..self.len()).find(on_board),
            RowDirection::End => (0..self.len()).rfind(on_board),
        }?;

        Some(
            self.coord(n)
                .try_into()
                .expect("grid dimensions are checked to fit an i16"),
        )
    }

    pub fn iter(
        &self,
    ) -> impl ExactSizeIterator<Item = Material> + DoubleEndedIterator<Item = Material> + '_ {
        (0..self.len()).map(move |n| self[n])
    }
}

impl Index<usize> for Row<'_> {
    type Output = Material;

    fn index(&self, n: usize) -> &Self::Output {
        &self.grid[self.coord(n)]
    }
}

/// The raw board, padded with `Outside` up to its widest row.
#[derive(Clone, Debug)]
pub struct Grid {
    grid: Vec<Vec<Material>>,
    dim: (usize, usize),
}

impl Grid {
    pub fn new(mut grid: Vec<Vec<Material>>, dim_x: usize) -> Result<Self, CubeError> {
        for row in &mut grid {
            row.resize(dim_x, Material::Outside);
        }

        let dim_y = grid.len();

        if i16::try_from(dim_x).and(i16::try_from(dim_y)).is_err() {
            return Err(CubeError::MalformedInput(format!(
                "a {dim_x}x{dim_y} grid is too large"
            )));
        }

        Ok(Self {
            grid,
            dim: (dim_x, dim_y),
        })
    }

    pub const fn dims(&self) -> (usize, usize) {
        self.dim
    }

    pub fn is_inside(&self, p @ Point2(x, y): Point2) -> bool {
        let (dim_x, dim_y) = (self.dims().0 as i16, self.dims().1 as i16);

        (0..dim_x).contains(&x) && (0..dim_y).contains(&y) && self[p] != Material::Outside
    }

    pub fn is_outside(&self, p: Point2) -> bool {
        !self.is_inside(p)
    }

    pub(crate) fn row_on(&self, dim: Dimension, ix: usize) -> Row<'_> {
        Row {
            grid: self,
            locked_on: dim,
            ix,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let (_, dim_y) = self.dims();

        (0..dim_y).map(move |ix| self.row_on(Dimension::Y, ix))
    }

    /// Every cell that is part of the board, in row-major order, as `(row, col, material)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Material)> + '_ {
        let (dim_x, dim_y) = self.dims();

        (0..dim_y)
            .flat_map(move |j| (0..dim_x).map(move |i| (j, i, self[(i, j)])))
            .filter(|&(_, _, m)| m != Material::Outside)
    }
}

impl Index<Point2> for Grid {
    type Output = Material;

    fn index(&self, Point2(i, j): Point2) -> &Self::Output {
        &self[(i as usize, j as usize)]
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Material;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.grid[j][i]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|m| m.to_string()).collect();

            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut owned = s.to_owned();

        if !owned.ends_with('\n') {
            owned.push('\n');
        }

        let (_, (dim_x, rows)) = all_consuming(terminated(grid_rows, multispace0))(owned.as_str())
            .map_err(|e| syntax_error(&owned, e))?;

        Grid::new(rows, dim_x)
    }
}

fn row(input: &str) -> IResult<&str, Vec<Material>> {
    use Material::*;

    terminated(
        many1(alt((
            value(Outside, char(' ')),
            value(Open, char('.')),
            value(Wall, char('#')),
        ))),
        line_ending,
    )(input)
}

fn grid_rows(input: &str) -> IResult<&str, (usize, Vec<Vec<Material>>)> {
    fold_many0(
        row,
        || (0, Vec::new()),
        |(mut max_len, mut vec), cr| {
            max_len = max(max_len, cr.len());
            vec.push(cr);

            (max_len, vec)
        },
    )(input)
}

pub(crate) fn actions(input: &str) -> IResult<&str, Vec<Action>> {
    use Action::*;
    use Rotate::*;

    many0(alt((
        map(unsigned, Forward),
        value(Turn(Left), char('L')),
        value(Turn(Right), char('R')),
    )))(input)
}

// point at the line where parsing stopped, instead of dumping the whole remaining input
fn syntax_error(input: &str, e: NomErr<nom::error::Error<&str>>) -> CubeError {
    let rest = match e {
        NomErr::Error(e) | NomErr::Failure(e) => e.input,
        NomErr::Incomplete(_) => "",
    };

    let line = input[..input.len() - rest.len()].matches('\n').count() + 1;

    CubeError::MalformedInput(format!("unexpected input at line {line}"))
}

/// Splits the puzzle text into the board and the path that follows it after a blank line.
pub fn parse_input(input: &str) -> Result<(Grid, Path), CubeError> {
    let (rest, (dim_x, rows)) = terminated(grid_rows, line_ending)(input)
        .map_err(|e| syntax_error(input, e))?;

    let grid = Grid::new(rows, dim_x)?;

    Ok((grid, rest.parse()?))
}
