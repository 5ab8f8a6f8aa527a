use std::{
    fmt::Display,
    num::TryFromIntError,
    ops::{Add, Index, Mul, Neg, Sub},
};

use num::FromPrimitive;
use num_derive::FromPrimitive;
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i8)]
pub enum Rotate {
    Left = -1,
    Right = 1,
}

/// Net directions, numbered by their facing code.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, Default, EnumCount, EnumIter, EnumString, Eq, FromPrimitive, Hash, PartialEq,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        use Direction::*;

        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }

    pub fn turn(self, rot: Rotate) -> Self {
        Self::from_isize((self as isize + rot as isize).rem_euclid(Self::COUNT as isize))
            .expect("facing codes wrap around Direction::COUNT")
    }

    pub const fn facing(self) -> u8 {
        self as u8
    }

    pub const fn versor(self) -> Point2 {
        use Direction::*;

        match self {
            North => Point2(0, -1),
            East => Point2(1, 0),
            South => Point2(0, 1),
            West => Point2(-1, 0),
        }
    }

    /// The direction as a vector lying in the plane of the flat net (z = 0).
    pub const fn versor3(self) -> Point3 {
        let Point2(x, y) = self.versor();

        Point3(x, y, 0)
    }

    pub(crate) const fn dim(self) -> Dimension {
        use Dimension::*;
        use Direction::*;

        match self {
            North | South => X,
            East | West => Y,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Direction::*;

        match self {
            East => '>',
            South => 'v',
            West => '<',
            North => '^',
        }
        .fmt(f)
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug)]
pub enum RowDirection {
    Start,
    End,
}

impl From<Direction> for RowDirection {
    fn from(value: Direction) -> Self {
        use Direction::*;
        use RowDirection::*;

        match value {
            North | West => Start,
            South | East => End,
        }
    }
}

/// The grid dimension a row of cells is locked on.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dimension {
    X,
    Y,
}

/// A point on the flat net: `(column, row)`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point2(pub i16, pub i16);

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Add<Direction> for Point2 {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.versor()
    }
}

impl Index<Dimension> for Point2 {
    type Output = i16;

    fn index(&self, index: Dimension) -> &Self::Output {
        use Dimension::*;

        match index {
            X => &self.0,
            Y => &self.1,
        }
    }
}

impl Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self(x, y) = self;

        write!(f, "({x}, {y})")
    }
}

impl TryFrom<(usize, usize)> for Point2 {
    type Error = TryFromIntError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Ok(Self(x.try_into()?, y.try_into()?))
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, Hash, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const fn versor(self) -> Point3 {
        use Axis::*;

        match self {
            X => Point3(1, 0, 0),
            Y => Point3(0, 1, 0),
            Z => Point3(0, 0, 1),
        }
    }
}

/// An integer point (or vector) in cube space.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point3(pub i16, pub i16, pub i16);

impl Point3 {
    pub const fn cross(self, rhs: Self) -> Self {
        let (Self(ax, ay, az), Self(bx, by, bz)) = (self, rhs);

        Self(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    pub const fn dot(self, rhs: Self) -> i16 {
        self.0 * rhs.0 + self.1 * rhs.1 + self.2 * rhs.2
    }
}

impl Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self(x, y, z) = self;

        write!(f, "({x}, {y}, {z})")
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl Neg for Point3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0, -self.1, -self.2)
    }
}

impl Mul<i16> for Point3 {
    type Output = Point3;

    fn mul(self, rhs: i16) -> Self::Output {
        let Self(x, y, z) = self;

        Self(x * rhs, y * rhs, z * rhs)
    }
}

impl Index<Axis> for Point3 {
    type Output = i16;

    fn index(&self, index: Axis) -> &Self::Output {
        use Axis::*;

        match index {
            X => &self.0,
            Y => &self.1,
            Z => &self.2,
        }
    }
}

/// Sense of a quarter turn, following the right-hand rule around the axis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sense {
    Ccw,
    Cw,
}

impl Sense {
    pub const fn opposite(self) -> Self {
        match self {
            Sense::Ccw => Sense::Cw,
            Sense::Cw => Sense::Ccw,
        }
    }
}

/// An exact 90° rotation around one of the coordinate axes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct QuarterTurn {
    pub axis: Axis,
    pub sense: Sense,
}

impl QuarterTurn {
    pub const fn new(axis: Axis, sense: Sense) -> Self {
        Self { axis, sense }
    }

    /// The counter-clockwise quarter turn around a signed unit axis, if `axis` is one.
    pub fn about(axis: Point3) -> Option<Self> {
        Axis::iter().find_map(|a| {
            if a.versor() == axis {
                Some(Self::new(a, Sense::Ccw))
            } else if -a.versor() == axis {
                Some(Self::new(a, Sense::Cw))
            } else {
                None
            }
        })
    }

    pub const fn inverse(self) -> Self {
        Self::new(self.axis, self.sense.opposite())
    }

    const fn matrix(self) -> [[i16; 3]; 3] {
        use Axis::*;
        use Sense::*;

        match (self.axis, self.sense) {
            (X, Ccw) => [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
            (X, Cw) => [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
            (Y, Ccw) => [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
            (Y, Cw) => [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
            (Z, Ccw) => [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
            (Z, Cw) => [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
        }
    }

    pub const fn apply(self, p: Point3) -> Point3 {
        let [r0, r1, r2] = self.matrix();
        let v = [p.0, p.1, p.2];

        Point3(dot3(r0, v), dot3(r1, v), dot3(r2, v))
    }
}

const fn dot3(a: [i16; 3], b: [i16; 3]) -> i16 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_turns_wrap() {
        use Direction::*;

        assert_eq!(East.turn(Rotate::Right), South);
        assert_eq!(North.turn(Rotate::Right), East);
        assert_eq!(East.turn(Rotate::Left), North);
        assert_eq!(West.turn(Rotate::Left), South);

        for d in Direction::iter() {
            assert_eq!(d.turn(Rotate::Left).turn(Rotate::Right), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn direction_parses_from_names() {
        assert_eq!("south".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("North".parse::<Direction>().unwrap(), Direction::North);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn quarter_turns_follow_right_hand_rule() {
        let (x, y, z) = (Axis::X.versor(), Axis::Y.versor(), Axis::Z.versor());

        assert_eq!(QuarterTurn::new(Axis::X, Sense::Ccw).apply(y), z);
        assert_eq!(QuarterTurn::new(Axis::Y, Sense::Ccw).apply(z), x);
        assert_eq!(QuarterTurn::new(Axis::Z, Sense::Ccw).apply(x), y);
        assert_eq!(QuarterTurn::new(Axis::Z, Sense::Cw).apply(y), x);
    }

    #[test]
    fn quarter_turn_matches_cross_product() {
        let v = Point3(3, -2, 5);

        for axis in Axis::iter() {
            let a = axis.versor();
            let along = a * a.dot(v);
            let expected = a.cross(v) + along;

            assert_eq!(QuarterTurn::new(axis, Sense::Ccw).apply(v), expected);
        }
    }

    #[test]
    fn inverse_undoes_turn() {
        let v = Point3(1, 2, 3);

        for axis in Axis::iter() {
            for sense in [Sense::Ccw, Sense::Cw] {
                let t = QuarterTurn::new(axis, sense);

                assert_eq!(t.inverse().apply(t.apply(v)), v);
                assert_eq!(t.apply(t.apply(t.apply(t.apply(v)))), v);
            }
        }
    }

    #[test]
    fn turn_about_signed_axis() {
        assert_eq!(
            QuarterTurn::about(Point3(0, -1, 0)),
            Some(QuarterTurn::new(Axis::Y, Sense::Cw))
        );
        assert_eq!(
            QuarterTurn::about(Point3(0, 0, 1)),
            Some(QuarterTurn::new(Axis::Z, Sense::Ccw))
        );
        assert_eq!(QuarterTurn::about(Point3(0, 0, 0)), None);
        assert_eq!(QuarterTurn::about(Point3(1, 1, 0)), None);
    }

    #[test]
    fn cross_product_of_axes() {
        assert_eq!(Axis::X.versor().cross(Axis::Y.versor()), Axis::Z.versor());
        assert_eq!(Point3(0, 0, -1).cross(Point3(-1, 0, 0)), Point3(0, 1, 0));
    }
}
