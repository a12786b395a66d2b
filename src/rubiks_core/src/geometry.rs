//! Where every facelet sits in space.
//!
//! Coordinates are integer vectors with x toward the Right face, y toward the
//! Back face and z toward the Up face. A cubie is addressed by its center in
//! `{-1, 0, 1}³` and a facelet by its face plus its row-major position on that
//! face. Every face is laid out as seen from outside the cube: Up has row 0
//! along the Back edge, Down has row 0 along the Front edge, and the four side
//! faces have row 0 along the Up edge.

use std::{fmt::Display, str::FromStr, sync::LazyLock};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    FACE_COUNT, SIZE,
    algebra::{Direction, SIDE_COUNT},
};

pub type Vec3 = [i8; 3];

/// The six faces, numbered the way rows of the facelet array are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Down = 0,
    Up = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

impl Face {
    pub const ALL: [Self; FACE_COUNT] = {
        use Face::*;
        let v = [Down, Up, Front, Back, Left, Right];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Opposite faces share an axis: 0 for Down/Up, 1 for Front/Back, 2 for
    /// Left/Right.
    #[must_use]
    pub fn axis(self) -> usize {
        self.index() / 2
    }

    #[must_use]
    pub fn opposite(self) -> Face {
        Face::ALL[self.index() ^ 1]
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::Down => 'D',
            Face::Up => 'U',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }

    /// The outward normal together with the directions of increasing column
    /// and increasing row.
    #[must_use]
    pub fn frame(self) -> Frame {
        const X: Vec3 = [1, 0, 0];
        const Y: Vec3 = [0, 1, 0];
        const Z: Vec3 = [0, 0, 1];

        let (normal, right, down) = match self {
            Face::Down => (neg(Z), X, Y),
            Face::Up => (Z, X, neg(Y)),
            Face::Front => (neg(Y), X, neg(Z)),
            Face::Back => (Y, neg(X), neg(Z)),
            Face::Left => (neg(X), neg(Y), neg(Z)),
            Face::Right => (X, Y, neg(Z)),
        };

        Frame {
            normal,
            right,
            down,
        }
    }

    #[must_use]
    pub fn normal(self) -> Vec3 {
        self.frame().normal
    }

    #[must_use]
    pub fn from_normal(normal: Vec3) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.normal() == normal)
    }

    /// The four faces that share an edge with this one, in ascending index.
    #[must_use]
    pub fn ring(self) -> [Face; SIDE_COUNT] {
        let mut ring = [self; SIDE_COUNT];

        for (slot, face) in ring
            .iter_mut()
            .zip(Face::ALL.into_iter().filter(|face| face.axis() != self.axis()))
        {
            *slot = face;
        }

        ring
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::from_letter(letter).ok_or(()),
            _ => Err(()),
        }
    }
}

/// A face's orientation in space. `down × right` is always the outward
/// normal, so a clockwise turn seen from outside is a clockwise turn of the
/// row-major grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub normal: Vec3,
    pub right: Vec3,
    pub down: Vec3,
}

#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

const fn neg(v: Vec3) -> Vec3 {
    [-v[0], -v[1], -v[2]]
}

fn add_scaled(v: Vec3, k: i8, w: Vec3) -> Vec3 {
    [v[0] + k * w[0], v[1] + k * w[1], v[2] + k * w[2]]
}

/// Rotate `v` a quarter turn about `axis`, clockwise when seen from the tip
/// of `axis`. `axis` must be a unit vector along a coordinate axis.
#[must_use]
pub fn rotate(v: Vec3, axis: Vec3, direction: Direction) -> Vec3 {
    let along = scale(axis, dot(v, axis));

    let across = match direction {
        Direction::Clockwise => cross(v, axis),
        Direction::Counterclockwise => cross(axis, v),
    };

    add_scaled(along, 1, across)
}

fn scale(v: Vec3, k: i8) -> Vec3 {
    [k * v[0], k * v[1], k * v[2]]
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn offset(index: usize) -> i8 {
    index as i8 - 1
}

/// The center of the cubie carrying facelet `position` of `face`.
///
/// # Panics
///
/// Panics in debug builds if `position` is not below `FACELETS_PER_FACE`.
#[must_use]
pub fn facelet_cubie(face: Face, position: usize) -> Vec3 {
    debug_assert!(position < SIZE * SIZE);

    let Frame {
        normal,
        right,
        down,
    } = face.frame();
    let (row, column) = (position / SIZE, position % SIZE);

    add_scaled(add_scaled(normal, offset(column), right), offset(row), down)
}

/// The position on `face` of the facelet carried by `cubie`, or `None` if
/// that cubie has no facelet on `face`.
#[must_use]
pub fn facelet_position(face: Face, cubie: Vec3) -> Option<usize> {
    let Frame {
        normal,
        right,
        down,
    } = face.frame();

    if dot(cubie, normal) != 1 || cubie.iter().any(|c| c.abs() > 1) {
        return None;
    }

    let row = usize::try_from(dot(cubie, down) + 1).ok()?;
    let column = usize::try_from(dot(cubie, right) + 1).ok()?;

    Some(row * SIZE + column)
}

/// The facelets of one face that move with a turn of a neighbouring face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideStrip {
    pub face: Face,
    /// Positions listed along the ring's common winding rather than in
    /// ascending order.
    pub positions: [usize; SIZE],
}

impl SideStrip {
    /// Whether the winding runs against the face's own index order, which
    /// relabels the strip before it moves on to the next face. Turns never
    /// ask: the relabeling is already in the order of `positions`.
    #[cfg(test)]
    fn is_relabeled(&self) -> bool {
        !self.positions.is_sorted()
    }
}

/// Everything a quarter turn of one face needs to know about its
/// surroundings. Independent of the turning direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnGeometry {
    pub face: Face,
    /// One strip per ring face, in the order of `face.ring()`.
    pub strips: [SideStrip; SIDE_COUNT],
    /// Whether a clockwise turn carries the ring the same way as the
    /// clockwise side matrix. When it does not, the side matrix of the
    /// opposite direction applies.
    pub clockwise_with_ring: bool,
}

impl TurnGeometry {
    fn derive(face: Face) -> TurnGeometry {
        let normal = face.normal();
        let ring = face.ring();

        let strips = ring.map(|side| {
            // Invariant under turns about `normal`, so it lines up the strips
            // of all four sides.
            let tangent = cross(normal, side.normal());

            let mut positions = [0; SIZE];
            for (slot, position) in positions.iter_mut().zip(
                (0..SIZE * SIZE)
                    .filter(|&position| dot(facelet_cubie(side, position), normal) == 1)
                    .sorted_by_key(|&position| dot(facelet_cubie(side, position), tangent)),
            ) {
                *slot = position;
            }

            SideStrip {
                face: side,
                positions,
            }
        });

        let image = rotate(ring[0].normal(), normal, Direction::Clockwise);

        TurnGeometry {
            face,
            strips,
            clockwise_with_ring: ring[2].normal() == image,
        }
    }

    /// Rows of the facelet array that the side matrix is embedded into.
    #[must_use]
    pub fn ring_slots(&self) -> [usize; SIDE_COUNT] {
        self.strips.map(|strip| strip.face.index())
    }

    /// The direction of the side matrix that realizes a turn of `direction`.
    #[must_use]
    pub fn side_direction(&self, direction: Direction) -> Direction {
        if self.clockwise_with_ring {
            direction
        } else {
            direction.inverse()
        }
    }
}

static TURN_GEOMETRY: LazyLock<[TurnGeometry; FACE_COUNT]> =
    LazyLock::new(|| Face::ALL.map(TurnGeometry::derive));

/// The geometry of a quarter turn of `face`.
#[must_use]
pub fn turn_geometry(face: Face) -> &'static TurnGeometry {
    &TURN_GEOMETRY[face.index()]
}
