use std::{
    fmt::{self, Debug, Display},
    ops::Index,
};

use crate::{FACE_COUNT, FACELETS_PER_FACE, SIZE, color::Color, geometry::Face};

pub const NET_ROWS: usize = 3 * SIZE;
pub const NET_COLUMNS: usize = 4 * SIZE;

/// Where each face sits in the unfolded net, as (face, block row, block
/// column) with blocks of `SIZE × SIZE` cells.
const NET_LAYOUT: [(Face, usize, usize); 6] = [
    (Face::Up, 0, 1),
    (Face::Left, 1, 0),
    (Face::Front, 1, 1),
    (Face::Right, 1, 2),
    (Face::Back, 1, 3),
    (Face::Down, 2, 1),
];

/// A copy of the facelet array: one row per face, one row-major color
/// identifier per position.
///
/// Handed out by [`Cube::snapshot`](crate::Cube::snapshot). Changing a
/// snapshot never changes the cube it came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelets {
    pub(crate) rows: [[u8; FACELETS_PER_FACE]; FACE_COUNT],
}

impl Facelets {
    /// Every face filled with its own color.
    #[must_use]
    pub fn solved() -> Facelets {
        Facelets {
            rows: Face::ALL.map(|face| [Color::of_face(face).id(); FACELETS_PER_FACE]),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[[u8; FACELETS_PER_FACE]; FACE_COUNT] {
        &self.rows
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[u8; FACELETS_PER_FACE] {
        &self.rows[face.index()]
    }

    /// The color at `position` of `face`, or `None` if `position` is off the
    /// face.
    #[must_use]
    pub fn color(&self, face: Face, position: usize) -> Option<Color> {
        self.face(face)
            .get(position)
            .copied()
            .and_then(Color::from_id)
    }

    /// How often each color occurs, indexed by identifier minus one.
    #[must_use]
    pub fn color_counts(&self) -> [usize; FACE_COUNT] {
        let mut counts = [0; FACE_COUNT];

        for &id in self.rows.iter().flatten() {
            if let Some(color) = Color::from_id(id) {
                counts[usize::from(color.id() - 1)] += 1;
            }
        }

        counts
    }

    /// Every cell holds a known color and every color occurs once per
    /// facelet of a face.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.rows.iter().flatten().all(|&id| Color::from_id(id).is_some())
            && self
                .color_counts()
                .iter()
                .all(|&count| count == FACELETS_PER_FACE)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().all(|&id| id == row[0]))
    }

    /// The unfolded net: Up on top, then Left Front Right Back, then Down.
    /// Cells outside the six faces are `None`.
    #[must_use]
    pub fn net(&self) -> [[Option<Color>; NET_COLUMNS]; NET_ROWS] {
        let mut grid = [[None; NET_COLUMNS]; NET_ROWS];

        for (face, block_row, block_column) in NET_LAYOUT {
            for position in 0..FACELETS_PER_FACE {
                grid[block_row * SIZE + position / SIZE][block_column * SIZE + position % SIZE] =
                    self.color(face, position);
            }
        }

        grid
    }
}

impl Index<(Face, usize)> for Facelets {
    type Output = u8;

    fn index(&self, (face, position): (Face, usize)) -> &Self::Output {
        &self.rows[face.index()][position]
    }
}

impl Debug for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();

        for face in Face::ALL {
            map.entry(&face, self.face(face));
        }

        map.finish()
    }
}

impl Display for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.net() {
            let mut line = String::new();

            for (column, cell) in row.iter().enumerate() {
                if column > 0 && column % SIZE == 0 {
                    line.push(' ');
                }
                line.push(cell.map_or(' ', Color::letter));
            }

            writeln!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
