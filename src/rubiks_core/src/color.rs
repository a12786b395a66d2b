use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::Face;

/// Sticker colors. The identifier of each color is the number stored in the
/// facelet array, and color `k` is the solved color of face `k - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White = 1,
    Yellow = 2,
    Red = 3,
    Orange = 4,
    Blue = 5,
    Green = 6,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    #[must_use]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.id() == id)
    }

    /// The color that fills `face` when the cube is solved.
    #[must_use]
    pub fn of_face(face: Face) -> Color {
        Color::ALL[face.index()]
    }

    /// RGBA in `0.0..=1.0`, as handed to a renderer.
    #[must_use]
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Color::White => [1.0, 1.0, 1.0, 1.0],
            Color::Yellow => [1.0, 1.0, 0.0, 1.0],
            Color::Red => [1.0, 0.0, 0.0, 1.0],
            Color::Orange => [1.0, 0.647, 0.0, 1.0],
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
            Color::Green => [0.0, 0.502, 0.0, 1.0],
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
